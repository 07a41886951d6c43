//! Password strength scoring
//!
//! Additive heuristic: one point for each length threshold reached (8, 12,
//! 16, 20) and one point for each character class present, for a maximum of
//! eight points.

use std::fmt;

use crate::models::CharacterClass;

const LENGTH_THRESHOLDS: [usize; 4] = [8, 12, 16, 20];

/// Qualitative strength bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthTier {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthTier {
    /// Map a 0-8 score to a tier
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => StrengthTier::Weak,
            4..=5 => StrengthTier::Fair,
            6 => StrengthTier::Good,
            _ => StrengthTier::Strong,
        }
    }

    /// Number of filled bars (out of 4) shown for this tier
    pub fn bars(&self) -> u8 {
        match self {
            StrengthTier::Weak => 1,
            StrengthTier::Fair => 2,
            StrengthTier::Good => 3,
            StrengthTier::Strong => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Fair => "Fair",
            StrengthTier::Good => "Good",
            StrengthTier::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compute the raw 0-8 score
pub fn score(password: &str) -> u8 {
    let length = password.chars().count();
    let length_points = LENGTH_THRESHOLDS.iter().filter(|&&t| length >= t).count();

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| CharacterClass::Special.contains(c));

    let class_points = [has_lower, has_upper, has_digit, has_special]
        .iter()
        .filter(|&&present| present)
        .count();

    (length_points + class_points) as u8
}

/// Evaluate a password; `None` for the empty string
pub fn evaluate(password: &str) -> Option<StrengthTier> {
    if password.is_empty() {
        return None;
    }
    Some(StrengthTier::from_score(score(password)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_tier() {
        assert_eq!(evaluate(""), None);
        assert_eq!(score(""), 0);
    }

    #[test]
    fn test_mixed_eight_chars_is_fair() {
        assert_eq!(score("Abc12345"), 4);
        assert_eq!(evaluate("Abc12345"), Some(StrengthTier::Fair));
    }

    #[test]
    fn test_lowercase_only_is_weak() {
        assert_eq!(score("aaaaaaaa"), 2);
        assert_eq!(evaluate("aaaaaaaa"), Some(StrengthTier::Weak));
    }

    #[test]
    fn test_twenty_chars_all_classes_is_strong() {
        let password = "Abcdefgh1234567890!@";
        assert_eq!(password.len(), 20);
        assert_eq!(score(password), 8);
        assert_eq!(evaluate(password), Some(StrengthTier::Strong));
    }

    #[test]
    fn test_good_tier() {
        // 12 chars (2) + lower + upper + digit + special (4) = 6
        assert_eq!(score("Abcdefgh12!x"), 6);
        assert_eq!(evaluate("Abcdefgh12!x"), Some(StrengthTier::Good));
    }

    #[test]
    fn test_special_only_counts_known_symbols() {
        // '~' and ' ' are not in the special segment
        assert_eq!(score("~ ~"), 0);
        assert_eq!(score("+"), 1);
    }

    #[test]
    fn test_idempotent() {
        let password = "Correct-Horse-9";
        assert_eq!(evaluate(password), evaluate(password));
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(StrengthTier::from_score(3), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(4), StrengthTier::Fair);
        assert_eq!(StrengthTier::from_score(5), StrengthTier::Fair);
        assert_eq!(StrengthTier::from_score(6), StrengthTier::Good);
        assert_eq!(StrengthTier::from_score(7), StrengthTier::Strong);
        assert_eq!(StrengthTier::Strong.bars(), 4);
        assert_eq!(StrengthTier::Weak.bars(), 1);
    }
}
