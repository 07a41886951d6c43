//! Character classes and generation requests
//!
//! A password alphabet is built from up to four fixed segments. The segments
//! are always concatenated in canonical order (uppercase, lowercase, digits,
//! special) regardless of the order in which classes were enabled.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Shortest length the CLI accepts
pub const MIN_LENGTH: usize = 6;

/// Longest length the CLI accepts
pub const MAX_LENGTH: usize = 32;

/// Length used when nothing else is configured
pub const DEFAULT_LENGTH: usize = 12;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
// 28 characters; the repeated '+' is part of the segment.
const SPECIAL: &str = "!@#$%^&*()_-+={[}]|:;<,>.?/+";

/// A named group of symbols that can contribute to the alphabet
///
/// Variant order is the canonical segment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Special,
}

impl CharacterClass {
    /// All classes in canonical order
    pub fn all() -> [CharacterClass; 4] {
        [
            CharacterClass::Uppercase,
            CharacterClass::Lowercase,
            CharacterClass::Digits,
            CharacterClass::Special,
        ]
    }

    /// The literal alphabet segment for this class
    pub fn segment(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    /// Whether `c` belongs to this class's segment
    pub fn contains(&self, c: char) -> bool {
        self.segment().contains(c)
    }

    /// Parse a class from a user-facing name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "upper" | "uppercase" => Some(CharacterClass::Uppercase),
            "lower" | "lowercase" => Some(CharacterClass::Lowercase),
            "digit" | "digits" | "number" | "numbers" => Some(CharacterClass::Digits),
            "special" | "symbol" | "symbols" => Some(CharacterClass::Special),
            _ => None,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Uppercase => write!(f, "Uppercase"),
            CharacterClass::Lowercase => write!(f, "Lowercase"),
            CharacterClass::Digits => write!(f, "Digits"),
            CharacterClass::Special => write!(f, "Special"),
        }
    }
}

/// The set of enabled character classes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSelection(BTreeSet<CharacterClass>);

impl ClassSelection {
    /// An empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Every class enabled
    pub fn all() -> Self {
        CharacterClass::all().into_iter().collect()
    }

    /// Enable a class (idempotent)
    pub fn enable(&mut self, class: CharacterClass) {
        self.0.insert(class);
    }

    /// Disable a class (idempotent)
    pub fn disable(&mut self, class: CharacterClass) {
        self.0.remove(&class);
    }

    /// Builder-style enable
    pub fn with(mut self, class: CharacterClass) -> Self {
        self.enable(class);
        self
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0.contains(&class)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Enabled classes in canonical order
    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<CharacterClass> for ClassSelection {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Build the effective alphabet for a selection
pub fn alphabet_for(selection: &ClassSelection) -> String {
    selection.iter().map(|class| class.segment()).collect()
}

/// A request to generate one password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Enabled character classes (must be non-empty to generate)
    pub classes: ClassSelection,
    /// Number of characters to draw
    pub length: usize,
}

impl GenerationRequest {
    pub fn new(classes: ClassSelection, length: usize) -> Self {
        Self { classes, length }
    }

    /// Whether the length sits in the range the CLI offers
    pub fn is_length_in_range(&self) -> bool {
        (MIN_LENGTH..=MAX_LENGTH).contains(&self.length)
    }
}

/// One-shot generation presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPreset {
    /// 8 characters, lowercase and digits
    Weak,
    /// 12 characters, upper, lower and digits
    Medium,
    /// 16 characters, every class
    Strong,
}

impl GenerationPreset {
    /// Parse a preset from its name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weak" => Some(GenerationPreset::Weak),
            "medium" => Some(GenerationPreset::Medium),
            "strong" => Some(GenerationPreset::Strong),
            _ => None,
        }
    }

    /// The request this preset stands for
    pub fn request(&self) -> GenerationRequest {
        match self {
            GenerationPreset::Weak => GenerationRequest::new(
                ClassSelection::new()
                    .with(CharacterClass::Lowercase)
                    .with(CharacterClass::Digits),
                8,
            ),
            GenerationPreset::Medium => GenerationRequest::new(
                ClassSelection::new()
                    .with(CharacterClass::Uppercase)
                    .with(CharacterClass::Lowercase)
                    .with(CharacterClass::Digits),
                12,
            ),
            GenerationPreset::Strong => GenerationRequest::new(ClassSelection::all(), 16),
        }
    }
}
