//! Strength meter formatting

use crate::services::StrengthTier;

const FILLED: char = '■';
const EMPTY: char = '□';

/// Four-bar meter for a tier, e.g. `■■□□`
pub fn strength_meter(tier: StrengthTier) -> String {
    let filled = tier.bars() as usize;
    std::iter::repeat(FILLED)
        .take(filled)
        .chain(std::iter::repeat(EMPTY).take(4 - filled))
        .collect()
}

/// Meter and label, or a placeholder when there is nothing to rate
pub fn format_strength(tier: Option<StrengthTier>) -> String {
    match tier {
        Some(tier) => format!("{} {}", strength_meter(tier), tier),
        None => "□□□□ (empty)".to_string(),
    }
}
