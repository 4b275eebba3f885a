//! Composition entropy estimation and qualitative strength tiers.
//!
//! Entropy here is search-space size: `log2(pool) * length` bits for a
//! password of `length` characters drawn from an effective pool (see
//! [`crate::pool`]). Only class diversity and length matter — repeated or
//! patterned characters score the same as random ones. That is the model,
//! not a defect; it deliberately does not attempt dictionary or pattern
//! analysis.

use serde::Serialize;

use crate::pool::CharClasses;

/// Estimate entropy in bits from character-class composition.
///
/// Returns exactly 0.0 when no recognized class is present (empty password,
/// whitespace only, non-ASCII only). Otherwise `log2(pool) * length`,
/// rounded to two decimals for stable display. Length counts characters,
/// not bytes.
pub fn estimate_entropy(password: &str) -> f64 {
    let pool = CharClasses::detect(password).pool_size();
    if pool == 0 {
        return 0.0;
    }
    let length = password.chars().count() as f64;
    round2((pool as f64).log2() * length)
}

/// Full-precision entropy for an explicit pool and length.
///
/// Used by the length sweep, where the pool is fixed once and lengths vary;
/// no rounding is applied so downstream time computations keep precision.
pub fn entropy_for_length(pool: u32, length: u32) -> f64 {
    if pool == 0 {
        return 0.0;
    }
    (pool as f64).log2() * length as f64
}

fn round2(bits: f64) -> f64 {
    (bits * 100.0).round() / 100.0
}

/// Qualitative recommendation tier, selected from entropy alone.
///
/// Thresholds are half-open: weak below 40 bits, moderate below 60,
/// strong below 80, very strong at 80 and above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// Select the tier for an entropy estimate in bits.
    pub fn from_bits(bits: f64) -> Self {
        if bits < 40.0 {
            Self::Weak
        } else if bits < 60.0 {
            Self::Moderate
        } else if bits < 80.0 {
            Self::Strong
        } else {
            Self::VeryStrong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
            Self::VeryStrong => "very strong",
        }
    }

    /// Recommendation text shown alongside the tier.
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Weak => "Weak — use more diverse characters and longer length (≥12).",
            Self::Moderate => "Moderate — okay but can be stronger with length ≥16.",
            Self::Strong => {
                "Strong — safe against classical and moderately safe against quantum attacks."
            }
            Self::VeryStrong => "Very strong — high entropy; even Grover's algorithm struggles here.",
        }
    }
}

impl std::fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
