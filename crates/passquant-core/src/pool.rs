//! Character-class pool detection.
//!
//! A password's search space is modeled from the character classes it
//! *contains*, not from the characters themselves: each of the four
//! recognized classes contributes a fixed sub-pool size, and the effective
//! pool is the sum over classes present. Presence is binary — a password
//! with one digit and a password with ten digits get the same digit
//! contribution.

use serde::Serialize;

/// Lowercase ASCII letters.
pub const LOWER_POOL: u32 = 26;
/// Uppercase ASCII letters.
pub const UPPER_POOL: u32 = 26;
/// Decimal digits.
pub const DIGIT_POOL: u32 = 10;
/// ASCII punctuation (the 32 characters matched by `char::is_ascii_punctuation`).
pub const SYMBOL_POOL: u32 = 32;
/// All four classes combined.
pub const FULL_POOL: u32 = LOWER_POOL + UPPER_POOL + DIGIT_POOL + SYMBOL_POOL;

/// Which of the four recognized character classes appear in a password.
///
/// Whitespace and non-ASCII characters match no class; a password made of
/// only such characters has an effective pool of 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CharClasses {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl CharClasses {
    /// Scan a password and record which classes are present.
    pub fn detect(password: &str) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            if c.is_ascii_lowercase() {
                classes.lower = true;
            } else if c.is_ascii_uppercase() {
                classes.upper = true;
            } else if c.is_ascii_digit() {
                classes.digit = true;
            } else if c.is_ascii_punctuation() {
                classes.symbol = true;
            }
        }
        classes
    }

    /// Sum of sub-pool sizes for the classes present.
    ///
    /// Always one of {0, 26, 36, 46, 52, 58, 62, 68, 78, 88, 94}.
    pub fn pool_size(&self) -> u32 {
        let mut pool = 0;
        if self.lower {
            pool += LOWER_POOL;
        }
        if self.upper {
            pool += UPPER_POOL;
        }
        if self.digit {
            pool += DIGIT_POOL;
        }
        if self.symbol {
            pool += SYMBOL_POOL;
        }
        pool
    }

    /// True if at least one recognized class is present.
    pub fn any(&self) -> bool {
        self.lower || self.upper || self.digit || self.symbol
    }
}

impl std::fmt::Display for CharClasses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names = Vec::with_capacity(4);
        if self.lower {
            names.push("lower");
        }
        if self.upper {
            names.push("upper");
        }
        if self.digit {
            names.push("digit");
        }
        if self.symbol {
            names.push("symbol");
        }
        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join("+"))
        }
    }
}

/// Effective pool size for a password: detect classes, then sum sub-pools.
pub fn effective_pool_size(password: &str) -> u32 {
    CharClasses::detect(password).pool_size()
}
