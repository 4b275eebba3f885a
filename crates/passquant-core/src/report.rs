//! One-shot password analysis: entropy, crack times, display values.
//!
//! Composes the pool, entropy, attack, and format modules into a single
//! report the presentation layer can render directly. The report never
//! stores the password itself.

use log::debug;
use serde::Serialize;

use crate::attack::{Adversary, AttackAssumptions, crack_time_seconds};
use crate::entropy::{StrengthTier, estimate_entropy};
use crate::format::{human_time, time_to_percent};
use crate::pool::CharClasses;

/// Crack-time estimate for one adversary, with its display projections.
#[derive(Debug, Clone, Serialize)]
pub struct AttackEstimate {
    /// Duration in seconds; may be +infinity.
    pub seconds: f64,
    /// Human-readable duration ("∞" for NaN/infinite).
    pub human: String,
    /// Meter fill percentage in [0, 100].
    pub percent: u8,
}

impl AttackEstimate {
    fn from_seconds(seconds: f64) -> Self {
        Self {
            seconds,
            human: human_time(seconds),
            percent: time_to_percent(seconds),
        }
    }
}

/// Full analysis of one password under one set of attacker assumptions.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordReport {
    /// Password length in characters.
    pub length: usize,
    /// Which character classes were present.
    pub classes: CharClasses,
    /// Effective pool size derived from the classes.
    pub pool_size: u32,
    /// Entropy estimate in bits (rounded to 2 decimals).
    pub entropy_bits: f64,
    /// Qualitative recommendation tier.
    pub tier: StrengthTier,
    /// Throughput assumptions the times were computed under.
    pub assumptions: AttackAssumptions,
    /// True for average-case (expected) times, false for worst case.
    pub average: bool,
    pub classical: AttackEstimate,
    pub quantum: AttackEstimate,
}

/// Analyze a password: classify, estimate entropy, project crack times for
/// both adversaries.
///
/// Total over all inputs. An empty or unclassifiable password yields 0 bits
/// and near-zero crack times (a defined informational state, not an error).
pub fn analyze(password: &str, assumptions: &AttackAssumptions, average: bool) -> PasswordReport {
    let classes = CharClasses::detect(password);
    let entropy = estimate_entropy(password);
    debug!(
        "analyzing {}-char password: pool {}, {entropy} bits",
        password.chars().count(),
        classes.pool_size()
    );

    let classical =
        crack_time_seconds(entropy, assumptions.classical_ops, Adversary::Classical, average);
    let quantum = crack_time_seconds(entropy, assumptions.quantum_ops, Adversary::Quantum, average);

    PasswordReport {
        length: password.chars().count(),
        classes,
        pool_size: classes.pool_size(),
        entropy_bits: entropy,
        tier: StrengthTier::from_bits(entropy),
        assumptions: *assumptions,
        average,
        classical: AttackEstimate::from_seconds(classical),
        quantum: AttackEstimate::from_seconds(quantum),
    }
}
