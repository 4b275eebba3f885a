//! Brute-force crack-time model under classical and quantum adversaries.
//!
//! The quantum adversary models an idealized Grover oracle: a quadratic
//! speedup that halves the effective entropy exponent. It does not model
//! any further quantum algorithmic advantage.

use serde::{Deserialize, Serialize};

/// Adversary kind for the crack-time model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Adversary {
    /// Exhaustive search over the full 2^entropy space.
    Classical,
    /// Grover-style search over 2^(entropy/2) oracle queries.
    Quantum,
}

impl Adversary {
    /// Effective search exponent in bits for this adversary.
    pub fn effective_bits(&self, entropy_bits: f64) -> f64 {
        match self {
            Self::Classical => entropy_bits,
            Self::Quantum => entropy_bits / 2.0,
        }
    }
}

impl std::fmt::Display for Adversary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classical => write!(f, "classical"),
            Self::Quantum => write!(f, "quantum"),
        }
    }
}

/// Externally supplied attacker throughput assumptions.
///
/// These are assumptions, not measurements; zero or negative values model
/// "no feasible attack rate" and yield infinite times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackAssumptions {
    /// Classical guesses per second.
    pub classical_ops: f64,
    /// Quantum Grover-oracle operations per second.
    pub quantum_ops: f64,
}

impl Default for AttackAssumptions {
    fn default() -> Self {
        Self {
            classical_ops: 1e9,
            quantum_ops: 1e6,
        }
    }
}

impl AttackAssumptions {
    /// Throughput for the given adversary kind.
    pub fn ops_for(&self, adversary: Adversary) -> f64 {
        match adversary {
            Adversary::Classical => self.classical_ops,
            Adversary::Quantum => self.quantum_ops,
        }
    }
}

/// Expected wait in seconds to crack a password of the given entropy.
///
/// `average = true` gives the expected wait for a target uniformly placed in
/// the search space (half the full search); `false` gives the worst case
/// (the full search). Non-positive (or NaN) throughput returns
/// `f64::INFINITY`, as does entropy large enough to overflow `f64` — both
/// are defined outputs, not errors.
pub fn crack_time_seconds(
    entropy_bits: f64,
    ops_per_second: f64,
    adversary: Adversary,
    average: bool,
) -> f64 {
    if !(ops_per_second > 0.0) {
        return f64::INFINITY;
    }
    let full_search = adversary.effective_bits(entropy_bits).exp2() / ops_per_second;
    if average { full_search / 2.0 } else { full_search }
}
