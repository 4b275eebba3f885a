//! Comparative length sweep: how crack times scale as length grows.
//!
//! Holds a character pool fixed and recomputes entropy plus average-case
//! classical and quantum crack times for each length, producing one row per
//! length for charting. Times are reported as `log10(seconds + 1)` so a
//! zero duration maps to 0 instead of negative infinity.

use serde::Serialize;
use std::ops::RangeInclusive;

use crate::attack::{Adversary, AttackAssumptions, crack_time_seconds};
use crate::entropy::entropy_for_length;

/// Shortest length covered by the default sweep.
pub const SWEEP_MIN_LENGTH: u32 = 4;
/// Longest length covered by the default sweep (inclusive).
pub const SWEEP_MAX_LENGTH: u32 = 32;

/// One row of the comparative sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepRow {
    pub length: u32,
    /// Full-precision entropy at this length (not the rounded display value).
    pub entropy_bits: f64,
    /// log10(average classical crack seconds + 1).
    pub log10_classical_secs: f64,
    /// log10(average quantum crack seconds + 1).
    pub log10_quantum_secs: f64,
}

/// Sweep the default length range 4..=32 for a fixed pool.
///
/// The pool is an explicit input; callers that derive it from a reference
/// password decide what to do when that password matches no class (the CLI
/// falls back to the lowercase pool).
pub fn length_sweep(pool: u32, assumptions: &AttackAssumptions) -> Vec<SweepRow> {
    length_sweep_range(pool, assumptions, SWEEP_MIN_LENGTH..=SWEEP_MAX_LENGTH)
}

/// Sweep an arbitrary inclusive length range for a fixed pool.
pub fn length_sweep_range(
    pool: u32,
    assumptions: &AttackAssumptions,
    lengths: RangeInclusive<u32>,
) -> Vec<SweepRow> {
    lengths
        .map(|length| {
            let entropy = entropy_for_length(pool, length);
            let classical =
                crack_time_seconds(entropy, assumptions.classical_ops, Adversary::Classical, true);
            let quantum =
                crack_time_seconds(entropy, assumptions.quantum_ops, Adversary::Quantum, true);
            SweepRow {
                length,
                entropy_bits: entropy,
                log10_classical_secs: (classical + 1.0).log10(),
                log10_quantum_secs: (quantum + 1.0).log10(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sweep_shape() {
        let rows = length_sweep(26, &AttackAssumptions::default());
        assert_eq!(rows.len(), 29);
        assert_eq!(rows.first().unwrap().length, 4);
        assert_eq!(rows.last().unwrap().length, 32);
        // Rows follow increasing length.
        for pair in rows.windows(2) {
            assert_eq!(pair[1].length, pair[0].length + 1);
        }
    }

    #[test]
    fn test_entropy_scales_linearly_with_length() {
        let rows = length_sweep(94, &AttackAssumptions::default());
        let per_char = 94f64.log2();
        for row in &rows {
            assert!((row.entropy_bits - per_char * row.length as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn test_times_monotonic_in_length() {
        let rows = length_sweep(62, &AttackAssumptions::default());
        for pair in rows.windows(2) {
            assert!(pair[1].log10_classical_secs > pair[0].log10_classical_secs);
            assert!(pair[1].log10_quantum_secs > pair[0].log10_quantum_secs);
        }
    }

    #[test]
    fn test_zero_pool_rows_are_flat() {
        let rows = length_sweep(0, &AttackAssumptions::default());
        for row in &rows {
            assert_eq!(row.entropy_bits, 0.0);
            // 2^0 / 1e9 / 2 is tiny; log10(t + 1) stays essentially 0.
            assert!(row.log10_classical_secs.abs() < 1e-9);
        }
    }

    #[test]
    fn test_no_rate_gives_infinite_log_times() {
        let assumptions = AttackAssumptions {
            classical_ops: 0.0,
            quantum_ops: -1.0,
        };
        let rows = length_sweep(26, &assumptions);
        assert!(rows.iter().all(|r| r.log10_classical_secs == f64::INFINITY));
        assert!(rows.iter().all(|r| r.log10_quantum_secs == f64::INFINITY));
    }

    #[test]
    fn test_custom_range() {
        let rows = length_sweep_range(26, &AttackAssumptions::default(), 8..=10);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].length, 8);
        assert_eq!(rows[2].length, 10);
    }

    #[test]
    fn test_known_row_value() {
        // pool 26, length 8: 26^8 / 1e9 / 2 = 104.4135... seconds.
        let rows = length_sweep_range(26, &AttackAssumptions::default(), 8..=8);
        let row = &rows[0];
        let classical_secs = 10f64.powf(row.log10_classical_secs) - 1.0;
        assert!((classical_secs - 104.4135).abs() < 0.01);
    }
}
