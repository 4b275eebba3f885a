//! # passquant-core
//!
//! **How long would your password survive a quantum computer?**
//!
//! `passquant-core` estimates password strength from character-class
//! composition and projects brute-force crack times under two adversaries:
//! classical exhaustive search and an idealized Grover-oracle quantum search
//! (quadratic speedup, nothing more).
//!
//! ## Quick Start
//!
//! ```
//! use passquant_core::{AttackAssumptions, analyze};
//!
//! let report = analyze("correct horse", &AttackAssumptions::default(), true);
//! println!(
//!     "{} bits — classical {}, quantum {}",
//!     report.entropy_bits, report.classical.human, report.quantum.human
//! );
//! ```
//!
//! ## Architecture
//!
//! Pool detection → Entropy estimate → Crack-time model → Display mapping
//!
//! Four pure functions, composed linearly:
//! - [`estimate_entropy`]: presence of lowercase / uppercase / digit / symbol
//!   classes fixes an effective pool; entropy is `log2(pool) * length`.
//! - [`crack_time_seconds`]: `2^bits / ops` (classical) or `2^(bits/2) / ops`
//!   (quantum), halved for the average case. Non-positive throughput means
//!   an infinite wait.
//! - [`human_time`] / [`time_to_percent`]: render a duration as a readable
//!   string and a bounded meter percentage.
//!
//! [`length_sweep`] iterates the same model over lengths 4..=32 for charting,
//! and [`generate_password`] draws from the full 94-character pool with a
//! CSPRNG. Every function is stateless, total over its input domain, and
//! returns sentinels (0 bits, +infinity, "∞", clamped percent) instead of
//! errors.
//!
//! This is a search-space model only: no dictionary, pattern, or KDF-cost
//! analysis. Repeated characters score the same as random ones by design.

pub mod attack;
pub mod entropy;
pub mod format;
pub mod generate;
pub mod pool;
pub mod report;
pub mod sweep;

pub use attack::{Adversary, AttackAssumptions, crack_time_seconds};
pub use entropy::{StrengthTier, entropy_for_length, estimate_entropy};
pub use format::{DAY_SECS, HOUR_SECS, MINUTE_SECS, YEAR_SECS, human_time, time_to_percent};
pub use generate::{GENERATION_ALPHABET, generate_password};
pub use pool::{
    CharClasses, DIGIT_POOL, FULL_POOL, LOWER_POOL, SYMBOL_POOL, UPPER_POOL, effective_pool_size,
};
pub use report::{AttackEstimate, PasswordReport, analyze};
pub use sweep::{SWEEP_MAX_LENGTH, SWEEP_MIN_LENGTH, SweepRow, length_sweep, length_sweep_range};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
