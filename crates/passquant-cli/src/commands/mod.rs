pub mod analyze;
pub mod generate;
pub mod sweep;

use passquant_core::{AttackAssumptions, LOWER_POOL, effective_pool_size};

/// Meter width in cells.
const METER_CELLS: usize = 20;

/// Render a [0,100] percentage as a filled-bar meter.
pub fn meter(percent: u8) -> String {
    let filled = (percent as usize * METER_CELLS) / 100;
    let mut bar = String::with_capacity(METER_CELLS + 2);
    bar.push('[');
    for i in 0..METER_CELLS {
        bar.push(if i < filled { '█' } else { '·' });
    }
    bar.push(']');
    bar
}

/// Build attacker assumptions from the shared CLI flags.
pub fn assumptions(classical_ops: f64, quantum_ops: f64) -> AttackAssumptions {
    AttackAssumptions {
        classical_ops,
        quantum_ops,
    }
}

/// Pool for a sweep's reference password. Falls back to the lowercase pool
/// when no password is given or it matches no recognized class, so the chart
/// always has a nonzero base.
pub fn reference_pool(password: Option<&str>) -> u32 {
    password
        .map(effective_pool_size)
        .filter(|&pool| pool > 0)
        .unwrap_or(LOWER_POOL)
}

/// Write pretty-printed JSON to a path, exiting nonzero on I/O failure.
pub fn write_json<T: serde::Serialize>(path: &str, value: &T) {
    let json = match serde_json::to_string_pretty(value) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Failed to serialize report: {e}");
            std::process::exit(1);
        }
    };
    log::debug!("writing {} bytes to {path}", json.len());
    if let Err(e) = std::fs::write(path, json) {
        eprintln!("Failed to write {path}: {e}");
        std::process::exit(1);
    }
    println!("\nReport written to {path}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_empty() {
        assert_eq!(meter(0), "[····················]");
    }

    #[test]
    fn test_meter_full() {
        assert_eq!(meter(100), "[████████████████████]");
    }

    #[test]
    fn test_meter_partial() {
        let bar = meter(50);
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), 10);
        assert_eq!(bar.chars().count(), METER_CELLS + 2);
    }

    #[test]
    fn test_reference_pool_from_password() {
        assert_eq!(reference_pool(Some("aA1!")), 94);
        assert_eq!(reference_pool(Some("abc")), 26);
    }

    #[test]
    fn test_reference_pool_fallback() {
        assert_eq!(reference_pool(None), 26);
        assert_eq!(reference_pool(Some("")), 26);
        assert_eq!(reference_pool(Some("   ")), 26);
    }

    #[test]
    fn test_assumptions_passthrough() {
        let a = assumptions(2e9, 5e5);
        assert_eq!(a.classical_ops, 2e9);
        assert_eq!(a.quantum_ops, 5e5);
    }
}
