use passquant_core::{SweepRow, length_sweep};

pub struct SweepCommandConfig<'a> {
    pub password: Option<&'a str>,
    pub classical_ops: f64,
    pub quantum_ops: f64,
    pub output_path: Option<&'a str>,
}

pub fn run(cfg: SweepCommandConfig<'_>) {
    let pool = super::reference_pool(cfg.password);
    let assumptions = super::assumptions(cfg.classical_ops, cfg.quantum_ops);
    let rows = length_sweep(pool, &assumptions);

    print_sweep(pool, &rows);

    if let Some(path) = cfg.output_path {
        super::write_json(path, &rows);
    }
}

/// Chart column width for the longest bar.
const CHART_CELLS: usize = 40;

/// Print the sweep table plus a text chart of log-scaled crack times.
pub fn print_sweep(pool: u32, rows: &[SweepRow]) {
    println!("Password length vs crack time (pool {pool}, average case):\n");
    println!(
        "  {:>6} {:>14} {:>20} {:>20}",
        "Length", "Entropy (bits)", "log10(classical s)", "log10(quantum s)"
    );
    for row in rows {
        println!(
            "  {:>6} {:>14.2} {:>20.2} {:>20.2}",
            row.length, row.entropy_bits, row.log10_classical_secs, row.log10_quantum_secs
        );
    }

    // Scale both series against the largest finite value so the longest
    // classical bar spans the full chart width.
    let max_log = rows
        .iter()
        .flat_map(|r| [r.log10_classical_secs, r.log10_quantum_secs])
        .filter(|v| v.is_finite())
        .fold(0.0f64, f64::max);

    println!("\n  C = classical, Q = quantum (bar length ∝ log10 of crack time)");
    for row in rows {
        println!("  len {:>2} C {}", row.length, bar(row.log10_classical_secs, max_log));
        println!("         Q {}", bar(row.log10_quantum_secs, max_log));
    }
    println!(
        "\nGrover still gives only a √N speedup — longer passwords stay out of reach \
         for both attackers."
    );
}

fn bar(value: f64, max: f64) -> String {
    if !value.is_finite() {
        return format!("{} ∞", "█".repeat(CHART_CELLS));
    }
    if max <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * CHART_CELLS as f64).round().max(0.0) as usize;
    "█".repeat(cells.min(CHART_CELLS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_to_width() {
        assert_eq!(bar(10.0, 10.0).chars().count(), CHART_CELLS);
        assert_eq!(bar(5.0, 10.0).chars().count(), CHART_CELLS / 2);
        assert_eq!(bar(0.0, 10.0), "");
    }

    #[test]
    fn test_bar_infinite_is_capped_and_marked() {
        let b = bar(f64::INFINITY, 10.0);
        assert!(b.ends_with('∞'));
    }

    #[test]
    fn test_bar_zero_max() {
        assert_eq!(bar(0.0, 0.0), "");
    }
}
