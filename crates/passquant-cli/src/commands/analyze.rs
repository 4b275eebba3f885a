use passquant_core::{PasswordReport, analyze, generate_password, length_sweep};

pub struct AnalyzeCommandConfig<'a> {
    pub password: Option<&'a str>,
    pub generate_length: Option<u16>,
    pub classical_ops: f64,
    pub quantum_ops: f64,
    pub worst: bool,
    pub chart: bool,
    pub output_path: Option<&'a str>,
}

pub fn run(cfg: AnalyzeCommandConfig<'_>) {
    let password = match (cfg.password, cfg.generate_length) {
        (Some(p), _) => p.to_string(),
        (None, Some(length)) => {
            let p = generate_password(length as usize);
            println!("Generated password: {p}\n");
            p
        }
        (None, None) => {
            eprintln!("Enter or generate a password to analyze.");
            std::process::exit(1);
        }
    };

    let assumptions = super::assumptions(cfg.classical_ops, cfg.quantum_ops);
    let report = analyze(&password, &assumptions, !cfg.worst);
    print_report(&password, &report);

    if cfg.chart {
        let pool = super::reference_pool(Some(&password));
        println!();
        super::sweep::print_sweep(pool, &length_sweep(pool, &assumptions));
    }

    if let Some(path) = cfg.output_path {
        super::write_json(path, &report);
    }
}

fn print_report(password: &str, report: &PasswordReport) {
    let case = if report.average { "avg" } else { "worst" };

    println!("Results for: `{password}`");
    println!(
        "Estimated entropy: {} bits (pool {}, classes: {})",
        report.entropy_bits, report.pool_size, report.classes
    );
    if report.pool_size == 0 {
        println!("  (no recognized character classes — empty or unclassifiable input)");
    }

    println!("\nEstimated attack times:");
    println!("  {:<18} {:<14} Seconds", "Scenario", "Human time");
    println!(
        "  {:<18} {:<14} {:.3e}",
        format!("Classical ({case})"),
        report.classical.human,
        report.classical.seconds
    );
    println!(
        "  {:<18} {:<14} {:.3e}",
        format!("Quantum ({case})"),
        report.quantum.human,
        report.quantum.seconds
    );

    println!("\nVisual safety meters:");
    println!(
        "  Classical  {} {:>3}%   ≈ {} {case}",
        super::meter(report.classical.percent),
        report.classical.percent,
        report.classical.human
    );
    println!(
        "  Quantum    {} {:>3}%   ≈ {} {case}",
        super::meter(report.quantum.percent),
        report.quantum.percent,
        report.quantum.human
    );

    println!("\nRecommendation: {}", report.tier.advice());
}
