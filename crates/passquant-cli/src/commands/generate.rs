use passquant_core::{AttackAssumptions, analyze, generate_password};

pub fn run(length: u16, run_analysis: bool) {
    let password = generate_password(length as usize);
    println!("{password}");

    if run_analysis {
        let report = analyze(&password, &AttackAssumptions::default(), true);
        println!(
            "\n{} bits ({}) — classical {}, quantum {}",
            report.entropy_bits,
            report.tier.label(),
            report.classical.human,
            report.quantum.human
        );
    }
}
