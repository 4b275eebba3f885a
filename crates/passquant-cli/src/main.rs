//! CLI for passquant — compare classical vs quantum (Grover) brute-force resistance.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "passquant")]
#[command(about = "passquant — compare classical vs quantum (Grover) brute-force resistance")]
#[command(version = passquant_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a password: entropy, crack times, safety meters, recommendation
    Analyze {
        /// Password to analyze
        password: Option<String>,

        /// Generate a random password and analyze it instead (default length 12)
        #[arg(
            long,
            value_name = "LEN",
            value_parser = clap::value_parser!(u16).range(6..=64),
            num_args = 0..=1,
            default_missing_value = "12",
            conflicts_with = "password"
        )]
        generate: Option<u16>,

        /// Classical guesses per second
        #[arg(long, default_value_t = 1e9)]
        classical_ops: f64,

        /// Quantum ops per second (Grover oracle)
        #[arg(long, default_value_t = 1e6)]
        quantum_ops: f64,

        /// Report worst-case (full search) times instead of average-case
        #[arg(long)]
        worst: bool,

        /// Append the length-sweep comparison chart for this password's pool
        #[arg(long)]
        chart: bool,

        /// Write the report as JSON
        #[arg(long)]
        output: Option<String>,
    },

    /// Chart crack times across lengths 4-32 for a fixed character pool
    Sweep {
        /// Reference password whose character classes fix the pool
        /// (defaults to lowercase-only when absent or unclassifiable)
        password: Option<String>,

        /// Classical guesses per second
        #[arg(long, default_value_t = 1e9)]
        classical_ops: f64,

        /// Quantum ops per second (Grover oracle)
        #[arg(long, default_value_t = 1e6)]
        quantum_ops: f64,

        /// Write sweep rows as JSON
        #[arg(long)]
        output: Option<String>,
    },

    /// Generate a cryptographically random password
    Generate {
        /// Password length
        #[arg(long, default_value = "12", value_parser = clap::value_parser!(u16).range(6..=64))]
        length: u16,

        /// Analyze the generated password under default attacker assumptions
        #[arg(long)]
        analyze: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            password,
            generate,
            classical_ops,
            quantum_ops,
            worst,
            chart,
            output,
        } => commands::analyze::run(commands::analyze::AnalyzeCommandConfig {
            password: password.as_deref(),
            generate_length: generate,
            classical_ops,
            quantum_ops,
            worst,
            chart,
            output_path: output.as_deref(),
        }),
        Commands::Sweep {
            password,
            classical_ops,
            quantum_ops,
            output,
        } => commands::sweep::run(commands::sweep::SweepCommandConfig {
            password: password.as_deref(),
            classical_ops,
            quantum_ops,
            output_path: output.as_deref(),
        }),
        Commands::Generate { length, analyze } => commands::generate::run(length, analyze),
    }
}
