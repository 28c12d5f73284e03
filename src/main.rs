use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score running times against the reference table
    Running(cmd::running::RunningArgs),
    /// Score lifts (bodyweight ratios) against the reference table
    Weightlifting(cmd::weightlifting::WeightliftingArgs),
    /// Score every athlete in a CSV roster
    Batch(cmd::batch::BatchArgs),
    /// Print the reference tables
    Tables(cmd::tables::TablesArgs),
    /// Estimate a one-rep max from a set
    OneRepMax(cmd::one_rep_max::OneRepMaxArgs),
}

fn main() {
    let cli = Cli::parse();

    // Stdout carries reports and JSON; logs go to stderr.
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Running(args) => cmd::running::run(args),
        Commands::Weightlifting(args) => cmd::weightlifting::run(args),
        Commands::Batch(args) => cmd::batch::run(args),
        Commands::Tables(args) => cmd::tables::run(args),
        Commands::OneRepMax(args) => cmd::one_rep_max::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
