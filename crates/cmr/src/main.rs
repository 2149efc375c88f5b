//! cmr - CLI for CMM measurement report operations

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use commands::{check, export, parse};

#[derive(Parser)]
#[command(name = "cmr", version, about = "CMM measurement report toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a report and print a summary
    Parse(parse::ParseArgs),
    /// Export a report as CSV, XLSX or JSON
    Export(export::ExportArgs),
    /// Evaluate tolerances and report violations
    Check(check::CheckArgs),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match &cli.command {
        Commands::Parse(args) => parse::handle_parse(args),
        Commands::Export(args) => export::handle_export(args),
        Commands::Check(args) => check::handle_check(args),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
