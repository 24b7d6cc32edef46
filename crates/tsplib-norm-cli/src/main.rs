//! tsplib-norm CLI: normalize TSPLIB95 files to JSON.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "tsplib-norm")]
#[command(about = "Normalize TSPLIB95 problem files to dense-matrix JSON records")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert TSPLIB files to JSON records
    Convert {
        /// Input files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Worker threads (default: all cores)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Summarize a TSPLIB file
    Inspect {
        /// File to inspect
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Convert {
            files,
            output,
            jobs,
            pretty,
        } => commands::convert::run(&files, &output, jobs, pretty),
        Commands::Inspect { file, json } => commands::inspect::run(&file, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
