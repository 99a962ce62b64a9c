use std::io::Write;

use clap::{Parser, Subcommand};
use junit_ingest_cli::ingest_command::{run_ingest, IngestArgs};

const LOG_FILTER_ENV: &str = "JUNIT_INGEST_LOG";

#[derive(Debug, Parser)]
#[command(
    version = std::env!("CARGO_PKG_VERSION"),
    name = "junit-ingest",
    about = "Ingest JUnit XML reports into suites, tests and totals",
    bin_name = "junit-ingest",
)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Ingest JUnit XML files and print the suites found in them
    Ingest(IngestArgs),
}

fn main() -> anyhow::Result<()> {
    setup_logger()?;
    let cli = Cli::parse();
    match run(cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            log::error!("Error: {:?}", e);
            std::process::exit(exitcode::SOFTWARE);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    log::debug!("Starting junit-ingest {}", env!("CARGO_PKG_VERSION"));
    match cli.command {
        Commands::Ingest(ingest_args) => run_ingest(ingest_args),
    }
}

fn setup_logger() -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Info);
    if let Ok(log) = std::env::var(LOG_FILTER_ENV) {
        builder.parse_filters(&log);
    }
    builder.try_init()?;
    Ok(())
}
