use std::path::Path;

use clap::{Args, ValueEnum};
use ingest::{ingest_dir, ingest_glob, IngestError, Suite, Totals};

use crate::print::{grand_totals, print_summary};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Every ingested suite tree as pretty-printed JSON
    #[default]
    Json,
    /// One line per top-level suite and a grand total
    Summary,
}

#[derive(Args, Clone, Debug)]
pub struct IngestArgs {
    #[arg(
        long,
        required = true,
        value_delimiter = ',',
        value_parser = clap::builder::NonEmptyStringValueParser::new(),
        help = "Comma-separated list of directories or glob paths to junit files."
    )]
    pub junit_paths: Vec<String>,
    #[arg(long, value_enum, default_value_t, help = "How to print the ingested suites.")]
    pub format: OutputFormat,
    #[arg(long, help = "Exit with a non-zero code when any test failed or errored.")]
    pub fail_on_failures: bool,
}

pub fn run_ingest(ingest_args: IngestArgs) -> anyhow::Result<i32> {
    let IngestArgs {
        junit_paths,
        format,
        fail_on_failures,
    } = ingest_args;

    let suites = match ingest_paths(&junit_paths) {
        Ok(suites) => suites,
        Err(e) => {
            log::error!("Failed to ingest junit files: {:#}", anyhow::Error::from(e));
            return Ok(exitcode::DATAERR);
        }
    };

    if suites.is_empty() {
        log::warn!("No test suites found in {:?}", junit_paths);
        return Ok(exitcode::NOINPUT);
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&suites)?),
        OutputFormat::Summary => print_summary(&suites),
    }

    let Totals { failed, error, .. } = grand_totals(&suites);
    if fail_on_failures && failed + error > 0 {
        log::info!("{} failed and {} errored tests", failed, error);
        return Ok(exitcode::DATAERR);
    }

    Ok(exitcode::OK)
}

/// Ingests each path in order; directories are walked for `.xml` files and
/// anything else is treated as a glob.
pub fn ingest_paths<T: AsRef<str>>(junit_paths: &[T]) -> Result<Vec<Suite>, IngestError> {
    let mut suites = Vec::new();
    for junit_path in junit_paths {
        let junit_path = junit_path.as_ref();
        let ingested = if Path::new(junit_path).is_dir() {
            ingest_dir(junit_path)?
        } else {
            ingest_glob(junit_path)?
        };
        log::info!(
            "Ingested {} test suites from {:?}",
            ingested.len(),
            junit_path
        );
        suites.extend(ingested);
    }
    Ok(suites)
}
