pub mod error;
pub mod junit;

pub use error::IngestError;
pub use junit::ingest::{
    ingest, ingest_dir, ingest_file, ingest_files, ingest_glob, ingest_reader, suites,
};
pub use junit::types::{Status, Suite, Test, TestError, Totals};
