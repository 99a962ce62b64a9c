use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop ingestion of a document.
///
/// Everything else (missing attributes, odd durations, bad timestamps) is
/// absorbed by the builders and never surfaces here.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("malformed xml at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },
    #[error("element `{0}` is never closed")]
    UnclosedElement(String),
    #[error("could not read `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid glob pattern")]
    GlobPattern(#[from] glob::PatternError),
    #[error("could not scan glob")]
    Glob(#[from] glob::GlobError),
}

impl IngestError {
    pub(crate) fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
