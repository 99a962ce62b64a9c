use std::{
    fs,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use super::{
    node::{self, XmlNode},
    scanner::SuiteScanner,
    suite::ingest_suite,
    types::Suite,
};
use crate::error::IngestError;

const REPORT_EXTENSION: &str = "xml";

/// Lazily builds every suite found under `root`, in document order.
pub fn suites(root: &XmlNode) -> impl Iterator<Item = Suite> + '_ {
    SuiteScanner::new(root).map(ingest_suite)
}

pub fn ingest_reader<R: BufRead>(xml: R) -> Result<Vec<Suite>, IngestError> {
    let root = node::parse(xml)?;
    Ok(suites(&root).collect())
}

pub fn ingest<T: AsRef<[u8]>>(data: T) -> Result<Vec<Suite>, IngestError> {
    ingest_reader(data.as_ref())
}

pub fn ingest_file<P: AsRef<Path>>(path: P) -> Result<Vec<Suite>, IngestError> {
    let path = path.as_ref();
    tracing::debug!("Ingesting {}", path.display());

    let file = fs::File::open(path).map_err(|err| IngestError::io(path, err))?;
    ingest_reader(BufReader::new(file))
}

/// Ingests each file in turn, concatenating their suites.
///
/// Stops at the first file that can't be read or parsed.
pub fn ingest_files<I, P>(paths: I) -> Result<Vec<Suite>, IngestError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut all_suites = Vec::new();
    for path in paths {
        all_suites.extend(ingest_file(path)?);
    }
    Ok(all_suites)
}

/// Ingests every regular file matched by a glob pattern.
pub fn ingest_glob<T: AsRef<str>>(pattern: T) -> Result<Vec<Suite>, IngestError> {
    let mut paths = Vec::new();
    for entry in glob::glob(pattern.as_ref())? {
        let path = entry?;
        if path.is_file() {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        tracing::warn!("No files matched {:?}", pattern.as_ref());
    }

    ingest_files(paths)
}

/// Ingests every `.xml` file anywhere under `directory`, in path order.
pub fn ingest_dir<P: AsRef<Path>>(directory: P) -> Result<Vec<Suite>, IngestError> {
    let directory = directory.as_ref();
    let metadata = fs::metadata(directory).map_err(|err| IngestError::io(directory, err))?;
    if !metadata.is_dir() {
        return Err(IngestError::io(
            directory,
            std::io::ErrorKind::NotADirectory.into(),
        ));
    }

    let pattern = format!(
        "{}/**/*.{}",
        glob::Pattern::escape(&directory.to_string_lossy()),
        REPORT_EXTENSION
    );
    let mut paths = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path: PathBuf = entry?;
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    tracing::debug!(
        "Found {} report files under {}",
        paths.len(),
        directory.display()
    );

    ingest_files(paths)
}
