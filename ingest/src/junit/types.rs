use std::{collections::BTreeMap, time::Duration};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type Properties = BTreeMap<String, String>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Passed,
    Skipped,
    Failed,
    Error,
}

/// Rollup statistics over a suite and everything nested inside it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Totals {
    pub tests: usize,
    pub passed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub error: usize,
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Suite {
    pub name: String,
    pub package: String,
    /// `None` when the report has no timestamp or it isn't `YYYY-MM-DDTHH:MM:SS`.
    pub timestamp: Option<NaiveDateTime>,
    pub properties: Properties,
    pub tests: Vec<Test>,
    pub suites: Vec<Suite>,
    pub system_out: String,
    pub system_err: String,
    pub totals: Totals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Test {
    pub name: String,
    pub classname: String,
    pub duration: Duration,
    pub status: Status,
    pub message: String,
    pub error: Option<TestError>,
    pub properties: Properties,
    pub system_out: String,
    pub system_err: String,
}

/// Detail of a `failure` or `error` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TestError {
    pub body: String,
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}
