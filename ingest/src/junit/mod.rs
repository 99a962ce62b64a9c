pub mod date_parser;
pub mod duration;
pub mod failure;
pub mod ingest;
pub mod node;
pub mod properties;
pub mod scanner;
pub mod suite;
pub mod test_case;
pub mod totals;
pub mod types;

pub(crate) mod tags {
    pub const TEST_SUITE: &str = "testsuite";
    pub const TEST_CASE: &str = "testcase";
    pub const TEST_CASE_STATUS_SKIPPED: &str = "skipped";
    pub const TEST_CASE_STATUS_FAILURE: &str = "failure";
    pub const TEST_CASE_STATUS_ERROR: &str = "error";
    pub const PROPERTIES: &str = "properties";
    pub const PROPERTY: &str = "property";
    pub const SYSTEM_OUT: &str = "system-out";
    pub const SYSTEM_ERR: &str = "system-err";
}

pub(crate) mod attrs {
    pub const NAME: &str = "name";
    pub const PACKAGE: &str = "package";
    pub const TIMESTAMP: &str = "timestamp";
    pub const CLASSNAME: &str = "classname";
    pub const TIME: &str = "time";
    pub const MESSAGE: &str = "message";
    pub const TYPE: &str = "type";
    pub const VALUE: &str = "value";
}
