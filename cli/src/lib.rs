pub mod ingest_command;
pub mod print;
