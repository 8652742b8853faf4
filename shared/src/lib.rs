pub mod config;
pub mod dynamodb;
pub mod log;
