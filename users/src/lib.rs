//! Lambda that lists every user stored in the configured DynamoDB table.

pub mod handler;

pub use handler::{handle, Response};
