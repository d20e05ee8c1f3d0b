//! Command layer shared by the binary and the integration tests

pub mod orchestration;

pub use orchestration::{resolve_version, run, Command, Outcome, EXIT_ERROR, EXIT_FALSE, EXIT_OK};
