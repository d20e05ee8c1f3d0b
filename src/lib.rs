pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use domain::{Component, TagPattern, Version};
pub use error::{DotverError, Result};
