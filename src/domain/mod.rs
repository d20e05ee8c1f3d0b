//! Domain logic - the version value type and everything built on it

pub mod expr;
pub mod tag;
pub mod version;

pub use expr::{Evaluation, Operand, Operator};
pub use tag::TagPattern;
pub use version::{Component, Version};
