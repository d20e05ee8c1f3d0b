use std::fmt;

/// Warnings raised while reading versions from user input.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Input carried leading zeros that were dropped
    NonCanonicalInput { input: String, canonical: String },
    /// Input matched the configured tag pattern and was unwrapped to its version
    PrefixStripped { input: String, version: String },
    /// Input was read as a bare version because it doesn't match the configured pattern
    TagMismatchPattern { input: String, pattern: String },
}

impl BoundaryWarning {
    /// Check a raw version string against its canonical rendering
    pub fn non_canonical(input: &str, canonical: &str) -> Option<Self> {
        (input != canonical).then(|| BoundaryWarning::NonCanonicalInput {
            input: input.to_string(),
            canonical: canonical.to_string(),
        })
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NonCanonicalInput { input, canonical } => {
                write!(f, "Version '{}' normalized to '{}'", input, canonical)
            }
            BoundaryWarning::PrefixStripped { input, version } => {
                write!(f, "Read '{}' as version '{}'", input, version)
            }
            BoundaryWarning::TagMismatchPattern { input, pattern } => {
                write!(f, "Version '{}' does not match pattern '{}'", input, pattern)
            }
        }
    }
}
