//! Command orchestration logic
//!
//! Turns a parsed command plus configuration into an [`Outcome`]. Nothing
//! here prints or exits, so every command can be driven from tests without
//! going through clap or a terminal.

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{expr, Component, Evaluation, Version};
use crate::error::Result;
use crate::ui;

/// Exit code for a successful command or a true expression
pub const EXIT_OK: i32 = 0;
/// Exit code for an expression that evaluated to false
pub const EXIT_FALSE: i32 = 1;
/// Exit code for any error
pub const EXIT_ERROR: i32 = 2;

/// A command as understood by the orchestration layer.
///
/// Mirrors the CLI subcommands but does not depend on clap.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print every derived projection of a version
    Show { version: String },
    /// Bump one component up or down
    Bump {
        version: String,
        component: Component,
        down: bool,
    },
    /// Evaluate `<operand> <operator> <operand>`
    Eval { expression: String },
    /// Validate a version
    Check { version: String },
}

/// Result of a successful command
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Text for stdout
    pub output: String,

    /// Non-fatal issues found while reading input
    pub warnings: Vec<BoundaryWarning>,

    /// Process exit code
    pub exit_code: i32,
}

impl Outcome {
    fn ok(output: String, warnings: Vec<BoundaryWarning>) -> Self {
        Outcome {
            output,
            warnings,
            exit_code: EXIT_OK,
        }
    }
}

/// Read a version from user input, honouring the configured tag pattern.
///
/// Input matching a non-bare pattern (e.g. `v1.2.3` for `v{version}`) is
/// unwrapped and reported with [`BoundaryWarning::PrefixStripped`]. Anything
/// else is parsed as a bare version and flagged with a
/// [`BoundaryWarning::TagMismatchPattern`].
pub fn resolve_version(input: &str, config: &Config) -> Result<(Version, Vec<BoundaryWarning>)> {
    let pattern = config.tag.tag_pattern();
    let mut warnings = Vec::new();

    let (version, canonical) = match pattern.extract(input)? {
        Some(version) => {
            if !pattern.is_bare() {
                warnings.push(BoundaryWarning::PrefixStripped {
                    input: input.to_string(),
                    version: version.to_string(),
                });
            }
            (version, pattern.format(&version))
        }
        None => {
            let version = Version::parse(input)?;
            warnings.push(BoundaryWarning::TagMismatchPattern {
                input: input.to_string(),
                pattern: pattern.pattern.clone(),
            });
            (version, version.to_string())
        }
    };

    if config.behavior.warn_non_canonical {
        warnings.extend(BoundaryWarning::non_canonical(input, &canonical));
    }
    tracing::debug!(input, %version, "resolved version");
    Ok((version, warnings))
}

/// Run a single command.
///
/// # Returns
/// * `Ok(Outcome)` - output, warnings and exit code for the command
/// * `Err` - malformed input, invalid operations and out-of-range bumps
pub fn run(command: &Command, config: &Config) -> Result<Outcome> {
    let pattern = config.tag.tag_pattern();

    match command {
        Command::Show { version } => {
            let (version, warnings) = resolve_version(version, config)?;
            let report = ui::format_report(&ui::version_report(&version, &pattern));
            Ok(Outcome::ok(report, warnings))
        }
        Command::Bump {
            version,
            component,
            down,
        } => {
            let (version, warnings) = resolve_version(version, config)?;
            let bumped = version.bumped(*component, !down)?;
            Ok(Outcome::ok(pattern.format(&bumped), warnings))
        }
        Command::Eval { expression } => match expr::evaluate(expression)? {
            Evaluation::Bool(answer) => Ok(Outcome {
                output: answer.to_string(),
                warnings: Vec::new(),
                exit_code: if answer { EXIT_OK } else { EXIT_FALSE },
            }),
            Evaluation::Version(version) => Ok(Outcome::ok(pattern.format(&version), Vec::new())),
        },
        Command::Check { version } => {
            let (version, warnings) = resolve_version(version, config)?;
            Ok(Outcome::ok(pattern.format(&version), warnings))
        }
    }
}
