//! Dynamically typed version expressions such as `2024.6.1 + 1` or
//! `1.2.3 >= 1.2.0`.
//!
//! Operands are either versions or integers. Comparisons are defined only
//! between two versions and arithmetic only as `version ± integer`; any
//! other pairing is rejected with [`DotverError::InvalidOperation`].

use crate::domain::version::{Component, Version};
use crate::error::{DotverError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// A value appearing on either side of an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Version(Version),
    Integer(i64),
}

/// Binary operators understood by [`evaluate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    Add,
    Sub,
}

/// Outcome of evaluating an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    Bool(bool),
    Version(Version),
}

impl Operand {
    /// Name of the operand's type, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Version(_) => "version",
            Operand::Integer(_) => "integer",
        }
    }

    /// Parse a single operand token.
    ///
    /// Anything containing a `.` must be a valid version; everything else
    /// must be a (possibly negative) integer.
    pub fn parse(token: &str) -> Result<Self> {
        if token.contains('.') {
            return Version::parse(token).map(Operand::Version);
        }
        token
            .parse::<i64>()
            .map(Operand::Integer)
            .map_err(|_| DotverError::expression(format!("Unrecognised operand: '{}'", token)))
    }

    /// Order two operands; only defined between two versions.
    pub fn compare(&self, other: &Operand) -> Result<Ordering> {
        match (self, other) {
            (Operand::Version(a), Operand::Version(b)) => Ok(a.cmp(b)),
            _ => Err(DotverError::invalid_operation(format!(
                "cannot compare {} '{}' with {} '{}'",
                self.kind(),
                self,
                other.kind(),
                other
            ))),
        }
    }

    /// Apply `op` with `self` on the left and `rhs` on the right
    pub fn apply(&self, op: Operator, rhs: &Operand) -> Result<Evaluation> {
        let outcome = match op {
            Operator::Eq => Evaluation::Bool(self.compare(rhs)? == Ordering::Equal),
            Operator::Ne => Evaluation::Bool(self.compare(rhs)? != Ordering::Equal),
            Operator::Lt => Evaluation::Bool(self.compare(rhs)? == Ordering::Less),
            Operator::Gt => Evaluation::Bool(self.compare(rhs)? == Ordering::Greater),
            Operator::Le => Evaluation::Bool(self.compare(rhs)? != Ordering::Greater),
            Operator::Ge => Evaluation::Bool(self.compare(rhs)? != Ordering::Less),
            Operator::Add | Operator::Sub => Evaluation::Version(self.shift(op, rhs)?),
        };
        Ok(outcome)
    }

    fn shift(&self, op: Operator, rhs: &Operand) -> Result<Version> {
        let (version, n) = match (self, rhs) {
            (Operand::Version(v), Operand::Integer(n)) => (v, *n),
            _ => {
                return Err(DotverError::invalid_operation(format!(
                    "cannot apply '{}' to {} '{}' and {} '{}'",
                    op,
                    self.kind(),
                    self,
                    rhs.kind(),
                    rhs
                )))
            }
        };

        // Signed shift applied to the patch; `- i64::MIN` has no i64 form
        let Some(shift) = (if op == Operator::Sub { n.checked_neg() } else { Some(n) }) else {
            return Err(DotverError::expression(format!(
                "Shift '{} {}' on {} is out of range for the patch component",
                op, n, version
            )));
        };

        match u32::try_from(shift.unsigned_abs()) {
            Ok(abs) if shift >= 0 => version.checked_add_patch(abs),
            Ok(abs) => version.checked_sub_patch(abs),
            Err(_) => Err(DotverError::OutOfRange {
                component: Component::Patch,
                version: version.to_string(),
                delta: shift,
            }),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Version(v) => write!(f, "{}", v),
            Operand::Integer(n) => write!(f, "{}", n),
        }
    }
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Le => "<=",
            Operator::Ge => ">=",
            Operator::Add => "+",
            Operator::Sub => "-",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = DotverError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "==" => Ok(Operator::Eq),
            "!=" => Ok(Operator::Ne),
            "<" => Ok(Operator::Lt),
            ">" => Ok(Operator::Gt),
            "<=" => Ok(Operator::Le),
            ">=" => Ok(Operator::Ge),
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            other => Err(DotverError::expression(format!(
                "Unknown operator: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Bool(b) => write!(f, "{}", b),
            Evaluation::Version(v) => write!(f, "{}", v),
        }
    }
}

fn expression_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Lazy lhs so two-character operators win over their one-character prefixes
        Regex::new(r"^\s*(\S+?)\s*(==|!=|<=|>=|<|>|\+|-)\s*(\S+)\s*$")
            .expect("expression pattern is valid")
    })
}

/// Split an expression into its operands and operator
pub fn parse(input: &str) -> Result<(Operand, Operator, Operand)> {
    let caps = expression_regex().captures(input).ok_or_else(|| {
        DotverError::expression(format!(
            "Cannot parse '{}' - expected <operand> <operator> <operand>",
            input
        ))
    })?;

    let lhs = Operand::parse(&caps[1])?;
    let op = caps[2].parse::<Operator>()?;
    let rhs = Operand::parse(&caps[3])?;
    Ok((lhs, op, rhs))
}

/// Parse and evaluate an expression
pub fn evaluate(input: &str) -> Result<Evaluation> {
    let (lhs, op, rhs) = parse(input)?;
    tracing::debug!(%lhs, %op, %rhs, "evaluating expression");
    lhs.apply(op, &rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_evaluate_comparisons() {
        assert_eq!(
            evaluate("2024.6.3 > 2024.6.2").unwrap(),
            Evaluation::Bool(true)
        );
        assert_eq!(
            evaluate("2024.6.2 < 2024.6.3").unwrap(),
            Evaluation::Bool(true)
        );
        assert_eq!(evaluate("1.2.3 == 1.2.3").unwrap(), Evaluation::Bool(true));
        assert_eq!(evaluate("1.2.3 != 1.2.3").unwrap(), Evaluation::Bool(false));
        assert_eq!(evaluate("1.2.3 <= 1.2.3").unwrap(), Evaluation::Bool(true));
        assert_eq!(evaluate("1.2.3 >= 1.2.4").unwrap(), Evaluation::Bool(false));
    }

    #[test]
    fn test_evaluate_without_whitespace() {
        assert_eq!(evaluate("1.2.3>=1.2.0").unwrap(), Evaluation::Bool(true));
        assert_eq!(
            evaluate("2024.6.1+1").unwrap(),
            Evaluation::Version(v("2024.6.2"))
        );
        assert_eq!(evaluate("1.2.3-2").unwrap(), Evaluation::Version(v("1.2.1")));
    }

    #[test]
    fn test_evaluate_arithmetic() {
        assert_eq!(
            evaluate("2024.6.1 + 1").unwrap(),
            Evaluation::Version(v("2024.6.2"))
        );
        assert_eq!(
            evaluate("2024.6.3 - 1").unwrap(),
            Evaluation::Version(v("2024.6.2"))
        );
        assert_eq!(
            evaluate("1.2.3 + -3").unwrap(),
            Evaluation::Version(v("1.2.0"))
        );
        assert_eq!(
            evaluate("1.2.3 - -1").unwrap(),
            Evaluation::Version(v("1.2.4"))
        );
    }

    #[test]
    fn test_cross_type_comparison_is_invalid() {
        for input in ["2024.6.1 > 2", "2024.6.1 < 2", "2 > 2024.6.1", "1 == 1"] {
            assert!(
                matches!(evaluate(input), Err(DotverError::InvalidOperation(_))),
                "expected InvalidOperation for {}",
                input
            );
        }
    }

    #[test]
    fn test_non_integer_rhs_arithmetic_is_invalid() {
        for input in ["1.2.3 + 1.0.0", "1 + 1.2.3", "1 - 1"] {
            assert!(
                matches!(evaluate(input), Err(DotverError::InvalidOperation(_))),
                "expected InvalidOperation for {}",
                input
            );
        }
    }

    #[test]
    fn test_malformed_version_operand() {
        assert!(matches!(
            evaluate("2010.d.45 > 1.0.0"),
            Err(DotverError::IncorrectVersion { .. })
        ));
    }

    #[test]
    fn test_malformed_expression() {
        assert!(matches!(
            evaluate("1.2.3"),
            Err(DotverError::Expression(_))
        ));
        assert!(matches!(
            evaluate("1.2.3 > abc"),
            Err(DotverError::Expression(_))
        ));
    }

    #[test]
    fn test_arithmetic_underflow() {
        assert!(matches!(
            evaluate("1.2.3 - 4"),
            Err(DotverError::OutOfRange { .. })
        ));
        assert!(matches!(
            evaluate("1.2.3 + 99999999999"),
            Err(DotverError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_large_shift_reports_signed_delta() {
        assert!(matches!(
            evaluate("1.2.3 - 99999999999"),
            Err(DotverError::OutOfRange {
                delta: -99999999999,
                ..
            })
        ));
        assert!(matches!(
            evaluate("1.2.3 - -99999999999"),
            Err(DotverError::OutOfRange {
                delta: 99999999999,
                ..
            })
        ));
    }

    #[test]
    fn test_subtracting_i64_min_is_rejected_with_operand() {
        let err = evaluate("1.2.3 - -9223372036854775808").unwrap_err();
        match err {
            DotverError::Expression(msg) => {
                assert!(msg.contains("- -9223372036854775808"), "got: {}", msg);
                assert!(msg.contains("1.2.3"), "got: {}", msg);
            }
            other => panic!("expected Expression error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_operation_message_names_operands() {
        let err = Operand::Version(v("2024.6.1"))
            .compare(&Operand::Integer(2))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid operation: cannot compare version '2024.6.1' with integer '2'"
        );
    }
}
