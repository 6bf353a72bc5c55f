//! Error types for vcalc-expr

use crate::coords::CoordinateSystem;
use thiserror::Error;

/// Errors raised while tokenizing or evaluating an expression
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    /// Text outside the supported term grammar
    #[error("Unsupported grammar at offset {offset} near '{fragment}': {reason}")]
    UnsupportedGrammar {
        offset: usize,
        fragment: String,
        reason: String,
    },

    /// A function name outside sin, cos, exp, sqrt, tan
    #[error("Unknown function '{name}' at offset {offset}")]
    UnknownFunction { name: String, offset: usize },

    /// A coefficient or exponent that is not a decimal number
    #[error("Invalid coefficient: '{0}'")]
    InvalidCoefficient(String),

    /// An axis name that the coordinate system does not define
    #[error("Axis '{axis}' is not defined in {system} coordinates")]
    AxisNotInSystem {
        axis: String,
        system: CoordinateSystem,
    },

    /// A coordinate system tag that is not recognized
    #[error("Unknown coordinate system: '{0}'")]
    UnknownCoordinateSystem(String),
}

impl ExprError {
    /// Build an `UnsupportedGrammar` error pointing into `source` at `offset`
    pub(crate) fn unsupported(source: &str, offset: usize, reason: impl Into<String>) -> Self {
        let fragment: String = source
            .get(offset..)
            .unwrap_or_default()
            .chars()
            .take(12)
            .collect();
        ExprError::UnsupportedGrammar {
            offset,
            fragment,
            reason: reason.into(),
        }
    }
}

/// Result type for expression operations
pub type ExprResult<T> = Result<T, ExprError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_fragment_is_truncated() {
        let err = ExprError::unsupported("3x+#abcdefghijklmnop", 3, "unexpected character");
        match err {
            ExprError::UnsupportedGrammar {
                offset, fragment, ..
            } => {
                assert_eq!(offset, 3);
                assert_eq!(fragment, "#abcdefghijk");
            }
            other => panic!("Expected grammar error, got {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_at_end_of_input() {
        let err = ExprError::unsupported("x+", 2, "empty term");
        assert_eq!(
            err.to_string(),
            "Unsupported grammar at offset 2 near '': empty term"
        );
    }
}
