//! Error types for vcalc-fields

use thiserror::Error;
use vcalc_expr::{CoordinateSystem, ExprError};

/// Main error type for field construction and operator evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// The expression names axes its coordinate system does not define
    #[error("Invalid coordinate names {names:?} in '{expression}' for {system} coordinates (allowed: {allowed:?})")]
    InvalidCoordinateNames {
        expression: String,
        system: CoordinateSystem,
        names: Vec<String>,
        allowed: [&'static str; 3],
    },

    /// No coordinate system could be inferred from the expression
    #[error("Cannot infer a coordinate system from '{0}'")]
    UndetectedCoordinateSystem(String),

    /// Tokenizer or evaluator failure
    #[error("Expression error: {0}")]
    Expression(#[from] ExprError),

    /// The point lies where the coordinate system is singular
    #[error("{system} coordinates are singular at {point:?}: {reason}")]
    DomainSingularity {
        system: CoordinateSystem,
        point: [f64; 3],
        reason: &'static str,
    },

    /// A point with other than three components
    #[error("Expected a point with 3 coordinates, got {0}")]
    InvalidPointArity(usize),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for field operations
pub type FieldResult<T> = Result<T, FieldError>;
