//! Coefficients and elementary functions
//!
//! The two leaf primitives of term evaluation: turning numeric text into a
//! multiplier, and applying one of the fixed elementary functions.

use crate::error::{ExprError, ExprResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parse coefficient or exponent text.
///
/// Empty text is the neutral multiplier `1`, so `x` reads as `1x` and an
/// absent exponent as `^1`.
pub fn coefficient(text: &str) -> ExprResult<f64> {
    if text.is_empty() {
        return Ok(1.0);
    }
    text.parse::<f64>()
        .map_err(|_| ExprError::InvalidCoefficient(text.to_string()))
}

/// Elementary functions that may wrap a coordinate factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Function {
    Sin,
    Cos,
    Exp,
    Sqrt,
    Tan,
}

impl Function {
    /// Every supported function
    pub const ALL: [Function; 5] = [
        Function::Sin,
        Function::Cos,
        Function::Exp,
        Function::Sqrt,
        Function::Tan,
    ];

    /// Name as written in expressions
    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Exp => "exp",
            Function::Sqrt => "sqrt",
            Function::Tan => "tan",
        }
    }

    /// Evaluate the function
    pub fn apply(self, argument: f64) -> f64 {
        match self {
            Function::Sin => argument.sin(),
            Function::Cos => argument.cos(),
            Function::Exp => argument.exp(),
            Function::Sqrt => argument.sqrt(),
            Function::Tan => argument.tan(),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Function {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Function::ALL
            .into_iter()
            .find(|function| function.name() == s)
            .ok_or_else(|| ExprError::UnknownFunction {
                name: s.to_string(),
                offset: 0,
            })
    }
}

/// Apply a function given by name; the empty name is the identity.
pub fn apply_function(name: &str, argument: f64) -> ExprResult<f64> {
    if name.is_empty() {
        return Ok(argument);
    }
    Ok(name.parse::<Function>()?.apply(argument))
}
