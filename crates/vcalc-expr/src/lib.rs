//! vcalc-expr - Field expression tokenizer and evaluator
//!
//! Evaluates the restricted algebraic expressions used to describe scalar
//! and vector fields at a point of a cartesian, cylindrical or spherical
//! coordinate system.
//!
//! # Expression Syntax
//!
//! - **Terms**: `72`, `3x^2`, `5cos(y^2)`, `-3sin(2r^3)^5`
//! - **Products**: `phi*theta^2`, `r^3*cos(phi)/theta`
//! - **Sums**: `72+3x^2+5cos(y^2)-3z`
//!
//! A function wraps exactly one coordinate factor and parentheses never
//! nest. Operators apply left to right inside a term.
//!
//! # Examples
//!
//! ```
//! use vcalc_expr::{evaluate, CoordinateSystem};
//!
//! let value = evaluate("4x*y-3+z", &[3.0, 3.0, 1.0], CoordinateSystem::Cartesian)?;
//! assert_eq!(value, 34.0);
//! # Ok::<(), vcalc_expr::ExprError>(())
//! ```

pub mod ast;
pub mod coords;
pub mod error;
pub mod eval;
pub mod functions;
pub mod lexer;
pub mod parser;

pub use ast::*;
pub use coords::*;
pub use error::*;
pub use eval::*;
pub use functions::*;
pub use parser::*;
