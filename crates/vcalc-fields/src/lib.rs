//! vcalc-fields - Scalar and vector fields with differential operators
//!
//! Fields are expression text tied to a coordinate system. Gradient,
//! divergence and curl are computed by central finite differences with
//! the metric factors of cartesian, cylindrical and spherical coordinates.
//!
//! # Examples
//!
//! ```
//! use vcalc_fields::{CoordinateSystem, ScalarField, VectorField};
//!
//! let potential = ScalarField::new("72+3x^2+5cos(y^2)-3z", CoordinateSystem::Cartesian)?;
//! let gradient = potential.gradient(&[0.0, 0.0, 0.0])?;
//! assert!((gradient[2] + 3.0).abs() < 1e-6);
//!
//! let flow = VectorField::new("x^2+cos(7y)", "y^2", "3z^2", CoordinateSystem::Cartesian)?;
//! assert!(flow.divergence(&[0.0, 0.0, 0.0])?.abs() < 1e-6);
//! # Ok::<(), vcalc_fields::FieldError>(())
//! ```

pub mod config;
pub mod error;
pub mod field;
pub mod operators;
pub mod stencil;

pub use config::{DifferenceConfig, DEFAULT_POLE_TOLERANCE, DEFAULT_STEP};
pub use error::{FieldError, FieldResult};
pub use field::{ScalarField, VectorField};
pub use stencil::{check_domain, metric_factors, point_from_slice, Stencil};

// Re-export the expression types callers need to build fields
pub use vcalc_expr::{Axis, CoordinateSystem, ExprError, Point};
