//! Central differences around a point
//!
//! A [`Stencil`] fixes the coordinate system, the point and the difference
//! step, checks that the point is not a singularity of the system, and then
//! evaluates metric-adjusted partial derivatives of any expression there.

use crate::config::DifferenceConfig;
use crate::error::{FieldError, FieldResult};
use vcalc_expr::{evaluate, Axis, CoordinateSystem, Point};

/// Convert a caller-supplied slice into a point
pub fn point_from_slice(point: &[f64]) -> FieldResult<Point> {
    <Point>::try_from(point).map_err(|_| FieldError::InvalidPointArity(point.len()))
}

/// Reject points where the system's metric factors vanish.
///
/// Cylindrical and spherical coordinates are singular at `r = 0`;
/// spherical coordinates also on the polar axis, where `sin(theta) = 0`.
pub fn check_domain(
    system: CoordinateSystem,
    point: &Point,
    pole_tolerance: f64,
) -> FieldResult<()> {
    let reason = match system {
        CoordinateSystem::Cartesian => None,
        CoordinateSystem::Cylindrical | CoordinateSystem::Spherical if point[0] == 0.0 => {
            Some("r = 0")
        }
        CoordinateSystem::Spherical if point[1].sin().abs() <= pole_tolerance => {
            Some("sin(theta) = 0")
        }
        CoordinateSystem::Cylindrical | CoordinateSystem::Spherical => None,
    };

    match reason {
        Some(reason) => {
            tracing::debug!(
                "Rejected {:?} in {} coordinates: {}",
                point,
                system,
                reason
            );
            Err(FieldError::DomainSingularity {
                system,
                point: *point,
                reason,
            })
        }
        None => Ok(()),
    }
}

/// Scale factors dividing the partial derivative along each axis
pub fn metric_factors(system: CoordinateSystem, point: &Point) -> [f64; 3] {
    match system {
        CoordinateSystem::Cartesian => [1.0, 1.0, 1.0],
        CoordinateSystem::Cylindrical => [1.0, point[0], 1.0],
        CoordinateSystem::Spherical => [1.0, point[0], point[0] * point[1].sin()],
    }
}

/// Difference stencil at one admissible point
#[derive(Debug, Clone)]
pub struct Stencil {
    system: CoordinateSystem,
    point: Point,
    step: f64,
    metric: [f64; 3],
}

impl Stencil {
    /// Build a stencil, validating arity and domain of `point`
    pub fn new(
        system: CoordinateSystem,
        point: &[f64],
        config: &DifferenceConfig,
    ) -> FieldResult<Self> {
        let point = point_from_slice(point)?;
        check_domain(system, &point, config.pole_tolerance)?;

        Ok(Self {
            system,
            point,
            step: config.step,
            metric: metric_factors(system, &point),
        })
    }

    /// The centre point
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Radial coordinate `r` (cylindrical and spherical)
    pub fn r(&self) -> f64 {
        self.point[0]
    }

    /// Polar angle `theta` (spherical)
    pub fn theta(&self) -> f64 {
        self.point[1]
    }

    /// Value of `expression` at the centre
    pub fn value(&self, expression: &str) -> FieldResult<f64> {
        Ok(evaluate(expression, &self.point, self.system)?)
    }

    /// Unscaled central difference `(f(p + h e) - f(p - h e)) / 2h`
    pub fn difference(&self, expression: &str, axis: Axis) -> FieldResult<f64> {
        let i = axis.index();
        let mut forward = self.point;
        let mut backward = self.point;
        forward[i] += self.step;
        backward[i] -= self.step;

        let ahead = evaluate(expression, &forward, self.system)?;
        let behind = evaluate(expression, &backward, self.system)?;
        Ok((ahead - behind) / (2.0 * self.step))
    }

    /// Central difference along `axis` divided by that axis' metric factor
    pub fn partial(&self, expression: &str, axis: Axis) -> FieldResult<f64> {
        Ok(self.difference(expression, axis)? / self.metric[axis.index()])
    }
}
