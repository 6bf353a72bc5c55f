//! Differential operators
//!
//! Gradient, divergence and curl by central differences. Every partial is
//! taken through a [`Stencil`], which applies the metric factor of its axis;
//! the curvilinear systems then add the non-derivative terms of their
//! divergence and curl identities.

use crate::error::FieldResult;
use crate::field::{ScalarField, VectorField};
use crate::stencil::Stencil;
use vcalc_expr::{Axis, CoordinateSystem};

impl ScalarField {
    /// Metric-adjusted partial derivative along `axis` at `point`
    pub fn partial(&self, axis: Axis, point: &[f64]) -> FieldResult<f64> {
        let stencil = Stencil::new(self.system(), point, self.config())?;
        stencil.partial(self.expression(), axis)
    }

    /// Gradient at `point`.
    ///
    /// Components follow the axis order of the field's system, e.g.
    /// `(d/dr, d/dtheta / r, d/dphi / (r sin theta))` in spherical
    /// coordinates.
    pub fn gradient(&self, point: &[f64]) -> FieldResult<[f64; 3]> {
        let stencil = Stencil::new(self.system(), point, self.config())?;

        let mut gradient = [0.0; 3];
        for axis in Axis::ALL {
            gradient[axis.index()] = stencil.partial(self.expression(), axis)?;
        }

        tracing::trace!(
            "gradient of '{}' at {:?} = {:?}",
            self.expression(),
            stencil.point(),
            gradient
        );
        Ok(gradient)
    }
}

impl VectorField {
    fn component(&self, axis: Axis) -> &str {
        &self.components()[axis.index()]
    }

    /// Metric-adjusted partial of one component along `axis`
    pub fn partial(&self, component: Axis, axis: Axis, point: &[f64]) -> FieldResult<f64> {
        let stencil = Stencil::new(self.system(), point, self.config())?;
        stencil.partial(self.component(component), axis)
    }

    /// Divergence at `point`
    pub fn divergence(&self, point: &[f64]) -> FieldResult<f64> {
        let stencil = Stencil::new(self.system(), point, self.config())?;

        let mut divergence = 0.0;
        for axis in Axis::ALL {
            divergence += stencil.partial(self.component(axis), axis)?;
        }

        match self.system() {
            CoordinateSystem::Cartesian => {}
            CoordinateSystem::Cylindrical => {
                divergence += stencil.value(self.component(Axis::First))? / stencil.r();
            }
            CoordinateSystem::Spherical => {
                let (r, theta) = (stencil.r(), stencil.theta());
                divergence += 2.0 * stencil.value(self.component(Axis::First))? / r
                    + stencil.value(self.component(Axis::Second))? / (r * theta.tan());
            }
        }

        tracing::trace!(
            "divergence of {:?} at {:?} = {}",
            self.components(),
            stencil.point(),
            divergence
        );
        Ok(divergence)
    }

    /// Curl at `point`
    pub fn curl(&self, point: &[f64]) -> FieldResult<[f64; 3]> {
        use Axis::{First, Second, Third};

        let stencil = Stencil::new(self.system(), point, self.config())?;
        // d(component)/d(axis), metric-adjusted
        let d = |component: Axis, axis: Axis| stencil.partial(self.component(component), axis);

        let mut curl = [
            d(Third, Second)? - d(Second, Third)?,
            d(First, Third)? - d(Third, First)?,
            d(Second, First)? - d(First, Second)?,
        ];

        match self.system() {
            CoordinateSystem::Cartesian => {}
            CoordinateSystem::Cylindrical => {
                curl[2] += stencil.value(self.component(Second))? / stencil.r();
            }
            CoordinateSystem::Spherical => {
                let (r, theta) = (stencil.r(), stencil.theta());
                let f2 = stencil.value(self.component(Second))?;
                let f3 = stencil.value(self.component(Third))?;
                curl[0] += f3 / (r * theta.tan());
                curl[1] -= f3 / r;
                curl[2] += f2 / r;
            }
        }

        tracing::trace!(
            "curl of {:?} at {:?} = {:?}",
            self.components(),
            stencil.point(),
            curl
        );
        Ok(curl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use std::f64::consts::PI;

    use CoordinateSystem::{Cartesian, Cylindrical, Spherical};

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_cartesian_gradient_of_quadratic() {
        let field = ScalarField::new("x^2+3y*z", Cartesian).unwrap();
        let gradient = field.gradient(&[1.0, 2.0, 3.0]).unwrap();
        assert_close(gradient[0], 2.0, 1e-6);
        assert_close(gradient[1], 9.0, 1e-6);
        assert_close(gradient[2], 6.0, 1e-6);
    }

    #[test]
    fn test_cylindrical_gradient_divides_phi_by_r() {
        let field = ScalarField::new("phi", Cylindrical).unwrap();
        let gradient = field.gradient(&[2.0, 0.3, 1.0]).unwrap();
        assert_close(gradient[0], 0.0, 1e-9);
        assert_close(gradient[1], 0.5, 1e-6);
        assert_close(gradient[2], 0.0, 1e-9);
    }

    #[test]
    fn test_partial_matches_gradient_component() {
        let field = ScalarField::new("r^2*theta", Spherical).unwrap();
        let point = [1.5, 0.7, 0.2];
        let gradient = field.gradient(&point).unwrap();
        for axis in Axis::ALL {
            assert_eq!(field.partial(axis, &point).unwrap(), gradient[axis.index()]);
        }
    }

    #[test]
    fn test_cylindrical_divergence_of_radial_field() {
        // div(r e_r) = 2
        let field = VectorField::new("r", "", "", Cylindrical).unwrap();
        assert_close(field.divergence(&[1.7, 0.4, -2.0]).unwrap(), 2.0, 1e-6);
    }

    #[test]
    fn test_spherical_divergence_of_radial_field() {
        // div(r e_r) = 3
        let field = VectorField::new("r", "", "", Spherical).unwrap();
        assert_close(field.divergence(&[0.8, 1.1, 2.5]).unwrap(), 3.0, 1e-6);
    }

    #[test]
    fn test_cylindrical_curl_of_azimuthal_field() {
        // curl(r e_phi) = 2 e_z
        let field = VectorField::new("", "r", "", Cylindrical).unwrap();
        let curl = field.curl(&[1.3, 0.2, 0.5]).unwrap();
        assert_close(curl[0], 0.0, 1e-9);
        assert_close(curl[1], 0.0, 1e-9);
        assert_close(curl[2], 2.0, 1e-6);
    }

    #[test]
    fn test_spherical_curl_of_azimuthal_field() {
        // curl(r sin(theta) e_phi) = 2 cos(theta) e_r - 2 sin(theta) e_theta
        let field = VectorField::new("", "", "r*sin(theta)", Spherical).unwrap();
        let theta = 0.9;
        let curl = field.curl(&[1.2, theta, 0.4]).unwrap();
        assert_close(curl[0], 2.0 * theta.cos(), 1e-6);
        assert_close(curl[1], -2.0 * theta.sin(), 1e-6);
        assert_close(curl[2], 0.0, 1e-9);
    }

    #[test]
    fn test_vector_partial() {
        let field = VectorField::new("x*y", "", "", Cartesian).unwrap();
        let partial = field.partial(Axis::First, Axis::Second, &[3.0, 1.0, 0.0]).unwrap();
        assert_close(partial, 3.0, 1e-6);
    }

    #[test]
    fn test_operators_reject_singular_points() {
        let scalar = ScalarField::new("r", Cylindrical).unwrap();
        assert!(matches!(
            scalar.gradient(&[0.0, 1.0, 1.0]),
            Err(FieldError::DomainSingularity { .. })
        ));

        let vector = VectorField::new("r", "theta", "phi", Spherical).unwrap();
        assert!(matches!(
            vector.divergence(&[1.0, PI, 1.0]),
            Err(FieldError::DomainSingularity { .. })
        ));
        assert!(matches!(
            vector.curl(&[1.0, 0.0, 1.0]),
            Err(FieldError::DomainSingularity { .. })
        ));
        assert!(matches!(
            vector.partial(Axis::First, Axis::First, &[0.0, 1.0, 1.0]),
            Err(FieldError::DomainSingularity { .. })
        ));
    }

    #[test]
    fn test_operators_reject_wrong_arity() {
        let field = VectorField::new("x", "y", "z", Cartesian).unwrap();
        assert_eq!(
            field.curl(&[1.0, 2.0]),
            Err(FieldError::InvalidPointArity(2))
        );
        assert_eq!(field.divergence(&[]), Err(FieldError::InvalidPointArity(0)));
    }
}
