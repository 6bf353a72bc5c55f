//! Scalar and vector field value objects
//!
//! A field pairs expression text with the coordinate system it is written
//! in. Construction checks that every axis the expression names belongs to
//! that system and that the expression tokenizes; evaluation and the
//! differential operators (see [`crate::operators`]) can then only fail on
//! the point they are given.

use crate::config::DifferenceConfig;
use crate::error::{FieldError, FieldResult};
use crate::stencil::point_from_slice;
use serde::{Deserialize, Serialize};
use vcalc_expr::{evaluate, referenced_axes, CoordinateSystem};

/// Collect the axis names of `expression` that `system` does not define
fn check_coordinate_names(expression: &str, system: CoordinateSystem) -> FieldResult<()> {
    let mut names: Vec<String> = Vec::new();
    for axis in referenced_axes(expression)? {
        if !system.has_axis(axis) && !names.iter().any(|name| name == axis) {
            names.push(axis.to_string());
        }
    }

    if names.is_empty() {
        return Ok(());
    }

    Err(FieldError::InvalidCoordinateNames {
        expression: expression.to_string(),
        system,
        names,
        allowed: system.axis_names(),
    })
}

/// A scalar function of position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScalarFieldSpec")]
pub struct ScalarField {
    expression: String,
    system: CoordinateSystem,
    config: DifferenceConfig,
}

/// Unvalidated wire form of a [`ScalarField`]
#[derive(Deserialize)]
struct ScalarFieldSpec {
    expression: String,
    system: CoordinateSystem,
    #[serde(default)]
    config: DifferenceConfig,
}

impl TryFrom<ScalarFieldSpec> for ScalarField {
    type Error = FieldError;

    fn try_from(spec: ScalarFieldSpec) -> FieldResult<Self> {
        Self::with_config(spec.expression, spec.system, spec.config)
    }
}

impl ScalarField {
    /// Build a field with the default difference settings.
    ///
    /// Fails with [`FieldError::InvalidCoordinateNames`] when the expression
    /// names an axis outside `system`, e.g. `"x+r"` in cartesian coordinates.
    pub fn new(expression: impl Into<String>, system: CoordinateSystem) -> FieldResult<Self> {
        Self::with_config(expression, system, DifferenceConfig::default())
    }

    /// Build a field with explicit difference settings
    pub fn with_config(
        expression: impl Into<String>,
        system: CoordinateSystem,
        config: DifferenceConfig,
    ) -> FieldResult<Self> {
        let expression = expression.into();
        config.validate()?;
        check_coordinate_names(&expression, system)?;

        tracing::debug!("Built scalar field '{}' in {} coordinates", expression, system);

        Ok(Self {
            expression,
            system,
            config,
        })
    }

    /// Build a field in the only coordinate system its axis names fit
    pub fn detect(expression: impl Into<String>) -> FieldResult<Self> {
        let expression = expression.into();
        match CoordinateSystem::detect(&expression) {
            Some(system) => Self::new(expression, system),
            None => Err(FieldError::UndetectedCoordinateSystem(expression)),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn system(&self) -> CoordinateSystem {
        self.system
    }

    pub fn config(&self) -> &DifferenceConfig {
        &self.config
    }

    /// Value of the field at `point`
    pub fn value_at(&self, point: &[f64]) -> FieldResult<f64> {
        let point = point_from_slice(point)?;
        Ok(evaluate(&self.expression, &point, self.system)?)
    }
}

/// A vector function of position, one expression per axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VectorFieldSpec")]
pub struct VectorField {
    components: [String; 3],
    system: CoordinateSystem,
    config: DifferenceConfig,
}

#[derive(Deserialize)]
struct VectorFieldSpec {
    components: [String; 3],
    system: CoordinateSystem,
    #[serde(default)]
    config: DifferenceConfig,
}

impl TryFrom<VectorFieldSpec> for VectorField {
    type Error = FieldError;

    fn try_from(spec: VectorFieldSpec) -> FieldResult<Self> {
        let [first, second, third] = spec.components;
        Self::with_config(first, second, third, spec.system, spec.config)
    }
}

impl VectorField {
    /// Build a field from its three component expressions.
    ///
    /// Every component is validated against `system`; the first offending
    /// component is reported.
    pub fn new(
        first: impl Into<String>,
        second: impl Into<String>,
        third: impl Into<String>,
        system: CoordinateSystem,
    ) -> FieldResult<Self> {
        Self::with_config(first, second, third, system, DifferenceConfig::default())
    }

    pub fn with_config(
        first: impl Into<String>,
        second: impl Into<String>,
        third: impl Into<String>,
        system: CoordinateSystem,
        config: DifferenceConfig,
    ) -> FieldResult<Self> {
        let components = [first.into(), second.into(), third.into()];
        config.validate()?;
        for component in &components {
            check_coordinate_names(component, system)?;
        }

        tracing::debug!(
            "Built vector field ({}, {}, {}) in {} coordinates",
            components[0],
            components[1],
            components[2],
            system
        );

        Ok(Self {
            components,
            system,
            config,
        })
    }

    /// Build a field in the only coordinate system all components fit
    pub fn detect(
        first: impl Into<String>,
        second: impl Into<String>,
        third: impl Into<String>,
    ) -> FieldResult<Self> {
        let components = [first.into(), second.into(), third.into()];
        let mut axes: Vec<&str> = Vec::new();
        for component in &components {
            for axis in referenced_axes(component)? {
                if !axes.contains(&axis) {
                    axes.push(axis);
                }
            }
        }

        match CoordinateSystem::detect_from_axes(&axes) {
            Some(system) => {
                let [first, second, third] = components;
                Self::new(first, second, third, system)
            }
            None => Err(FieldError::UndetectedCoordinateSystem(components.join(", "))),
        }
    }

    pub fn components(&self) -> &[String; 3] {
        &self.components
    }

    pub fn system(&self) -> CoordinateSystem {
        self.system
    }

    pub fn config(&self) -> &DifferenceConfig {
        &self.config
    }

    /// Component values at `point`
    pub fn value_at(&self, point: &[f64]) -> FieldResult<[f64; 3]> {
        let point = point_from_slice(point)?;
        let mut value = [0.0; 3];
        for (slot, component) in value.iter_mut().zip(&self.components) {
            *slot = evaluate(component, &point, self.system)?;
        }
        Ok(value)
    }
}
