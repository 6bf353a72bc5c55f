//! Coordinate systems and axis resolution
//!
//! Each coordinate system names its three axes in a fixed order:
//!
//! | system      | axis 1 | axis 2  | axis 3 |
//! |-------------|--------|---------|--------|
//! | cartesian   | `x`    | `y`     | `z`    |
//! | cylindrical | `r`    | `phi`   | `z`    |
//! | spherical   | `r`    | `theta` | `phi`  |
//!
//! Axis names are always compared as whole tokens, so `r` never matches
//! the `r` inside `sqrt`.

use crate::error::{ExprError, ExprResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three coordinate values, ordered like the system's axis names
pub type Point = [f64; 3];

/// Every axis name any coordinate system understands
pub const AXIS_NAMES: [&str; 6] = ["x", "y", "z", "r", "phi", "theta"];

/// A supported coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSystem {
    Cartesian,
    Cylindrical,
    Spherical,
}

/// Position of an axis within its coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    First,
    Second,
    Third,
}

impl Axis {
    /// All axes in order
    pub const ALL: [Axis; 3] = [Axis::First, Axis::Second, Axis::Third];

    /// Zero-based index into a `Point`
    pub fn index(self) -> usize {
        match self {
            Axis::First => 0,
            Axis::Second => 1,
            Axis::Third => 2,
        }
    }
}

impl CoordinateSystem {
    /// All systems, in detection order
    pub const ALL: [CoordinateSystem; 3] = [
        CoordinateSystem::Cartesian,
        CoordinateSystem::Cylindrical,
        CoordinateSystem::Spherical,
    ];

    /// The ordered axis names of this system
    pub fn axis_names(self) -> [&'static str; 3] {
        match self {
            CoordinateSystem::Cartesian => ["x", "y", "z"],
            CoordinateSystem::Cylindrical => ["r", "phi", "z"],
            CoordinateSystem::Spherical => ["r", "theta", "phi"],
        }
    }

    /// Name of a single axis
    pub fn axis_name(self, axis: Axis) -> &'static str {
        self.axis_names()[axis.index()]
    }

    /// Find which axis of this system `name` refers to
    pub fn axis_of(self, name: &str) -> Option<Axis> {
        Axis::ALL
            .into_iter()
            .find(|axis| self.axis_name(*axis) == name)
    }

    /// Check whether `name` is one of this system's axes
    pub fn has_axis(self, name: &str) -> bool {
        self.axis_of(name).is_some()
    }

    /// Resolve an axis name to its coordinate value at `point`.
    ///
    /// An empty name means the term has no coordinate factor and resolves
    /// to the neutral `1`.
    pub fn resolve(self, point: &Point, name: &str) -> ExprResult<f64> {
        if name.is_empty() {
            return Ok(1.0);
        }
        match self.axis_of(name) {
            Some(axis) => Ok(point[axis.index()]),
            None => Err(ExprError::AxisNotInSystem {
                axis: name.to_string(),
                system: self,
            }),
        }
    }

    /// Short tag, also accepted by `FromStr`
    pub fn tag(self) -> &'static str {
        match self {
            CoordinateSystem::Cartesian => "car",
            CoordinateSystem::Cylindrical => "cyl",
            CoordinateSystem::Spherical => "sph",
        }
    }

    /// Guess the coordinate system from the axis names an expression uses.
    ///
    /// Returns the one system that defines every referenced axis. Constant
    /// expressions, unparseable text and ambiguous references (`r*phi` is
    /// valid in both cylindrical and spherical) yield `None`.
    pub fn detect(expression: &str) -> Option<CoordinateSystem> {
        let axes = crate::parser::referenced_axes(expression).ok()?;
        Self::detect_from_axes(&axes)
    }

    /// The one system that defines every name in `axes`.
    ///
    /// An empty list, or one that fits several systems, yields `None`.
    pub fn detect_from_axes(axes: &[&str]) -> Option<CoordinateSystem> {
        if axes.is_empty() {
            return None;
        }

        let mut candidates = Self::ALL
            .into_iter()
            .filter(|system| axes.iter().all(|axis| system.has_axis(axis)));
        let first = candidates.next()?;
        match candidates.next() {
            Some(_) => None,
            None => Some(first),
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CoordinateSystem::Cartesian => "cartesian",
            CoordinateSystem::Cylindrical => "cylindrical",
            CoordinateSystem::Spherical => "spherical",
        };
        f.write_str(name)
    }
}

impl FromStr for CoordinateSystem {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" | "cartesian" => Ok(CoordinateSystem::Cartesian),
            "cyl" | "cylinder" | "cylindrical" => Ok(CoordinateSystem::Cylindrical),
            "sph" | "spherical" => Ok(CoordinateSystem::Spherical),
            _ => Err(ExprError::UnknownCoordinateSystem(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case([3.72, -4.0, 0.0], "x", CoordinateSystem::Cartesian, 3.72)]
    #[case([3.72, -4.0, 0.0], "y", CoordinateSystem::Cartesian, -4.0)]
    #[case([3.72, -4.0, 0.0], "z", CoordinateSystem::Cartesian, 0.0)]
    #[case([342.0, -423423.0, 0.4452], "r", CoordinateSystem::Cylindrical, 342.0)]
    #[case([342.0, -423423.0, 0.4452], "phi", CoordinateSystem::Cylindrical, -423423.0)]
    #[case([342.0, -423423.0, 0.4452], "z", CoordinateSystem::Cylindrical, 0.4452)]
    #[case([3.0, -0.4, 74.0], "r", CoordinateSystem::Spherical, 3.0)]
    #[case([3.0, -0.4, 74.0], "theta", CoordinateSystem::Spherical, -0.4)]
    #[case([3.0, -0.4, 74.0], "phi", CoordinateSystem::Spherical, 74.0)]
    fn test_resolve_axis(
        #[case] point: Point,
        #[case] axis: &str,
        #[case] system: CoordinateSystem,
        #[case] expected: f64,
    ) {
        assert_eq!(system.resolve(&point, axis).unwrap(), expected);
    }

    #[test]
    fn test_resolve_empty_axis_is_neutral() {
        for system in CoordinateSystem::ALL {
            assert_eq!(system.resolve(&[5.0, 6.0, 7.0], "").unwrap(), 1.0);
        }
    }

    #[test]
    fn test_resolve_foreign_axis() {
        let err = CoordinateSystem::Spherical
            .resolve(&[1.0, 2.0, 3.0], "x")
            .unwrap_err();
        assert!(matches!(err, ExprError::AxisNotInSystem { ref axis, .. } if axis == "x"));
    }

    #[test]
    fn test_phi_position_differs_between_systems() {
        assert_eq!(CoordinateSystem::Cylindrical.axis_of("phi"), Some(Axis::Second));
        assert_eq!(CoordinateSystem::Spherical.axis_of("phi"), Some(Axis::Third));
        assert_eq!(CoordinateSystem::Cartesian.axis_of("phi"), None);
    }

    #[rstest]
    #[case("car", CoordinateSystem::Cartesian)]
    #[case("Cartesian", CoordinateSystem::Cartesian)]
    #[case("cyl", CoordinateSystem::Cylindrical)]
    #[case("cylinder", CoordinateSystem::Cylindrical)]
    #[case(" sph ", CoordinateSystem::Spherical)]
    fn test_parse_system_tag(#[case] input: &str, #[case] expected: CoordinateSystem) {
        assert_eq!(input.parse::<CoordinateSystem>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_system() {
        assert!(matches!(
            "polar".parse::<CoordinateSystem>(),
            Err(ExprError::UnknownCoordinateSystem(_))
        ));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for system in CoordinateSystem::ALL {
            assert_eq!(system.to_string().parse::<CoordinateSystem>().unwrap(), system);
            assert_eq!(system.tag().parse::<CoordinateSystem>().unwrap(), system);
        }
    }

    #[rstest]
    #[case("72+3x^2+5cos(y^2)-3z", Some(CoordinateSystem::Cartesian))]
    #[case("x", Some(CoordinateSystem::Cartesian))]
    #[case("r^2*z", Some(CoordinateSystem::Cylindrical))]
    #[case("-3sin(2r^3)^5+phi*theta^2", Some(CoordinateSystem::Spherical))]
    #[case("r*phi", None)]
    #[case("z", None)]
    #[case("42", None)]
    #[case("x*theta", None)]
    #[case("x#", None)]
    fn test_detect(#[case] expression: &str, #[case] expected: Option<CoordinateSystem>) {
        assert_eq!(CoordinateSystem::detect(expression), expected);
    }

    #[test]
    fn test_detect_from_axes() {
        assert_eq!(
            CoordinateSystem::detect_from_axes(&["x", "y", "z"]),
            Some(CoordinateSystem::Cartesian)
        );
        assert_eq!(
            CoordinateSystem::detect_from_axes(&["phi", "z"]),
            Some(CoordinateSystem::Cylindrical)
        );
        assert_eq!(CoordinateSystem::detect_from_axes(&["r", "phi"]), None);
        assert_eq!(CoordinateSystem::detect_from_axes(&[]), None);
    }

    #[test]
    fn test_serde_lowercase_names() {
        let json = serde_json::to_string(&CoordinateSystem::Spherical).unwrap();
        assert_eq!(json, "\"spherical\"");
    }
}
