//! Solver boundary: solution types and the solver traits.
//!
//! Solving triangles is not this crate's job.  A solver is anything that
//! implements [`TriangleSolver`] (sides and angles) or [`PointsSolver`]
//! (three vertex coordinates).  Solutions are immutable inputs to the
//! rendering pipeline; an empty solution list means "nothing to draw".

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::params::{FieldMap, PointParams};
use crate::types::{Circle, Point};

/// Unit of the angles a solver reads and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    /// Degrees.
    #[default]
    Deg,
    /// Radians.
    Rad,
}

impl AngleMode {
    /// Interpret a raw `mode` field.
    ///
    /// Only `"deg"` selects degrees; any other value means radians.
    #[must_use]
    pub fn from_field(value: &str) -> Self {
        if value == "deg" { Self::Deg } else { Self::Rad }
    }

    /// The raw `mode` field value for this unit.
    #[must_use]
    pub const fn as_field(self) -> &'static str {
        match self {
            Self::Deg => "deg",
            Self::Rad => "rad",
        }
    }

    /// Convert an angle in this unit to radians.
    #[must_use]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Deg => angle * PI / 180.0,
            Self::Rad => angle,
        }
    }

    /// Convert an angle in radians to this unit.
    #[must_use]
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            Self::Deg => radians * 180.0 / PI,
            Self::Rad => radians,
        }
    }
}

/// One solution of the side/angle solver.
///
/// Side `a` is opposite angle `alpha` (at vertex A), and so on.  Angles
/// are in the unit given by the enclosing [`SideAngleOutput::mode`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideAngleSolution {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    /// Incircle radius, when the solver reports it.
    pub inradius: Option<f64>,
    /// Circumcircle radius, when the solver reports it.
    pub circumradius: Option<f64>,
}

impl SideAngleSolution {
    /// Reconstruct absolute vertex coordinates in solution space.
    ///
    /// Places A at the origin and B at `(c, 0)`; C follows from `alpha`
    /// and side `b`: `(cos(alpha) * b, sin(alpha) * b)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tricanvas_core::{AngleMode, SideAngleSolution};
    ///
    /// let solution = SideAngleSolution {
    ///     a: 7.0_f64.sqrt(), b: 2.0, c: 3.0,
    ///     alpha: 60.0, beta: 40.9, gamma: 79.1,
    ///     inradius: None, circumradius: None,
    /// };
    /// let [a, b, c] = solution.vertices(AngleMode::Deg);
    /// assert_eq!((a.x, a.y), (0.0, 0.0));
    /// assert_eq!((b.x, b.y), (3.0, 0.0));
    /// assert!((c.x - 1.0).abs() < 1e-12);
    /// assert!((c.y - 3.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn vertices(&self, mode: AngleMode) -> [Point; 3] {
        let alpha = mode.to_radians(self.alpha);
        [
            Point::new(0.0, 0.0),
            Point::new(self.c, 0.0),
            Point::new(alpha.cos() * self.b, alpha.sin() * self.b),
        ]
    }
}

/// Output of a [`TriangleSolver`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideAngleOutput {
    /// Zero, one or two solutions.
    pub solutions: Vec<SideAngleSolution>,
    /// Unit of every angle in `solutions`, when the solver reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<AngleMode>,
}

impl SideAngleOutput {
    /// Unit of the angles in `solutions`.
    ///
    /// A solver that reports no unit is read as radians.
    #[must_use]
    pub fn angle_mode(&self) -> AngleMode {
        self.mode.unwrap_or(AngleMode::Rad)
    }
}

/// One solution of the three-point solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointsSolution {
    /// Side lengths and angles of the triangle.
    pub measures: SideAngleSolution,
    /// Intersection of the medians.
    pub centroid: Point,
    /// Inscribed circle.
    pub incircle: Circle,
    /// Circumscribed circle.
    pub circumcircle: Circle,
}

/// Output of a [`PointsSolver`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsOutput {
    /// Vertices A, B and C as parsed by the solver, when all six
    /// coordinates were readable.
    pub vertices: Option<[Point; 3]>,
    /// Zero or one solution.
    pub solutions: Vec<PointsSolution>,
    /// Unit of the angles in `solutions`.
    pub mode: AngleMode,
}

/// Solves a triangle from a mix of sides and angles.
pub trait TriangleSolver {
    /// Solve from raw, non-empty form fields.
    ///
    /// Malformed or insufficient input yields an empty solution list.
    fn solve(&self, params: &FieldMap) -> SideAngleOutput;
}

/// Solves a triangle from its three vertex coordinates.
pub trait PointsSolver {
    /// Solve from per-vertex raw fields.
    ///
    /// Malformed input or degenerate vertices yield an empty solution
    /// list.
    fn solve_points(&self, params: &PointParams) -> PointsOutput;
}
