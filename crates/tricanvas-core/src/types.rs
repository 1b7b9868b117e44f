//! Shared types for the tricanvas rendering pipeline.

use serde::{Deserialize, Serialize};

use crate::scene::Visibility;

/// A 2D point.
///
/// The same type is used in both coordinate spaces: solution space
/// (solver units, +Y up) and viewport space (pixels, +Y down).  Values
/// only move between the two through [`Transform::apply`](crate::Transform::apply),
/// which always returns a new point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Returns `true` if both coordinates are finite.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A circle given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius in the same units as `center`.
    pub radius: f64,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Axis-aligned bounding box of a non-empty point set.
///
/// `xmax >= xmin` and `ymax >= ymin` always hold.  A zero width or
/// height is legal and marks a degenerate axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl BoundingBox {
    /// Compute the bounding box of `points`.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let init = Self {
            xmin: first.x,
            xmax: first.x,
            ymin: first.y,
            ymax: first.y,
        };
        Some(rest.iter().fold(init, |bb, p| Self {
            xmin: bb.xmin.min(p.x),
            xmax: bb.xmax.max(p.x),
            ymin: bb.ymin.min(p.y),
            ymax: bb.ymax.max(p.y),
        }))
    }

    /// Horizontal extent (`xmax - xmin`).
    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Vertical extent (`ymax - ymin`).
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }
}

/// Where the incircle and circumcircle radii come from when drawing a
/// side/angle solution.
///
/// Circle centers always come from the three-point solver run on the
/// reconstructed vertices, since a side/angle solution carries no
/// coordinates.  Only the radii are selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CircleSource {
    /// Use the radii reported by the side/angle solution, falling back to
    /// the three-point solver when the solution omits them.
    #[default]
    SideAngle,
    /// Use the radii computed by the three-point solver.
    PointSolver,
}

/// Configuration for turning a solution into a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Viewport width in viewport units.
    pub width: f64,
    /// Viewport height in viewport units.
    pub height: f64,
    /// Half-length of the diagonal cross markers, in viewport units.
    pub cross_half_length: f64,
    /// Label texts for the three vertices, in solver vertex order.
    pub label_texts: [String; 3],
    /// Radius source for the side/angle drawing path.
    pub circle_source: CircleSource,
    /// Initial visibility of the togglable categories.
    pub visibility: Visibility,
}

impl RenderConfig {
    /// Default viewport width.
    pub const DEFAULT_WIDTH: f64 = 400.0;

    /// Default viewport height.
    pub const DEFAULT_HEIGHT: f64 = 300.0;

    /// Default cross marker half-length.
    pub const DEFAULT_CROSS_HALF_LENGTH: f64 = 5.0;

    /// Default vertex labels.
    pub const DEFAULT_LABEL_TEXTS: [&'static str; 3] = ["A", "B", "C"];

    /// Check the viewport size up front, independently of whether any
    /// geometry will be mapped into it.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidViewport`] unless `width` and
    /// `height` are both positive and finite.
    pub fn validate(&self) -> Result<(), RenderError> {
        let valid_extent = |v: f64| v.is_finite() && v > 0.0;
        if valid_extent(self.width) && valid_extent(self.height) {
            Ok(())
        } else {
            Err(RenderError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            cross_half_length: Self::DEFAULT_CROSS_HALF_LENGTH,
            label_texts: Self::DEFAULT_LABEL_TEXTS.map(String::from),
            circle_source: CircleSource::default(),
            visibility: Visibility::default(),
        }
    }
}

/// Errors that can occur while mapping geometry into a viewport.
///
/// A solver producing no solution is *not* an error; it yields an empty
/// scene instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
pub enum RenderError {
    /// The viewport extents are not positive finite numbers.
    #[error("invalid viewport size {width}x{height}")]
    InvalidViewport {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },

    /// No reference points were supplied to fit the viewport to.
    #[error("no reference points to fit into the viewport")]
    NoReferencePoints,

    /// A reference point has a NaN or infinite coordinate.
    #[error("reference point has a non-finite coordinate")]
    NonFiniteCoordinate,

    /// The reference points span a range whose extent or zoom does not
    /// fit in an `f64`.
    #[error("reference points span an unrepresentable extent")]
    ExtentOutOfRange,
}
