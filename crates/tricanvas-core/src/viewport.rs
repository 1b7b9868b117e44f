//! Viewport mapper: fit solution-space geometry into a fixed viewport.
//!
//! The fit is a uniform scale plus translation:
//!
//! ```text
//! zoom = min(width / box_width, height / box_height)
//! xpad = (width  - zoom * box_width)  / 2
//! ypad = (height - zoom * box_height) / 2
//!
//! x' = (x - xmin) * zoom + xpad
//! y' = height - zoom * (y - ymin) - ypad
//! ```
//!
//! The single zoom factor preserves the aspect ratio; the padding centers
//! the fitted box.  The Y-axis is flipped because solution space is +Y up
//! and viewport space is +Y down.
//!
//! An axis with zero extent places no constraint on the zoom.  When both
//! axes collapse (every reference point coincides), the zoom falls back
//! to [`FALLBACK_ZOOM`] and the point lands in the viewport center.

use serde::{Deserialize, Serialize};

use crate::types::{BoundingBox, Point, RenderError};

/// Zoom used when every reference point coincides.
pub const FALLBACK_ZOOM: f64 = 1.0;

/// A solution-space to viewport-space mapping.
///
/// Built once per render pass by [`compute_transform`] and applied to
/// every point of that pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    zoom: f64,
    xmin: f64,
    ymin: f64,
    xpad: f64,
    ypad: f64,
    width: f64,
    height: f64,
}

impl Transform {
    /// Uniform scale from solution units to viewport units.
    #[must_use]
    pub const fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Left edge of the fitted bounding box, in solution space.
    #[must_use]
    pub const fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Bottom edge of the fitted bounding box, in solution space.
    #[must_use]
    pub const fn ymin(&self) -> f64 {
        self.ymin
    }

    /// Horizontal padding on each side of the fitted box.
    #[must_use]
    pub const fn xpad(&self) -> f64 {
        self.xpad
    }

    /// Vertical padding above and below the fitted box.
    #[must_use]
    pub const fn ypad(&self) -> f64 {
        self.ypad
    }

    /// Viewport width.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Viewport height.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Map a solution-space point into viewport space.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.xmin).mul_add(self.zoom, self.xpad),
            self.height - self.zoom * (point.y - self.ymin) - self.ypad,
        )
    }

    /// Map a solution-space length (such as a radius) into viewport units.
    #[must_use]
    pub fn scale_length(&self, length: f64) -> f64 {
        length * self.zoom
    }
}

/// Map a solution-space point into viewport space.
///
/// Free-function form of [`Transform::apply`].
#[must_use]
pub fn apply_transform(point: Point, transform: &Transform) -> Point {
    transform.apply(point)
}

/// Candidate zoom for one axis, or `None` when the axis has no extent.
fn axis_zoom(viewport_extent: f64, box_extent: f64) -> Option<f64> {
    (box_extent > 0.0).then(|| viewport_extent / box_extent)
}

/// Compute the transform that fits `points` into a `width` x `height`
/// viewport.
///
/// Callers choose the reference points; typically only the triangle
/// vertices, so circle geometry does not skew the fit.
///
/// # Errors
///
/// Returns [`RenderError::InvalidViewport`] unless both extents are
/// positive and finite, [`RenderError::NoReferencePoints`] for an empty
/// slice, [`RenderError::NonFiniteCoordinate`] if any point has a NaN
/// or infinite coordinate and [`RenderError::ExtentOutOfRange`] when the
/// box extent overflows or the zoom is not a positive finite number.
///
/// # Examples
///
/// ```
/// use tricanvas_core::{Point, compute_transform};
///
/// let vertices = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0)];
/// let transform = compute_transform(&vertices, 200.0, 100.0).unwrap();
/// assert_eq!(transform.zoom(), 10.0);
/// assert_eq!(transform.xpad(), 50.0);
/// assert_eq!(transform.apply(vertices[1]), Point::new(150.0, 100.0));
/// ```
pub fn compute_transform(
    points: &[Point],
    width: f64,
    height: f64,
) -> Result<Transform, RenderError> {
    let valid_extent = |v: f64| v.is_finite() && v > 0.0;
    if !valid_extent(width) || !valid_extent(height) {
        return Err(RenderError::InvalidViewport { width, height });
    }
    if points.iter().any(|p| !p.is_finite()) {
        return Err(RenderError::NonFiniteCoordinate);
    }
    let bb = BoundingBox::from_points(points).ok_or(RenderError::NoReferencePoints)?;

    let box_width = bb.width();
    let box_height = bb.height();
    if !box_width.is_finite() || !box_height.is_finite() {
        return Err(RenderError::ExtentOutOfRange);
    }
    let zoom = match (axis_zoom(width, box_width), axis_zoom(height, box_height)) {
        (Some(xzoom), Some(yzoom)) => xzoom.min(yzoom),
        (Some(zoom), None) | (None, Some(zoom)) => zoom,
        (None, None) => FALLBACK_ZOOM,
    };
    if !(zoom.is_finite() && zoom > 0.0) {
        return Err(RenderError::ExtentOutOfRange);
    }

    // Clamp away negative rounding noise on the constraining axis.
    let xpad = (zoom.mul_add(-box_width, width) / 2.0).max(0.0);
    let ypad = (zoom.mul_add(-box_height, height) / 2.0).max(0.0);

    log::debug!(
        "fit {} points into {width}x{height}: zoom={zoom} xpad={xpad} ypad={ypad}",
        points.len()
    );

    Ok(Transform {
        zoom,
        xmin: bb.xmin,
        ymin: bb.ymin,
        xpad,
        ypad,
        width,
        height,
    })
}
