//! Drawable primitives in viewport space.

use serde::{Deserialize, Serialize};

use crate::types::{Circle, Point};
use crate::viewport::Transform;

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// One drawable shape.  All coordinates are in viewport space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Closed polygon through the points in order.
    Polygon(Vec<Point>),
    /// Circle outline.
    Circle { center: Point, radius: f64 },
    /// Two crossing diagonal strokes centered on a point.
    Cross { center: Point, half_length: f64 },
    /// Text anchored at a point.
    Label { anchor: Point, text: String },
}

impl Primitive {
    /// Closed triangle outline A → B → C → A.
    #[must_use]
    pub fn triangle(vertices: [Point; 3]) -> Self {
        Self::Polygon(vertices.to_vec())
    }

    /// Cross marker centered on `center`.
    #[must_use]
    pub const fn cross(center: Point, half_length: f64) -> Self {
        Self::Cross {
            center,
            half_length,
        }
    }

    /// Circle from a solution-space circle.
    ///
    /// The center goes through `transform`; the radius is multiplied by
    /// the same uniform zoom, so the circle stays round.
    #[must_use]
    pub fn mapped_circle(circle: Circle, transform: &Transform) -> Self {
        Self::Circle {
            center: transform.apply(circle.center),
            radius: transform.scale_length(circle.radius),
        }
    }

    /// Text label anchored at `anchor`.
    #[must_use]
    pub fn label(anchor: Point, text: impl Into<String>) -> Self {
        Self::Label {
            anchor,
            text: text.into(),
        }
    }
}

/// The two strokes of a cross marker.
///
/// The first runs from `(x-h, y-h)` to `(x+h, y+h)`, the second from
/// `(x-h, y+h)` to `(x+h, y-h)`.
#[must_use]
pub fn cross_segments(center: Point, half_length: f64) -> [Segment; 2] {
    let h = half_length;
    [
        Segment {
            from: Point::new(center.x - h, center.y - h),
            to: Point::new(center.x + h, center.y + h),
        },
        Segment {
            from: Point::new(center.x - h, center.y + h),
            to: Point::new(center.x + h, center.y - h),
        },
    ]
}

/// Labels for viewport-space vertices, matched by position.
#[must_use]
pub fn vertex_labels(vertices: [Point; 3], texts: &[String; 3]) -> [Primitive; 3] {
    let [a, b, c] = vertices;
    [
        Primitive::label(a, texts[0].as_str()),
        Primitive::label(b, texts[1].as_str()),
        Primitive::label(c, texts[2].as_str()),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::viewport::compute_transform;

    #[test]
    fn triangle_keeps_vertex_order() {
        let vertices = [
            Point::new(50.0, 100.0),
            Point::new(150.0, 100.0),
            Point::new(50.0, 0.0),
        ];
        let Primitive::Polygon(points) = Primitive::triangle(vertices) else {
            unreachable!("triangle builds a polygon");
        };
        assert_eq!(points, vertices);
    }

    #[test]
    fn cross_segments_are_diagonals() {
        let [first, second] = cross_segments(Point::new(10.0, 20.0), 5.0);
        assert_eq!(first.from, Point::new(5.0, 15.0));
        assert_eq!(first.to, Point::new(15.0, 25.0));
        assert_eq!(second.from, Point::new(5.0, 25.0));
        assert_eq!(second.to, Point::new(15.0, 15.0));
    }

    #[test]
    fn mapped_circle_scales_radius_by_zoom() {
        let vertices = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ];
        let t = compute_transform(&vertices, 200.0, 100.0).unwrap();
        let circle = Circle::new(Point::new(5.0, 5.0), 2.0);
        assert_eq!(
            Primitive::mapped_circle(circle, &t),
            Primitive::Circle {
                center: Point::new(100.0, 50.0),
                radius: 20.0,
            }
        );
        // The solution-space circle is left as it was.
        assert_eq!(circle, Circle::new(Point::new(5.0, 5.0), 2.0));
    }

    #[test]
    fn labels_follow_vertex_order() {
        let texts = ["A", "B", "C"].map(String::from);
        let vertices = [
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(3.0, 3.0),
        ];
        let labels = vertex_labels(vertices, &texts);
        assert_eq!(labels[0], Primitive::label(Point::new(1.0, 1.0), "A"));
        assert_eq!(labels[2], Primitive::label(Point::new(3.0, 3.0), "C"));
    }
}
