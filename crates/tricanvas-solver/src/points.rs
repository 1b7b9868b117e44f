//! Three-point solving: measures, centroid, incircle and circumcircle
//! of the triangle through three vertex coordinates.

use tricanvas_core::{
    AngleMode, Circle, FieldMap, Point, PointParams, PointsOutput, PointsSolution, Vertex,
};

use crate::triangle::{Triangle, angle_opposite};

/// Twice the signed area below this fraction of the squared longest
/// side counts as collinear.
const COLLINEAR_TOLERANCE: f64 = 1e-12;

fn parse_coordinate(fields: &FieldMap, id: &str) -> Option<f64> {
    fields
        .get(id)?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

fn parse_vertex(fields: &FieldMap) -> Option<Point> {
    Some(Point::new(
        parse_coordinate(fields, "x")?,
        parse_coordinate(fields, "y")?,
    ))
}

/// Twice the signed area of triangle `abc`.
fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x).mul_add(c.y - a.y, -(b.y - a.y) * (c.x - a.x))
}

/// Circumcenter of a non-degenerate triangle.
fn circumcenter(a: Point, b: Point, c: Point) -> Point {
    let d = 2.0 * cross(a, b, c);
    // Translate to `a` for precision.
    let (bx, by) = (b.x - a.x, b.y - a.y);
    let (cx, cy) = (c.x - a.x, c.y - a.y);
    let b_sq = bx.mul_add(bx, by * by);
    let c_sq = cx.mul_add(cx, cy * cy);
    Point::new(
        a.x + cy.mul_add(b_sq, -by * c_sq) / d,
        a.y + bx.mul_add(c_sq, -cx * b_sq) / d,
    )
}

/// Solve the triangle through `vertices`.
///
/// Returns `None` for collinear or coincident vertices.
#[must_use]
pub fn solve_vertices(vertices: [Point; 3], mode: AngleMode) -> Option<PointsSolution> {
    let [a, b, c] = vertices;
    let sides = [b.distance(c), c.distance(a), a.distance(b)];
    let longest = sides.iter().copied().fold(0.0, f64::max);
    if longest == 0.0 || cross(a, b, c).abs() <= COLLINEAR_TOLERANCE * longest * longest {
        return None;
    }

    let [sa, sb, sc] = sides;
    let triangle = Triangle {
        sides,
        angles: [
            angle_opposite(sa, sb, sc),
            angle_opposite(sb, sa, sc),
            angle_opposite(sc, sa, sb),
        ],
    };
    let perimeter = sa + sb + sc;
    let incenter = Point::new(
        sc.mul_add(c.x, sa.mul_add(a.x, sb * b.x)) / perimeter,
        sc.mul_add(c.y, sa.mul_add(a.y, sb * b.y)) / perimeter,
    );
    let circumcenter = circumcenter(a, b, c);

    Some(PointsSolution {
        measures: triangle.to_solution(mode),
        centroid: Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0),
        incircle: Circle::new(incenter, cross(a, b, c).abs() / perimeter),
        circumcircle: Circle::new(circumcenter, circumcenter.distance(a)),
    })
}

/// Solve from per-vertex raw fields.
///
/// Each vertex needs both `x` and `y`.  Missing or unreadable
/// coordinates leave `vertices` empty; degenerate vertices keep them
/// but produce no solution.
#[must_use]
pub fn solve_points(params: &PointParams) -> PointsOutput {
    let mode = params
        .mode
        .as_deref()
        .map_or(AngleMode::Deg, AngleMode::from_field);
    let [a, b, c] = Vertex::ALL.map(|v| parse_vertex(params.vertex(v)));
    let vertices = a.zip(b).zip(c).map(|((a, b), c)| [a, b, c]);

    let solutions: Vec<PointsSolution> = match vertices {
        Some(vertices) => solve_vertices(vertices, mode).into_iter().collect(),
        None => {
            log::info!("three-point input is missing a readable coordinate");
            Vec::new()
        }
    };
    if vertices.is_some() && solutions.is_empty() {
        log::info!("three-point input is degenerate: {vertices:?}");
    }

    PointsOutput {
        vertices,
        solutions,
        mode,
    }
}
