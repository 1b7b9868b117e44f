//! Solution-to-scene construction for both solver entry points.
//!
//! Only the triangle vertices are used to fit the viewport; circle
//! centers and the centroid are mapped with the resulting transform but
//! never influence it.

use crate::params::PointParams;
use crate::primitive::{Primitive, vertex_labels};
use crate::scene::{Category, SceneElement, SceneRenderer, Surface};
use crate::solution::{PointsOutput, PointsSolution, PointsSolver, SideAngleOutput};
use crate::types::{Circle, CircleSource, Point, RenderConfig, RenderError};
use crate::viewport::{Transform, compute_transform};

/// Relative radius difference above which the two circle sources are
/// reported as diverging.
pub const RADIUS_DIVERGENCE_TOLERANCE: f64 = 1e-9;

/// Solution-space geometry ready to be mapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleGeometry {
    pub vertices: [Point; 3],
    pub centroid: Option<Point>,
    pub incircle: Option<Circle>,
    pub circumcircle: Option<Circle>,
}

impl TriangleGeometry {
    /// Geometry of a three-point solution.
    #[must_use]
    pub const fn from_points_solution(vertices: [Point; 3], solution: &PointsSolution) -> Self {
        Self {
            vertices,
            centroid: Some(solution.centroid),
            incircle: Some(solution.incircle),
            circumcircle: Some(solution.circumcircle),
        }
    }

    /// Fit the vertices into the viewport and build the scene elements.
    ///
    /// # Errors
    ///
    /// Propagates [`compute_transform`] errors.
    pub fn build(
        &self,
        width: f64,
        height: f64,
        config: &RenderConfig,
    ) -> Result<Vec<SceneElement>, RenderError> {
        let transform = compute_transform(&self.vertices, width, height)?;
        Ok(self.build_with(&transform, config))
    }

    /// Build the scene elements with an already computed transform.
    #[must_use]
    pub fn build_with(&self, transform: &Transform, config: &RenderConfig) -> Vec<SceneElement> {
        let vertices = self.vertices.map(|p| transform.apply(p));
        let h = config.cross_half_length;
        let mut elements = vec![SceneElement::new(Primitive::triangle(vertices))];

        if let Some(centroid) = self.centroid {
            elements.push(SceneElement::tagged(
                Primitive::cross(transform.apply(centroid), h),
                Category::Centroid,
            ));
        }
        for (circle, category) in [
            (self.incircle, Category::Incircle),
            (self.circumcircle, Category::Circumcircle),
        ] {
            if let Some(circle) = circle {
                elements.push(SceneElement::tagged(
                    Primitive::cross(transform.apply(circle.center), h),
                    category,
                ));
                elements.push(SceneElement::tagged(
                    Primitive::mapped_circle(circle, transform),
                    category,
                ));
            }
        }

        elements.extend(vertex_labels(vertices, &config.label_texts).map(SceneElement::new));
        elements
    }
}

/// Scene elements for a three-point solver result.
///
/// Returns an empty list when the solver found no solution.
///
/// # Errors
///
/// Propagates [`compute_transform`] errors.
pub fn points_scene(
    output: &PointsOutput,
    width: f64,
    height: f64,
    config: &RenderConfig,
) -> Result<Vec<SceneElement>, RenderError> {
    let (Some(vertices), Some(solution)) = (output.vertices, output.solutions.first()) else {
        log::info!("three-point solve produced no solution; nothing to draw");
        return Ok(Vec::new());
    };
    TriangleGeometry::from_points_solution(vertices, solution).build(width, height, config)
}

/// Relative difference between two radii.
#[must_use]
pub fn radius_divergence(reported: f64, recomputed: f64) -> f64 {
    (reported - recomputed).abs() / recomputed.abs().max(1.0)
}

/// Geometry for a side/angle solver result.
///
/// The first solution's vertices are reconstructed (A at the origin, B
/// on the positive x axis) and handed to `points_solver` for the
/// centroid and circle centers.  Radii come from `circle_source`.
/// Returns `None` when the side/angle solver found no solution.
pub fn side_angle_geometry(
    output: &SideAngleOutput,
    points_solver: &dyn PointsSolver,
    circle_source: CircleSource,
) -> Option<TriangleGeometry> {
    let Some(solution) = output.solutions.first() else {
        log::info!("side/angle solve produced no solution; nothing to draw");
        return None;
    };
    let mode = output.angle_mode();
    let vertices = solution.vertices(mode);
    let params = PointParams::from_vertices(vertices, mode);
    let recomputed = points_solver.solve_points(&params);

    let Some(point_solution) = recomputed.solutions.first() else {
        log::warn!("reconstructed vertices {vertices:?} have no three-point solution");
        return Some(TriangleGeometry {
            vertices,
            centroid: None,
            incircle: None,
            circumcircle: None,
        });
    };

    let mut incircle = point_solution.incircle;
    let mut circumcircle = point_solution.circumcircle;
    apply_reported_radius("incircle", solution.inradius, &mut incircle, circle_source);
    apply_reported_radius(
        "circumcircle",
        solution.circumradius,
        &mut circumcircle,
        circle_source,
    );

    Some(TriangleGeometry {
        vertices,
        centroid: Some(point_solution.centroid),
        incircle: Some(incircle),
        circumcircle: Some(circumcircle),
    })
}

fn apply_reported_radius(
    name: &str,
    reported: Option<f64>,
    circle: &mut Circle,
    circle_source: CircleSource,
) {
    let Some(reported) = reported else {
        return;
    };
    let divergence = radius_divergence(reported, circle.radius);
    if divergence > RADIUS_DIVERGENCE_TOLERANCE {
        log::warn!(
            "{name} radius diverges between solvers: reported {reported}, recomputed {} (relative {divergence:e})",
            circle.radius
        );
    }
    if circle_source == CircleSource::SideAngle {
        circle.radius = reported;
    }
}

/// Scene elements for a side/angle solver result; see
/// [`side_angle_geometry`].
///
/// # Errors
///
/// Propagates [`compute_transform`] errors.
pub fn side_angle_scene(
    output: &SideAngleOutput,
    points_solver: &dyn PointsSolver,
    width: f64,
    height: f64,
    config: &RenderConfig,
) -> Result<Vec<SceneElement>, RenderError> {
    side_angle_geometry(output, points_solver, config.circle_source)
        .map_or_else(|| Ok(Vec::new()), |geometry| geometry.build(width, height, config))
}

impl<S: Surface> SceneRenderer<S> {
    /// Draw a three-point solver result onto the surface.
    ///
    /// The surface is always cleared first, so a result without
    /// solutions or one that fails to map leaves it empty.
    ///
    /// # Errors
    ///
    /// Propagates [`compute_transform`] errors.
    pub fn draw_points(
        &mut self,
        output: &PointsOutput,
        config: &RenderConfig,
    ) -> Result<(), RenderError> {
        let surface = self.surface();
        let elements = points_scene(output, surface.width(), surface.height(), config)
            .inspect_err(|_| self.clear())?;
        self.render(elements);
        Ok(())
    }

    /// Draw a side/angle solver result onto the surface.
    ///
    /// The surface is always cleared first, so a result without
    /// solutions or one that fails to map leaves it empty.
    ///
    /// # Errors
    ///
    /// Propagates [`compute_transform`] errors.
    pub fn draw_side_angle(
        &mut self,
        output: &SideAngleOutput,
        points_solver: &dyn PointsSolver,
        config: &RenderConfig,
    ) -> Result<(), RenderError> {
        let surface = self.surface();
        let elements = side_angle_scene(
            output,
            points_solver,
            surface.width(),
            surface.height(),
            config,
        )
        .inspect_err(|_| self.clear())?;
        self.render(elements);
        Ok(())
    }
}
