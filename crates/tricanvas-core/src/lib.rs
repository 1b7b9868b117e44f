//! tricanvas-core: Viewport mapping and scene construction for solved
//! triangles (sans-IO).
//!
//! Turns solver output into drawable primitives through:
//! form fields -> solver parameters -> (external solver) ->
//! viewport transform -> primitives -> scene.
//!
//! This crate has **no I/O dependencies** and does not solve triangles
//! itself.  Solvers plug in through [`TriangleSolver`] and
//! [`PointsSolver`]; render targets through [`Surface`].

pub mod draw;
pub mod params;
pub mod primitive;
pub mod scene;
pub mod solution;
pub mod types;
pub mod viewport;

pub use draw::{TriangleGeometry, points_scene, side_angle_geometry, side_angle_scene};
pub use params::{FieldMap, ParamError, PointParams, Vertex, read_parameters, read_point_parameters};
pub use primitive::{Primitive, Segment, cross_segments};
pub use scene::{
    Category, DrawLayer, Scene, SceneElement, SceneRenderer, SceneState, Surface, Visibility,
    apply_visibility, render,
};
pub use solution::{
    AngleMode, PointsOutput, PointsSolution, PointsSolver, SideAngleOutput, SideAngleSolution,
    TriangleSolver,
};
pub use types::{BoundingBox, Circle, CircleSource, Point, RenderConfig, RenderError};
pub use viewport::{Transform, apply_transform, compute_transform};
