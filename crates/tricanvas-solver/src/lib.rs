//! tricanvas-solver: A reference triangle solver.
//!
//! Implements the solver seams of `tricanvas-core`:
//!
//! - [`TriangleSolver`] from any determining mix of sides `a`, `b`, `c`
//!   and angles `alpha`, `beta`, `gamma` (SSS, SAS, ASA, AAS and the
//!   ambiguous SSA case).
//! - [`PointsSolver`] from three vertex coordinates, including the
//!   centroid, incircle and circumcircle.
//!
//! Unreadable or inconsistent input never errors; it yields an empty
//! solution list, which renders as an empty scene.

pub mod points;
pub mod side_angle;
pub mod triangle;

use tricanvas_core::{
    FieldMap, PointParams, PointsOutput, PointsSolver, SideAngleOutput, TriangleSolver,
};

pub use side_angle::{InputError, Knowns};
pub use triangle::{CONSISTENCY_TOLERANCE, Triangle};

/// The built-in solver for both input styles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceSolver;

impl TriangleSolver for ReferenceSolver {
    fn solve(&self, params: &FieldMap) -> SideAngleOutput {
        side_angle::solve(params)
    }
}

impl PointsSolver for ReferenceSolver {
    fn solve_points(&self, params: &PointParams) -> PointsOutput {
        points::solve_points(params)
    }
}
