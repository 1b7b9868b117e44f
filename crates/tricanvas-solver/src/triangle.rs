//! Fully determined triangles and the measures derived from them.

use std::f64::consts::PI;

use tricanvas_core::{AngleMode, SideAngleSolution};

/// Relative tolerance when checking redundant inputs against a solution.
pub const CONSISTENCY_TOLERANCE: f64 = 1e-6;

/// Returns `true` if `a` and `b` agree within [`CONSISTENCY_TOLERANCE`],
/// relative to the larger magnitude (and absolute below 1.0).
pub(crate) fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= CONSISTENCY_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Law of cosines: the angle opposite `opposite`, between `s1` and `s2`.
pub(crate) fn angle_opposite(opposite: f64, s1: f64, s2: f64) -> f64 {
    let cos = s1.mul_add(s1, s2.mul_add(s2, -opposite * opposite)) / (2.0 * s1 * s2);
    cos.clamp(-1.0, 1.0).acos()
}

/// A triangle with all sides and angles known.
///
/// Index `i` of `angles` is the angle opposite side `i` (alpha opposite
/// a, and so on).  Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub sides: [f64; 3],
    pub angles: [f64; 3],
}

impl Triangle {
    /// Solve from three sides.
    ///
    /// Returns `None` unless every side is positive and each side is
    /// strictly shorter than the sum of the other two.
    #[must_use]
    pub fn from_sides(sides: [f64; 3]) -> Option<Self> {
        let [a, b, c] = sides;
        if sides.iter().any(|&s| s <= 0.0) || a >= b + c || b >= a + c || c >= a + b {
            return None;
        }
        let alpha = angle_opposite(a, b, c);
        let beta = angle_opposite(b, a, c);
        let gamma = PI - alpha - beta;
        (gamma > 0.0).then_some(Self {
            sides,
            angles: [alpha, beta, gamma],
        })
    }

    /// Area from two sides and the included angle.
    #[must_use]
    pub fn area(&self) -> f64 {
        0.5 * self.sides[1] * self.sides[2] * self.angles[0].sin()
    }

    /// Half the perimeter.
    #[must_use]
    pub fn semiperimeter(&self) -> f64 {
        self.sides.iter().sum::<f64>() / 2.0
    }

    /// Incircle radius (`area / s`).
    #[must_use]
    pub fn inradius(&self) -> f64 {
        self.area() / self.semiperimeter()
    }

    /// Circumcircle radius (`a / (2 sin alpha)`).
    #[must_use]
    pub fn circumradius(&self) -> f64 {
        self.sides[0] / (2.0 * self.angles[0].sin())
    }

    /// Report this triangle with angles in `mode`.
    #[must_use]
    pub fn to_solution(&self, mode: AngleMode) -> SideAngleSolution {
        let [a, b, c] = self.sides;
        let [alpha, beta, gamma] = self.angles.map(|angle| mode.from_radians(angle));
        SideAngleSolution {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
            inradius: Some(self.inradius()),
            circumradius: Some(self.circumradius()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn three_four_five() {
        let t = Triangle::from_sides([5.0, 4.0, 3.0]).unwrap();
        assert!((t.angles[0] - PI / 2.0).abs() < 1e-12);
        assert!((t.area() - 6.0).abs() < 1e-12);
        assert!((t.inradius() - 1.0).abs() < 1e-12);
        assert!((t.circumradius() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn triangle_inequality_violation() {
        assert!(Triangle::from_sides([1.0, 2.0, 3.0]).is_none());
        assert!(Triangle::from_sides([10.0, 2.0, 3.0]).is_none());
        assert!(Triangle::from_sides([0.0, 2.0, 2.0]).is_none());
    }

    #[test]
    fn equilateral_angles_in_degrees() {
        let solution = Triangle::from_sides([2.0, 2.0, 2.0])
            .unwrap()
            .to_solution(AngleMode::Deg);
        for angle in [solution.alpha, solution.beta, solution.gamma] {
            assert!((angle - 60.0).abs() < 1e-9, "{angle}");
        }
        assert!((solution.circumradius.unwrap() - 2.0 / 3.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn close_is_relative_for_large_values() {
        assert!(close(1.0e6, 1.0e6 + 0.5));
        assert!(!close(1.0, 1.001));
        assert!(close(0.0, 1e-7));
    }
}
