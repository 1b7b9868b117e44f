//! Side/angle solving: any three independent measures, at least one of
//! them a side.
//!
//! Supported combinations:
//!
//! - two angles and any side (ASA, AAS)
//! - three sides (SSS)
//! - two sides and the included angle (SAS)
//! - two sides and a non-included angle (SSA), which has zero, one or
//!   two solutions
//!
//! Redundant inputs (for example four measures) are accepted when they
//! agree with the solution within [`CONSISTENCY_TOLERANCE`].

use std::f64::consts::PI;

use tricanvas_core::params::MODE_FIELD;
use tricanvas_core::{AngleMode, FieldMap, SideAngleOutput};

use crate::triangle::{CONSISTENCY_TOLERANCE, Triangle, close};

/// Field ids of sides a, b and c.
pub const SIDE_FIELDS: [&str; 3] = ["a", "b", "c"];

/// Field ids of the angles opposite a, b and c.
pub const ANGLE_FIELDS: [&str; 3] = ["alpha", "beta", "gamma"];

/// Why a set of fields could not be read.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    /// The value is not a finite number.
    #[error("field `{field}` is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    /// A side is zero or negative.
    #[error("side `{0}` must be positive")]
    NonPositiveSide(&'static str),

    /// An angle is not strictly between 0 and a half turn.
    #[error("angle `{0}` is out of range")]
    AngleOutOfRange(&'static str),
}

/// Known measures; angles in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Knowns {
    pub sides: [Option<f64>; 3],
    pub angles: [Option<f64>; 3],
}

fn parse_field(params: &FieldMap, field: &'static str) -> Result<Option<f64>, InputError> {
    params
        .get(field)
        .map(|raw| {
            raw.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| InputError::NotANumber {
                    field,
                    value: raw.to_owned(),
                })
        })
        .transpose()
}

impl Knowns {
    /// Read sides and angles from raw fields.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] for unparsable numbers, non-positive
    /// sides and angles outside `(0, π)`.
    pub fn parse(params: &FieldMap, mode: AngleMode) -> Result<Self, InputError> {
        let mut knowns = Self::default();
        for (i, field) in SIDE_FIELDS.into_iter().enumerate() {
            if let Some(side) = parse_field(params, field)? {
                if side <= 0.0 {
                    return Err(InputError::NonPositiveSide(field));
                }
                knowns.sides[i] = Some(side);
            }
        }
        for (i, field) in ANGLE_FIELDS.into_iter().enumerate() {
            if let Some(angle) = parse_field(params, field)? {
                let angle = mode.to_radians(angle);
                if angle <= 0.0 || angle >= PI {
                    return Err(InputError::AngleOutOfRange(field));
                }
                knowns.angles[i] = Some(angle);
            }
        }
        Ok(knowns)
    }

    fn side_count(&self) -> usize {
        self.sides.iter().flatten().count()
    }

    fn angle_count(&self) -> usize {
        self.angles.iter().flatten().count()
    }

    /// Whether `triangle` matches every known measure.
    fn agrees_with(&self, triangle: &Triangle) -> bool {
        let sides = self
            .sides
            .iter()
            .zip(triangle.sides)
            .all(|(known, actual)| known.is_none_or(|k| close(k, actual)));
        let angles = self
            .angles
            .iter()
            .zip(triangle.angles)
            .all(|(known, actual)| known.is_none_or(|k| close(k, actual)));
        sides && angles
    }
}

/// Two or three angles plus at least one side.
fn from_angles(knowns: &Knowns) -> Option<Triangle> {
    let known_sum: f64 = knowns.angles.iter().flatten().sum();
    let angles = match knowns.angles {
        [Some(a), Some(b), Some(c)] if close(known_sum, PI) => [a, b, c],
        [None, Some(b), Some(c)] => [PI - known_sum, b, c],
        [Some(a), None, Some(c)] => [a, PI - known_sum, c],
        [Some(a), Some(b), None] => [a, b, PI - known_sum],
        _ => return None,
    };
    if angles.iter().any(|&angle| angle <= 0.0) {
        return None;
    }
    let (i, side) = knowns
        .sides
        .iter()
        .enumerate()
        .find_map(|(i, s)| s.map(|s| (i, s)))?;
    let ratio = side / angles[i].sin();
    Some(Triangle {
        sides: angles.map(|angle| ratio * angle.sin()),
        angles,
    })
}

/// Two sides and one angle (SAS or SSA).
fn from_two_sides(knowns: &Knowns) -> Vec<Triangle> {
    let Some(missing) = knowns.sides.iter().position(Option::is_none) else {
        return Vec::new();
    };
    let Some((angle_index, angle)) = knowns
        .angles
        .iter()
        .enumerate()
        .find_map(|(i, a)| a.map(|a| (i, a)))
    else {
        return Vec::new();
    };
    let mut sides = knowns.sides.map(|s| s.unwrap_or(0.0));

    if angle_index == missing {
        // SAS: the known angle sits between the two known sides.
        let [s1, s2] = match missing {
            0 => [sides[1], sides[2]],
            1 => [sides[0], sides[2]],
            _ => [sides[0], sides[1]],
        };
        let squared = (s1 * s2 * angle.cos()).mul_add(-2.0, s1.mul_add(s1, s2 * s2));
        sides[missing] = squared.max(0.0).sqrt();
        return Triangle::from_sides(sides).into_iter().collect();
    }

    // SSA: side `angle_index` is opposite the known angle; the third
    // index is the other known side.
    let other = 3 - missing - angle_index;
    let sine = sides[other] * angle.sin() / sides[angle_index];
    if sine > 1.0 + CONSISTENCY_TOLERANCE {
        return Vec::new();
    }
    let acute = sine.min(1.0).asin();
    let mut candidates = vec![acute];
    if !close(acute, PI - acute) {
        candidates.push(PI - acute);
    }

    candidates
        .into_iter()
        .filter_map(|other_angle| {
            let third = PI - angle - other_angle;
            if third <= CONSISTENCY_TOLERANCE {
                return None;
            }
            let mut angles = [0.0; 3];
            angles[angle_index] = angle;
            angles[other] = other_angle;
            angles[missing] = third;
            let mut solved = sides;
            solved[missing] = sides[angle_index] * third.sin() / angle.sin();
            Some(Triangle {
                sides: solved,
                angles,
            })
        })
        .collect()
}

/// Every triangle consistent with `knowns`, in a stable order (acute
/// SSA candidate first).
#[must_use]
pub fn solve_knowns(knowns: &Knowns) -> Vec<Triangle> {
    let sides = knowns.side_count();
    let angles = knowns.angle_count();
    let candidates = if angles >= 2 && sides >= 1 {
        from_angles(knowns).into_iter().collect()
    } else if sides == 3 {
        knowns
            .sides
            .iter()
            .copied()
            .collect::<Option<Vec<f64>>>()
            .and_then(|v| Triangle::from_sides([v[0], v[1], v[2]]))
            .into_iter()
            .collect()
    } else if sides == 2 && angles == 1 {
        from_two_sides(knowns)
    } else {
        Vec::new()
    };
    candidates
        .into_iter()
        .filter(|t| knowns.agrees_with(t))
        .collect()
}

/// Solve from raw fields.
///
/// The `mode` field selects the angle unit: `"deg"` for degrees, any
/// other value for radians; it defaults to degrees when absent.
#[must_use]
pub fn solve(params: &FieldMap) -> SideAngleOutput {
    let mode = params
        .get(MODE_FIELD)
        .map_or(AngleMode::Deg, AngleMode::from_field);
    let solutions = match Knowns::parse(params, mode) {
        Ok(knowns) => solve_knowns(&knowns)
            .iter()
            .map(|t| t.to_solution(mode))
            .collect(),
        Err(err) => {
            log::info!("rejecting side/angle input: {err}");
            Vec::new()
        }
    };
    log::debug!("side/angle solve found {} solution(s)", solutions.len());
    SideAngleOutput {
        solutions,
        mode: Some(mode),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tricanvas_core::read_parameters;

    use super::*;

    fn solve_fields(fields: &[(&str, &str)]) -> SideAngleOutput {
        solve(&read_parameters(fields.iter().copied()))
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn sss() {
        let out = solve_fields(&[("a", "5"), ("b", "4"), ("c", "3")]);
        assert_eq!(out.mode, Some(AngleMode::Deg));
        assert_eq!(out.solutions.len(), 1);
        let s = out.solutions[0];
        assert_close(s.alpha, 90.0);
        assert_close(s.beta + s.gamma, 90.0);
        assert_close(s.inradius.unwrap(), 1.0);
        assert_close(s.circumradius.unwrap(), 2.5);
    }

    #[test]
    fn sas() {
        let out = solve_fields(&[("b", "2"), ("c", "3"), ("alpha", "60")]);
        assert_eq!(out.solutions.len(), 1);
        let s = out.solutions[0];
        assert_close(s.a, 7.0_f64.sqrt());
        assert_close(s.alpha, 60.0);
        assert_close(s.alpha + s.beta + s.gamma, 180.0);
    }

    #[test]
    fn asa() {
        let out = solve_fields(&[("alpha", "60"), ("beta", "60"), ("c", "2")]);
        let s = out.solutions[0];
        assert_close(s.a, 2.0);
        assert_close(s.b, 2.0);
        assert_close(s.gamma, 60.0);
    }

    #[test]
    fn aas_in_radians() {
        let out = solve_fields(&[
            ("alpha", "1.5707963267948966"),
            ("beta", "0.5235987755982989"),
            ("a", "2"),
            ("mode", "rad"),
        ]);
        assert_eq!(out.mode, Some(AngleMode::Rad));
        let s = out.solutions[0];
        assert_close(s.b, 1.0);
        assert_close(s.c, 3.0_f64.sqrt());
        assert_close(s.gamma, PI / 3.0);
    }

    #[test]
    fn ssa_two_solutions() {
        // a=3, b=4, alpha=30°: sin(beta) = 2/3.
        let out = solve_fields(&[("a", "3"), ("b", "4"), ("alpha", "30")]);
        assert_eq!(out.solutions.len(), 2);
        let acute = (2.0_f64 / 3.0).asin().to_degrees();
        assert_close(out.solutions[0].beta, acute);
        assert_close(out.solutions[1].beta, 180.0 - acute);
        for s in &out.solutions {
            assert_close(s.alpha + s.beta + s.gamma, 180.0);
        }
    }

    #[test]
    fn ssa_right_angle_has_one_solution() {
        // a = b sin(alpha) exactly: beta = 90°.
        let out = solve_fields(&[("a", "1"), ("b", "2"), ("alpha", "30")]);
        assert_eq!(out.solutions.len(), 1);
        assert!((out.solutions[0].beta - 90.0).abs() < 1e-5);
    }

    #[test]
    fn ssa_no_solution() {
        let out = solve_fields(&[("a", "1"), ("b", "4"), ("alpha", "60")]);
        assert!(out.solutions.is_empty());
    }

    #[test]
    fn triangle_inequality_violation_has_no_solution() {
        let out = solve_fields(&[("a", "1"), ("b", "2"), ("c", "10")]);
        assert!(out.solutions.is_empty());
    }

    #[test]
    fn angle_sum_too_large_has_no_solution() {
        let out = solve_fields(&[("alpha", "100"), ("beta", "90"), ("a", "1")]);
        assert!(out.solutions.is_empty());
    }

    #[test]
    fn insufficient_input_has_no_solution() {
        assert!(solve_fields(&[("a", "1"), ("b", "1")]).solutions.is_empty());
        assert!(
            solve_fields(&[("alpha", "60"), ("beta", "60"), ("gamma", "60")])
                .solutions
                .is_empty()
        );
        assert!(solve_fields(&[]).solutions.is_empty());
    }

    #[test]
    fn malformed_numbers_have_no_solution() {
        assert!(
            solve_fields(&[("a", "three"), ("b", "4"), ("c", "5")])
                .solutions
                .is_empty()
        );
        assert!(
            solve_fields(&[("a", "-3"), ("b", "4"), ("c", "5")])
                .solutions
                .is_empty()
        );
        assert!(
            solve_fields(&[("a", "inf"), ("b", "4"), ("c", "5")])
                .solutions
                .is_empty()
        );
    }

    #[test]
    fn three_angles_must_sum_to_half_turn() {
        let good = solve_fields(&[("alpha", "90"), ("beta", "45"), ("gamma", "45"), ("a", "2")]);
        assert_eq!(good.solutions.len(), 1);
        let bad = solve_fields(&[("alpha", "90"), ("beta", "50"), ("gamma", "50"), ("a", "2")]);
        assert!(bad.solutions.is_empty());
    }

    #[test]
    fn consistent_redundant_input_is_accepted() {
        let out = solve_fields(&[("a", "5"), ("b", "4"), ("c", "3"), ("alpha", "90")]);
        assert_eq!(out.solutions.len(), 1);
    }

    #[test]
    fn inconsistent_redundant_input_is_rejected() {
        let out = solve_fields(&[("a", "5"), ("b", "4"), ("c", "3"), ("alpha", "80")]);
        assert!(out.solutions.is_empty());
    }

    #[test]
    fn parse_errors_name_the_field() {
        let params = read_parameters([("gamma", "200")]);
        let err = Knowns::parse(&params, AngleMode::Deg).unwrap_err();
        assert_eq!(err, InputError::AngleOutOfRange("gamma"));
        assert_eq!(err.to_string(), "angle `gamma` is out of range");
    }
}
