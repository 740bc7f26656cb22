use nalgebra::Vector2;

use crate::math::column_direction;
use crate::math::homogeneous_solution;
use crate::math::matrix_a;
use crate::math::null_basis;
use crate::math::particular_solution;


// Slider range shared by all three parameters.
pub const PARAM_MIN: f64 = -4.0;
pub const PARAM_MAX: f64 = 4.0;
pub const PARAM_STEP: f64 = 0.1;

// How far the fixed lines run from their anchor, in multiples of the
// direction vector. Enough to leave the visible viewport at every
// reachable anchor; the painter clips the rest.
pub const LINE_EXTENT: f64 = 8.0;


/// The three user-controlled scalars. Everything drawn is a pure
/// function of these.
pub struct Params {
    pub b_scalar: f64,
    pub lambda1: f64,
    pub lambda2: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            b_scalar: 3.0,
            lambda1: 1.0,
            lambda2: -2.0,
        }
    }
}


/// An infinite line, stored as anchor + direction so labels can sit
/// near the anchor while the drawn segment spans the viewport.
pub struct Line {
    pub anchor: Vector2<f64>,
    pub direction: Vector2<f64>,
}

impl Line {
    pub fn endpoints(&self) -> (Vector2<f64>, Vector2<f64>) {
        (
            self.anchor - self.direction * LINE_EXTENT,
            self.anchor + self.direction * LINE_EXTENT,
        )
    }
}


/// Every point and line the two panels draw, derived fresh each frame
/// from the current [`Params`]. Nothing here is cached or mutated.
pub struct SolutionSet {
    // Domain space.
    pub xp: Vector2<f64>,
    pub x1: Vector2<f64>,
    pub x2: Vector2<f64>,
    pub diff: Vector2<f64>,
    pub null_line: Line,
    pub solution_line: Line,

    // Codomain space.
    pub b: Vector2<f64>,
    pub ax1: Vector2<f64>,
    pub ax2: Vector2<f64>,
    pub a_diff: Vector2<f64>,
    pub column_line: Line,
}

impl SolutionSet {
    pub fn derive(params: &Params) -> Self {
        let a = matrix_a();

        let xp = particular_solution(params.b_scalar);
        let x1 = xp + homogeneous_solution(params.lambda1);
        let x2 = xp + homogeneous_solution(params.lambda2);
        let diff = x1 - x2;

        Self {
            xp,
            x1,
            x2,
            diff,
            null_line: Line {
                anchor: Vector2::zeros(),
                direction: null_basis(),
            },
            solution_line: Line {
                anchor: xp,
                direction: null_basis(),
            },
            b: a * xp,
            ax1: a * x1,
            ax2: a * x2,
            a_diff: a * diff,
            column_line: Line {
                anchor: Vector2::zeros(),
                direction: column_direction(),
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn derive(b_scalar: f64, lambda1: f64, lambda2: f64) -> SolutionSet {
        SolutionSet::derive(&Params {
            b_scalar,
            lambda1,
            lambda2,
        })
    }

    #[test]
    fn worked_scenario() {
        let s = derive(3.0, 1.0, -2.0);
        assert_eq!(s.xp, Vector2::new(3.0, 0.0));
        assert_eq!(s.x1, Vector2::new(2.5, 1.0));
        assert_eq!(s.x2, Vector2::new(4.0, -2.0));
        assert_eq!(s.diff, Vector2::new(-1.5, 3.0));
        assert_abs_diff_eq!(s.a_diff.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(s.a_diff.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn all_zero_parameters_collapse_to_origin() {
        let s = derive(0.0, 0.0, 0.0);
        assert_eq!(s.xp, Vector2::zeros());
        assert_eq!(s.x1, Vector2::zeros());
        assert_eq!(s.x2, Vector2::zeros());
        assert_eq!(s.diff, Vector2::zeros());
        assert_eq!(s.b, Vector2::zeros());
        assert_eq!(s.ax1, Vector2::zeros());
        assert_eq!(s.ax2, Vector2::zeros());
        assert_eq!(s.a_diff, Vector2::zeros());
    }

    #[test]
    fn equal_lambdas_at_the_boundary() {
        let s = derive(-4.0, 4.0, 4.0);
        assert_eq!(s.x1, Vector2::new(-6.0, 4.0));
        assert_eq!(s.x2, Vector2::new(-6.0, 4.0));
        assert_eq!(s.diff, Vector2::zeros());
        assert_eq!(s.a_diff, Vector2::zeros());
    }

    #[test]
    fn difference_stays_in_the_null_space_across_the_grid() {
        // Sweep the reachable parameter grid, boundaries included.
        for bi in (-40..=40).step_by(8) {
            for l1 in (-40..=40).step_by(8) {
                for l2 in (-40..=40).step_by(8) {
                    let s = derive(
                        bi as f64 * PARAM_STEP,
                        l1 as f64 * PARAM_STEP,
                        l2 as f64 * PARAM_STEP,
                    );
                    assert_abs_diff_eq!(s.a_diff.x, 0.0, epsilon = 1e-9);
                    assert_abs_diff_eq!(s.a_diff.y, 0.0, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn both_solutions_map_to_the_same_b() {
        for l1 in (-40..=40).step_by(5) {
            for l2 in (-40..=40).step_by(5) {
                let s = derive(2.7, l1 as f64 * PARAM_STEP, l2 as f64 * PARAM_STEP);
                assert_abs_diff_eq!(s.ax1.x, s.b.x, epsilon = 1e-9);
                assert_abs_diff_eq!(s.ax1.y, s.b.y, epsilon = 1e-9);
                assert_abs_diff_eq!(s.ax2.x, s.b.x, epsilon = 1e-9);
                assert_abs_diff_eq!(s.ax2.y, s.b.y, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn solution_line_passes_through_both_solutions() {
        let s = derive(1.3, 3.7, -0.9);
        // x1 and x2 are anchor + lambda * direction for their lambdas.
        for (x, lambda) in [(s.x1, 3.7), (s.x2, -0.9)] {
            let along = s.solution_line.anchor + s.solution_line.direction * lambda;
            assert_abs_diff_eq!(along.x, x.x, epsilon = 1e-12);
            assert_abs_diff_eq!(along.y, x.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn line_endpoints_are_symmetric_about_the_anchor() {
        let line = Line {
            anchor: Vector2::new(2.0, 0.0),
            direction: Vector2::new(-0.5, 1.0),
        };
        let (start, end) = line.endpoints();
        let mid = (start + end) * 0.5;
        assert_abs_diff_eq!(mid.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.y, 0.0, epsilon = 1e-12);
    }
}
