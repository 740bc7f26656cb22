use nalgebra::{Matrix2, Vector2};

/// The fixed system matrix. Rank 1: it projects everything onto the
/// line y = 0.5x, so Ax = b has a whole line of solutions whenever it
/// has one.
pub fn matrix_a() -> Matrix2<f64> {
    Matrix2::new(
        1.0, 0.5,
        0.5, 0.25,
    )
}

/// Spans the null space of [`matrix_a`]. All entries are exact binary
/// fractions, so A * null_basis() is (0, 0) exactly, not just within
/// rounding.
pub fn null_basis() -> Vector2<f64> {
    Vector2::new(-0.5, 1.0)
}

/// Direction of the column space of [`matrix_a`], the line y = 0.5x in
/// the codomain. Every reachable b sits on this line.
pub fn column_direction() -> Vector2<f64> {
    Vector2::new(1.0, 0.5)
}

/// One solution of Ax = b for the b that sits `b_scalar` units along
/// the column direction: picking x on the x-axis makes the closed form
/// trivial, A * (t, 0) = t * (1, 0.5).
pub fn particular_solution(b_scalar: f64) -> Vector2<f64> {
    Vector2::new(b_scalar, 0.0)
}

/// A solution of Ax = 0, `lambda` units along the null basis.
pub fn homogeneous_solution(lambda: f64) -> Vector2<f64> {
    null_basis() * lambda
}
