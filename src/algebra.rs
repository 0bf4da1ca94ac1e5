//! Small determinant/cofactor helpers shared by the closed-form solves.
//!
//! Both the unit-square solve and the quad-to-quad composition reduce to 2×2
//! determinants and the adjugate-based 3×3 inverse; keeping the terms named
//! here keeps the algebra auditable.

use nalgebra::Matrix3;

use crate::types::Point2D;

/// Relative tolerance for near-zero denominators, before input scaling.
pub(crate) const EPS: f64 = 1e-12;

/// 2×2 determinant `| a b ; c d |`.
#[inline]
pub(crate) fn det2(a: f64, b: f64, c: f64, d: f64) -> f64 {
    a * d - b * c
}

/// Twice the signed area of the triangle (a, b, c).
///
/// Zero exactly when the three points are collinear.
#[inline]
pub(crate) fn triangle_area2(a: Point2D, b: Point2D, c: Point2D) -> f64 {
    det2(b.x - a.x, c.x - a.x, b.y - a.y, c.y - a.y)
}

/// 3×3 determinant, expanded along the first row with `det2` cofactors.
#[inline]
pub(crate) fn det3(m: &Matrix3<f64>) -> f64 {
    m[(0, 0)] * det2(m[(1, 1)], m[(1, 2)], m[(2, 1)], m[(2, 2)])
        - m[(0, 1)] * det2(m[(1, 0)], m[(1, 2)], m[(2, 0)], m[(2, 2)])
        + m[(0, 2)] * det2(m[(1, 0)], m[(1, 1)], m[(2, 0)], m[(2, 1)])
}

/// Adjugate (transposed cofactor matrix), satisfying
/// `m * adjugate(m) == det3(m) * I`.
pub(crate) fn adjugate(m: &Matrix3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        det2(m[(1, 1)], m[(1, 2)], m[(2, 1)], m[(2, 2)]),
        -det2(m[(0, 1)], m[(0, 2)], m[(2, 1)], m[(2, 2)]),
        det2(m[(0, 1)], m[(0, 2)], m[(1, 1)], m[(1, 2)]),
        -det2(m[(1, 0)], m[(1, 2)], m[(2, 0)], m[(2, 2)]),
        det2(m[(0, 0)], m[(0, 2)], m[(2, 0)], m[(2, 2)]),
        -det2(m[(0, 0)], m[(0, 2)], m[(1, 0)], m[(1, 2)]),
        det2(m[(1, 0)], m[(1, 1)], m[(2, 0)], m[(2, 1)]),
        -det2(m[(0, 0)], m[(0, 1)], m[(2, 0)], m[(2, 1)]),
        det2(m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]),
    )
}

/// Largest axis-aligned extent of the point set.
///
/// Degeneracy tolerances scale with this span (squared, matching the degree
/// of the compared quantity): corner-triple areas and the unit-square
/// determinant are translation invariant, so the raw coordinate magnitude is
/// the wrong yardstick for them.
pub(crate) fn coordinate_span(points: &[Point2D]) -> f64 {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    (max_x - min_x).max(max_y - min_y)
}
