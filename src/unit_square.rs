//! Closed-form homography from the canonical unit square to a quadrilateral.

use log::debug;
use nalgebra::Matrix3;

use crate::algebra::{coordinate_span, det2, triangle_area2, EPS};
use crate::types::{HomographyError, Quad};

/// Checks every corner triple of the quad for collinearity.
///
/// A unit-square homography exists and is invertible exactly when no three
/// of the four corners are collinear; the tolerance scales with the squared
/// extent of the quad because the areas are quadratic in the coordinates.
fn degenerate_corner_triple(quad: &Quad) -> Option<(f64, f64)> {
    let tolerance = {
        let s = coordinate_span(quad);
        EPS * s * s
    };
    const TRIPLES: [(usize, usize, usize); 4] =
        [(0, 1, 2), (0, 1, 3), (0, 2, 3), (1, 2, 3)];
    for (i, j, k) in TRIPLES {
        let area2 = triangle_area2(quad[i], quad[j], quad[k]);
        if area2.abs() <= tolerance {
            return Some((area2, tolerance));
        }
    }
    None
}

/// Computes the homography mapping the unit-square corners
/// (0,0), (0,1), (1,1), (1,0) to `quad[0]..quad[3]`.
///
/// The solution is the classic closed form for projective texture mapping:
/// the bottom-row entries solve a 2×2 system driven by the corner sums, the
/// rest follow directly. The scale is fixed by construction with the
/// bottom-right entry equal to one, and the origin column equals `quad[0]`.
///
/// Fails with [`HomographyError::IllConditionedCorrespondence`] when three
/// corners are collinear (within a tolerance scaled by the extent of the
/// quad), instead of returning a non-finite or singular matrix.
pub fn unit_square_to_quad(quad: &Quad) -> Result<Matrix3<f64>, HomographyError> {
    if let Some((denominator, tolerance)) = degenerate_corner_triple(quad) {
        debug!(
            "unit_square_to_quad rejected degenerate quad (area {:.3e}, tolerance {:.3e})",
            denominator, tolerance
        );
        return Err(HomographyError::IllConditionedCorrespondence {
            denominator,
            tolerance,
        });
    }

    let [q0, q1, q2, q3] = *quad;

    // Corner sums vanish exactly when the quad is a parallelogram, in which
    // case the bottom row degenerates to (0, 0, 1) and the map is affine.
    let sum_x = q0.x - q3.x + q2.x - q1.x;
    let sum_y = q0.y - q3.y + q2.y - q1.y;

    let dx1 = q3.x - q2.x;
    let dy1 = q3.y - q2.y;
    let dx2 = q1.x - q2.x;
    let dy2 = q1.y - q2.y;

    // Twice the signed area of the (q1, q2, q3) triple; nonzero after the
    // degeneracy check above.
    let den = det2(dx1, dx2, dy1, dy2);
    let g = det2(sum_x, dx2, sum_y, dy2) / den;
    let h = det2(dx1, sum_x, dy1, sum_y) / den;

    Ok(Matrix3::new(
        q3.x - q0.x + g * q3.x,
        q1.x - q0.x + h * q1.x,
        q0.x,
        q3.y - q0.y + g * q3.y,
        q1.y - q0.y + h * q1.y,
        q0.y,
        g,
        h,
        1.0,
    ))
}
