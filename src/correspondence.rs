//! Homography between two general quadrilaterals from four correspondences.

use log::debug;
use nalgebra::Matrix3;

use crate::algebra::{adjugate, coordinate_span, det3, EPS};
use crate::types::{HomographyError, Quad};
use crate::unit_square::unit_square_to_quad;

/// Computes the homography sending `src[i]` to `dst[i]` for i = 0..3.
///
/// The four source corners and the four destination corners must be listed
/// in the same cyclic order. This is a strict precondition: the routine
/// neither reorders nor validates winding, and a mismatched ordering yields
/// a finite but geometrically wrong transform.
///
/// Internally both quads are expressed as images of the unit square,
/// `Hr` for the source and `Hl` for the destination, and the result is
/// `Hl · Hr⁻¹` with the inverse written through the adjugate:
/// `Hl · adj(Hr) / det(Hr)`. On success `R · src[i] ∝ dst[i]` holds within
/// floating-point rounding for all four correspondences.
///
/// Fails with [`HomographyError::IllConditionedCorrespondence`] when either
/// quad has three collinear corners, or when `det(Hr)` is numerically
/// indistinguishable from zero.
pub fn quad_to_quad(src: &Quad, dst: &Quad) -> Result<Matrix3<f64>, HomographyError> {
    let hr = unit_square_to_quad(src)?;
    let hl = unit_square_to_quad(dst)?;

    let det = det3(&hr);
    let tolerance = {
        let s = coordinate_span(src);
        // det(Hr) is translation invariant and quadratic in the extent of
        // the source quad (the affine part dominates it).
        EPS * s * s
    };
    if !det.is_finite() || det.abs() <= tolerance {
        debug!(
            "quad_to_quad rejected near-singular source solve (det {:.3e}, tolerance {:.3e})",
            det, tolerance
        );
        return Err(HomographyError::IllConditionedCorrespondence {
            denominator: det,
            tolerance,
        });
    }

    Ok(hl * adjugate(&hr) / det)
}
