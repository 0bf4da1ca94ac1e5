//! Shared value types for the homography routines.

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

/// A 2D point with finite real coordinates.
///
/// Plain value type: no identity beyond its coordinates, immutable once
/// constructed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point2D {
    fn from(p: [f64; 2]) -> Self {
        Self { x: p[0], y: p[1] }
    }
}

impl From<Point2D> for [f64; 2] {
    fn from(p: Point2D) -> Self {
        [p.x, p.y]
    }
}

/// Four corners, ordered as the images of the unit-square corners
/// (0,0), (0,1), (1,1), (1,0).
pub type Quad = [Point2D; 4];

/// Failure raised when a correspondence set is too close to degenerate for
/// the closed-form solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HomographyError {
    /// A required denominator (corner-triple area or determinant) fell below
    /// the tolerance derived from the magnitude of the inputs.
    IllConditionedCorrespondence { denominator: f64, tolerance: f64 },
}

impl std::fmt::Display for HomographyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HomographyError::IllConditionedCorrespondence {
                denominator,
                tolerance,
            } => write!(
                f,
                "ill-conditioned correspondence (denominator {:.3e}, tolerance {:.3e})",
                denominator, tolerance
            ),
        }
    }
}

impl std::error::Error for HomographyError {}

/// Builds a homography from nine row-major coefficients
/// `[h00, h01, h02, h10, h11, h12, h20, h21, h22]`.
pub fn homography_from_coeffs(c: [f64; 9]) -> Matrix3<f64> {
    Matrix3::from_row_slice(&c)
}

/// Flattens a homography into nine row-major coefficients.
pub fn homography_to_coeffs(h: &Matrix3<f64>) -> [f64; 9] {
    [
        h[(0, 0)],
        h[(0, 1)],
        h[(0, 2)],
        h[(1, 0)],
        h[(1, 1)],
        h[(1, 2)],
        h[(2, 0)],
        h[(2, 1)],
        h[(2, 2)],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coeff_round_trip_is_row_major() {
        let c = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let h = homography_from_coeffs(c);
        assert_eq!(h[(0, 1)], 2.0);
        assert_eq!(h[(1, 0)], 4.0);
        assert_eq!(h[(2, 2)], 9.0);
        assert_eq!(homography_to_coeffs(&h), c);
    }

    #[test]
    fn point_array_conversions() {
        let p = Point2D::from([3.5, -1.25]);
        assert_eq!(p, Point2D::new(3.5, -1.25));
        let a: [f64; 2] = p.into();
        assert_eq!(a, [3.5, -1.25]);
    }
}
