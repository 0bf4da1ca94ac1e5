//! Helpers for pushing points through a homography.

use nalgebra::{Matrix3, Vector3};

use crate::algebra::EPS;
use crate::types::Point2D;

/// Projects a single point through `h` with a perspective divide.
///
/// Returns `None` when the point lands on (or numerically at) the line at
/// infinity, rather than dividing through a vanishing homogeneous
/// coordinate.
pub fn project(h: &Matrix3<f64>, p: Point2D) -> Option<Point2D> {
    let v = h * Vector3::new(p.x, p.y, 1.0);
    let w = v[2];
    if !w.is_finite() || w.abs() <= EPS || !v[0].is_finite() || !v[1].is_finite() {
        return None;
    }
    Some(Point2D::new(v[0] / w, v[1] / w))
}

/// Projects a batch of points, failing as a whole if any of them cannot be
/// projected.
pub fn apply_homography_points(h: &Matrix3<f64>, pts: &[Point2D]) -> Option<Vec<Point2D>> {
    let mut out = Vec::with_capacity(pts.len());
    for &p in pts {
        out.push(project(h, p)?);
    }
    Some(out)
}

/// Euclidean distance between `project(h, src)` and `dst`, or `None` when
/// the source point cannot be projected.
pub fn reprojection_error(h: &Matrix3<f64>, src: Point2D, dst: Point2D) -> Option<f64> {
    let p = project(h, src)?;
    let dx = p.x - dst.x;
    let dy = p.y - dst.y;
    Some((dx * dx + dy * dy).sqrt())
}
