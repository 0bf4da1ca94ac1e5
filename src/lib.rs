#![doc = include_str!("../README.md")]

// Core solves (stable surface)
pub mod correspondence;
pub mod frame;
pub mod types;
pub mod unit_square;

// Supporting helpers
pub mod apply;
pub mod config;

mod algebra;

// --- High-level re-exports -------------------------------------------------

// The three re-basing/estimation entry points.
pub use crate::correspondence::quad_to_quad;
pub use crate::frame::{rescale_homography, translate_homography};
pub use crate::unit_square::unit_square_to_quad;

// Value types and the coefficient bridge used by thin wrappers.
pub use crate::types::{
    homography_from_coeffs, homography_to_coeffs, HomographyError, Point2D, Quad,
};

// Point projection helpers that are generally useful.
pub use crate::apply::{apply_homography_points, project, reprojection_error};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use quad_homography::prelude::*;
///
/// # fn main() -> Result<(), HomographyError> {
/// let src = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]].map(Point2D::from);
/// let dst = [[0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0]].map(Point2D::from);
///
/// let h = quad_to_quad(&src, &dst)?;
/// let p = project(&h, Point2D::new(0.5, 0.5)).unwrap();
/// assert!((p.x - 1.0).abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::apply::project;
    pub use crate::{quad_to_quad, translate_homography, unit_square_to_quad};
    pub use crate::{HomographyError, Point2D, Quad};
}
