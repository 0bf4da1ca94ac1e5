//! Re-basing of homographies under coordinate-frame changes.
//!
//! A homography estimated between two full frames stays valid after both
//! frames are cropped or rescaled, provided its coefficients are rewritten
//! for the new coordinates. Both operations here are exact conjugations with
//! the frame-change matrix; neither has an error path, though the result can
//! itself be degenerate for pathological inputs (the caller checks before
//! projecting through it).

use nalgebra::Matrix3;

/// Rewrites `h` for frames whose origin is shifted by `t` along both axes.
///
/// A point at `(x, y)` in the new frame sits at `(x + t, y + t)` in the
/// original one; the typical use is re-basing onto square crops taken at
/// offset `t` in both images. With `T(t)` the translation by `(t, t)`, the
/// result is `T(-t) · h · T(t)`, so the bottom-left coefficients are
/// untouched and the bottom-right one becomes
/// `h20·t + h21·t + h22`.
pub fn translate_homography(h: &Matrix3<f64>, t: f64) -> Matrix3<f64> {
    let forward = Matrix3::new(1.0, 0.0, t, 0.0, 1.0, t, 0.0, 0.0, 1.0);
    let backward = Matrix3::new(1.0, 0.0, -t, 0.0, 1.0, -t, 0.0, 0.0, 1.0);
    backward * h * forward
}

/// Rewrites `h` for frames scaled by `(sx, sy)` on both sides.
///
/// With `S = diag(sx, sy, 1)` the result is `S · h · S⁻¹`: the homography
/// expressed between the two images after each is resampled by the same
/// factors, e.g. when matching ran at a reduced resolution. Zero scale
/// factors produce a degenerate result, which is the caller's concern.
pub fn rescale_homography(h: &Matrix3<f64>, sx: f64, sy: f64) -> Matrix3<f64> {
    let scale = Matrix3::new(sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0);
    let unscale = Matrix3::new(1.0 / sx, 0.0, 0.0, 0.0, 1.0 / sy, 0.0, 0.0, 0.0, 1.0);
    scale * h * unscale
}
