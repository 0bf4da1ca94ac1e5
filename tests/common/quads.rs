use nalgebra::Matrix3;
use quad_homography::{project, Point2D, Quad};
use rand::rngs::StdRng;
use rand::Rng;

/// A square of the given size with every corner jittered, in the canonical
/// (0,0), (0,1), (1,1), (1,0) corner order. Jitter well below `size / 2`
/// keeps the quad convex and far from degenerate.
pub fn perturbed_square(rng: &mut StdRng, size: f64, jitter: f64) -> Quad {
    let corners = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];
    corners.map(|[x, y]| {
        Point2D::new(
            x * size + rng.random_range(-jitter..jitter),
            y * size + rng.random_range(-jitter..jitter),
        )
    })
}

/// Corner-wise shift into a frame whose origin sits at `(t, t)`.
pub fn shifted(quad: &Quad, t: f64) -> Quad {
    quad.map(|p| Point2D::new(p.x - t, p.y - t))
}

/// Corner-wise per-axis scaling.
pub fn scaled(quad: &Quad, sx: f64, sy: f64) -> Quad {
    quad.map(|p| Point2D::new(p.x * sx, p.y * sy))
}

/// Asserts that two homographies realize the same projective map on the
/// given probe points, regardless of their scale conventions.
pub fn assert_same_map(a: &Matrix3<f64>, b: &Matrix3<f64>, probes: &[Point2D], tol: f64) {
    for &p in probes {
        let pa = project(a, p).expect("probe point projects through first map");
        let pb = project(b, p).expect("probe point projects through second map");
        assert!(
            (pa.x - pb.x).abs() <= tol && (pa.y - pb.y).abs() <= tol,
            "maps disagree at ({}, {}): ({}, {}) vs ({}, {})",
            p.x,
            p.y,
            pa.x,
            pa.y,
            pb.x,
            pb.y
        );
    }
}
