mod common;

use common::quads::perturbed_square;
use quad_homography::{
    project, quad_to_quad, reprojection_error, unit_square_to_quad, Point2D,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn estimated_homography_reprojects_every_corner() {
    let mut rng = StdRng::seed_from_u64(7);
    for round in 0..25 {
        let src = perturbed_square(&mut rng, 120.0, 15.0);
        let dst = perturbed_square(&mut rng, 90.0, 12.0);
        let h = quad_to_quad(&src, &dst).expect("jittered squares stay well conditioned");
        for (s, d) in src.iter().zip(dst.iter()) {
            let err = reprojection_error(&h, *s, *d).unwrap();
            assert!(
                err < 1e-8,
                "round {round}: corner reprojection error {err:.3e}"
            );
        }
    }
}

#[test]
fn composition_agrees_with_unit_square_factors() {
    let src = [[10.0, 12.0], [11.0, 110.0], [118.0, 108.0], [121.0, 9.0]].map(Point2D::from);
    let dst = [[0.0, 0.0], [4.0, 100.0], [105.0, 95.0], [110.0, 2.0]].map(Point2D::from);

    let hr = unit_square_to_quad(&src).unwrap();
    let hl = unit_square_to_quad(&dst).unwrap();
    let h = quad_to_quad(&src, &dst).unwrap();

    // Going unit square -> src -> dst through the composed map must agree
    // with going unit square -> dst directly.
    for u in [
        Point2D::new(0.25, 0.25),
        Point2D::new(0.5, 0.5),
        Point2D::new(0.9, 0.1),
        Point2D::new(0.1, 0.8),
    ] {
        let via_src = project(&h, project(&hr, u).unwrap()).unwrap();
        let direct = project(&hl, u).unwrap();
        assert!(
            (via_src.x - direct.x).abs() < 1e-8 && (via_src.y - direct.y).abs() < 1e-8,
            "composed map disagrees at ({}, {})",
            u.x,
            u.y
        );
    }
}

#[test]
fn far_from_origin_quads_are_still_accepted() {
    // A modest quad translated far from the origin must not trip the
    // degeneracy tolerance.
    let offset = 1e7;
    let src = [[0.0, 0.0], [0.0, 50.0], [50.0, 50.0], [50.0, 0.0]]
        .map(|[x, y]: [f64; 2]| Point2D::new(x + offset, y + offset));
    let dst = [[0.0, 0.0], [3.0, 48.0], [55.0, 52.0], [49.0, -2.0]].map(Point2D::from);
    let h = quad_to_quad(&src, &dst).unwrap();
    for (s, d) in src.iter().zip(dst.iter()) {
        let err = reprojection_error(&h, *s, *d).unwrap();
        assert!(err < 1e-5, "corner reprojection error {err:.3e}");
    }
}
