use quad_homography::config::corresp_demo;
use quad_homography::config::write_json_file;
use quad_homography::{homography_to_coeffs, quad_to_quad, reprojection_error};
use serde::Serialize;
use std::env;

#[derive(Serialize)]
struct CorrespReport {
    src: [[f64; 2]; 4],
    dst: [[f64; 2]; 4],
    coefficients: [f64; 9],
    /// Per-corner reprojection residuals; `null` if a corner cannot be
    /// projected through the result.
    corner_residuals: [Option<f64>; 4],
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "corresp_demo".to_string());
    let config = corresp_demo::parse_cli(&program)?;

    let src = config.source_quad();
    let dst = config.target_quad();
    let h = quad_to_quad(&src, &dst).map_err(|e| e.to_string())?;
    let coefficients = homography_to_coeffs(&h);

    println!("{}", coefficients.map(|c| c.to_string()).join(" "));

    if let Some(path) = &config.output.json_out {
        let mut corner_residuals = [None; 4];
        for (i, (s, d)) in src.iter().zip(dst.iter()).enumerate() {
            corner_residuals[i] = reprojection_error(&h, *s, *d);
        }
        let report = CorrespReport {
            src: config.src,
            dst: config.dst,
            coefficients,
            corner_residuals,
        };
        write_json_file(path, &report)?;
        eprintln!("JSON report written to {}", path.display());
    }

    Ok(())
}
