use quad_homography::config::translate_demo;
use quad_homography::config::write_json_file;
use quad_homography::{homography_from_coeffs, homography_to_coeffs, translate_homography};
use serde::Serialize;
use std::env;

#[derive(Serialize)]
struct TranslateReport {
    input: [f64; 9],
    shift: f64,
    coefficients: [f64; 9],
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
        .unwrap_or_else(|| "translate_demo".to_string());
    let config = translate_demo::parse_cli(&program)?;

    let h = homography_from_coeffs(config.coefficients);
    let rebased = translate_homography(&h, config.shift);
    let coefficients = homography_to_coeffs(&rebased);

    println!("{}", coefficients.map(|c| c.to_string()).join(" "));

    if let Some(path) = &config.output.json_out {
        let report = TranslateReport {
            input: config.coefficients,
            shift: config.shift,
            coefficients,
        };
        write_json_file(path, &report)?;
        eprintln!("JSON report written to {}", path.display());
    }

    Ok(())
}
