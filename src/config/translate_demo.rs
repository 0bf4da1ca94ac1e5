//! Configuration for the homography translation demo.

use super::{split_args, OutputConfig};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Nine row-major coefficients, the frame shift, and output options.
#[derive(Debug, Deserialize)]
pub struct TranslateDemoConfig {
    /// Row-major homography coefficients in the original frame.
    pub coefficients: [f64; 9],
    /// Offset of the new frame origin along both axes.
    pub shift: f64,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<TranslateDemoConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: TranslateDemoConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [--json-out PATH] h00 h01 h02 h10 h11 h12 h20 h21 h22 t\n\
         \x20      {program} --config PATH [--json-out PATH]\n\
         \n\
         Re-bases the homography with the given row-major coefficients onto\n\
         frames shifted by t along both axes (e.g. a square crop offset) and\n\
         prints the nine resulting coefficients. The config file is JSON with\n\
         \"coefficients\" and \"shift\" fields."
    )
}

/// Builds the demo configuration from `std::env::args`.
pub fn parse_cli(program: &str) -> Result<TranslateDemoConfig, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_args(program, &args)
}

fn parse_args(program: &str, args: &[String]) -> Result<TranslateDemoConfig, String> {
    let usage = usage(program);
    let common = split_args(args, &usage)?;

    if let Some(path) = &common.config_path {
        if !common.numbers.is_empty() {
            return Err(format!(
                "--config and positional numbers are mutually exclusive\n\n{usage}"
            ));
        }
        let mut config = load_config(path)?;
        if common.json_out.is_some() {
            config.output.json_out = common.json_out;
        }
        return Ok(config);
    }

    if common.numbers.len() != 10 {
        return Err(format!(
            "expected 10 numbers (9 coefficients and a shift), got {}\n\n{usage}",
            common.numbers.len()
        ));
    }

    let mut coefficients = [0.0; 9];
    coefficients.copy_from_slice(&common.numbers[..9]);

    Ok(TranslateDemoConfig {
        coefficients,
        shift: common.numbers[9],
        output: OutputConfig {
            json_out: common.json_out,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_numbers_split_into_coefficients_and_shift() {
        let argv: Vec<String> = (1..=10).map(|i| i.to_string()).collect();
        let config = parse_args("translate_demo", &argv).unwrap();
        assert_eq!(
            config.coefficients,
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
        assert_eq!(config.shift, 10.0);
    }

    #[test]
    fn wrong_count_is_reported() {
        let argv: Vec<String> = (1..=9).map(|i| i.to_string()).collect();
        let err = parse_args("translate_demo", &argv).unwrap_err();
        assert!(err.contains("expected 10 numbers"), "{err}");
    }

    #[test]
    fn help_prints_usage() {
        let err = parse_args("translate_demo", &["--help".to_string()]).unwrap_err();
        assert!(err.starts_with("Usage:"), "{err}");
    }
}
