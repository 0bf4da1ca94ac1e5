//! Configuration for the four-correspondence homography demo.

use super::{split_args, OutputConfig};
use crate::types::{Point2D, Quad};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Four source/target corner pairs plus output options.
#[derive(Debug, Deserialize)]
pub struct CorrespDemoConfig {
    /// Source quad corners.
    pub src: [[f64; 2]; 4],
    /// Target quad corners, in the same cyclic order as `src`.
    pub dst: [[f64; 2]; 4],
    #[serde(default)]
    pub output: OutputConfig,
}

impl CorrespDemoConfig {
    pub fn source_quad(&self) -> Quad {
        self.src.map(Point2D::from)
    }

    pub fn target_quad(&self) -> Quad {
        self.dst.map(Point2D::from)
    }
}

pub fn load_config(path: &Path) -> Result<CorrespDemoConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: CorrespDemoConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [--json-out PATH] sx1 sy1 tx1 ty1 ... sx4 sy4 tx4 ty4\n\
         \x20      {program} --config PATH [--json-out PATH]\n\
         \n\
         Computes the homography sending the four source points (sx, sy) to\n\
         the four target points (tx, ty) and prints its nine row-major\n\
         coefficients. Pairs are given interleaved, one correspondence at a\n\
         time. The config file is JSON with \"src\" and \"dst\" corner arrays."
    )
}

/// Builds the demo configuration from `std::env::args`.
pub fn parse_cli(program: &str) -> Result<CorrespDemoConfig, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_args(program, &args)
}

fn parse_args(program: &str, args: &[String]) -> Result<CorrespDemoConfig, String> {
    let usage = usage(program);
    let common = split_args(args, &usage)?;

    if let Some(path) = &common.config_path {
        if !common.numbers.is_empty() {
            return Err(format!(
                "--config and positional coordinates are mutually exclusive\n\n{usage}"
            ));
        }
        let mut config = load_config(path)?;
        if common.json_out.is_some() {
            config.output.json_out = common.json_out;
        }
        return Ok(config);
    }

    if common.numbers.len() != 16 {
        return Err(format!(
            "expected 16 coordinates (4 correspondences), got {}\n\n{usage}",
            common.numbers.len()
        ));
    }

    let mut src = [[0.0; 2]; 4];
    let mut dst = [[0.0; 2]; 4];
    for i in 0..4 {
        src[i] = [common.numbers[4 * i], common.numbers[4 * i + 1]];
        dst[i] = [common.numbers[4 * i + 2], common.numbers[4 * i + 3]];
    }

    Ok(CorrespDemoConfig {
        src,
        dst,
        output: OutputConfig {
            json_out: common.json_out,
        },
    })
}
