//! Configuration for the demo binaries.
//!
//! Each demo has a small config struct, fillable either from positional
//! command-line numbers or from a JSON file. The binaries own the whole
//! textual surface; the library itself only ever sees numbers.

pub mod corresp_demo;
pub mod translate_demo;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Output options shared by the demos.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Optional path for a structured JSON report in addition to the
    /// coefficient line on stdout.
    pub json_out: Option<PathBuf>,
}

/// Pretty-prints a serializable value to disk.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

pub(crate) fn parse_number(arg: &str) -> Result<f64, String> {
    arg.parse::<f64>()
        .map_err(|_| format!("expected a number, got '{arg}'"))
}

/// Splits flag arguments (`--config`, `--json-out`, `--help`) from the
/// positional numbers shared by both demo CLIs.
pub(crate) struct CommonArgs {
    pub config_path: Option<PathBuf>,
    pub json_out: Option<PathBuf>,
    pub numbers: Vec<f64>,
}

pub(crate) fn split_args(args: &[String], usage: &str) -> Result<CommonArgs, String> {
    let mut config_path = None;
    let mut json_out = None;
    let mut numbers = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("--config requires a path\n\n{usage}"))?;
                config_path = Some(PathBuf::from(value));
            }
            "--json-out" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("--json-out requires a path\n\n{usage}"))?;
                json_out = Some(PathBuf::from(value));
            }
            "-h" | "--help" => return Err(usage.to_string()),
            other => numbers.push(parse_number(other).map_err(|e| format!("{e}\n\n{usage}"))?),
        }
    }

    Ok(CommonArgs {
        config_path,
        json_out,
        numbers,
    })
}
