//! Generate command implementation
//!
//! Paints the grass block texture and writes it under the output root.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use grassblock_texture::generate::generate;
use grassblock_texture::output::{publish, OutputLayout, PublishReport};

use super::json_output::{error_codes, relative_path, GenerateOutput, JsonError};

/// Run the generate command
///
/// # Arguments
/// * `out_root` - Directory holding `res/` and, optionally, `build/`
/// * `seed` - RNG seed for the noise passes
/// * `size` - Width and height in pixels
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 write failure (JSON mode only; human mode
/// returns the error)
pub fn run(out_root: &str, seed: u32, size: u32, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(out_root, seed, size)
    } else {
        run_human(out_root, seed, size)
    }
}

fn generate_and_publish(out_root: &str, seed: u32, size: u32) -> Result<PublishReport> {
    let buffer = generate(size, size, seed);
    let layout = OutputLayout::new(out_root);
    publish(&buffer, &layout)
        .with_context(|| format!("failed to write texture under {}", out_root))
}

/// Status lines for a finished run, paths relative to the output root.
///
/// The last line is the completion message.
pub fn status_lines(report: &PublishReport, out_root: &Path) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);
    if let Some(primary) = report.primary() {
        lines.push(format!(
            "Created texture at {}",
            relative_path(&primary.path, out_root)
        ));
    }
    if let Some(copy) = report.build_copy() {
        lines.push(format!(
            "Copied texture to {}",
            relative_path(&copy.path, out_root)
        ));
    }
    lines.push("Done!".to_string());
    lines
}

/// Run generate with human-readable (colored) output
fn run_human(out_root: &str, seed: u32, size: u32) -> Result<ExitCode> {
    let report = generate_and_publish(out_root, seed, size)?;

    let lines = status_lines(&report, Path::new(out_root));
    if let Some((done, progress)) = lines.split_last() {
        for line in progress {
            println!("{}", line.as_str().green());
        }
        println!("{}", done.as_str().green().bold());
    }

    Ok(ExitCode::SUCCESS)
}

/// Run generate with JSON output
fn run_json(out_root: &str, seed: u32, size: u32) -> Result<ExitCode> {
    let (output, code) = match generate_and_publish(out_root, seed, size) {
        Ok(report) => (
            GenerateOutput::success(seed, size, &report, Path::new(out_root)),
            ExitCode::SUCCESS,
        ),
        Err(e) => (
            GenerateOutput::failure(
                seed,
                size,
                JsonError::new(error_codes::WRITE_FAILED, format!("{:#}", e)),
            ),
            ExitCode::from(1),
        ),
    };

    let json = serde_json::to_string_pretty(&output).context("failed to serialize JSON output")?;
    println!("{}", json);

    Ok(code)
}
