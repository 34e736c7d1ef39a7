use std::fs;
use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::error::OcrError;
use crate::stat_lines::{ParsedStats, parse_ocr_output};

const STDERR_TAIL_LINES: usize = 5;

/// Runs the OCR reader on a screenshot and normalizes what it prints.
pub fn run_ocr(bin: &Path, screenshot: &Path) -> Result<ParsedStats, OcrError> {
    info!(bin = %bin.display(), screenshot = %screenshot.display(), "running ocr");
    let output = Command::new(bin)
        .arg(screenshot)
        .output()
        .map_err(|source| OcrError::Launch {
            bin: bin.display().to_string(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(OcrError::Failed {
            status: output.status.to_string(),
            stderr: stderr_tail(&stderr),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed = parse_ocr_output(&stdout)?;
    info!(stats = parsed.record.len(), "ocr stats recovered");
    Ok(parsed)
}

/// Parses a saved OCR dump instead of running the reader.
pub fn read_ocr_dump(path: &Path) -> Result<ParsedStats, OcrError> {
    let text = fs::read_to_string(path)?;
    Ok(parse_ocr_output(&text)?)
}

fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}
