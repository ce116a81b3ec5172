use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::CheckResult;

/// Default file name of the structured result document.
pub const DEFAULT_RESULT_PATH: &str = "license-check-result.yml";

/// Write the result record as YAML.
///
/// Sections: `all-artifacts`, `warnings` (if any), `result` (a one-item list
/// holding `valid` or `invalid`), and `restricted-artifacts` (if any).
pub fn write(path: &Path, result: &CheckResult) -> Result<()> {
    let content = serde_yaml_ng::to_string(result).context("Failed to serialize check result")?;

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write result file: {}", path.display()))?;

    debug!(path = %path.display(), result = %result.result, "wrote result file");
    Ok(())
}
