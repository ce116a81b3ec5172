use std::path::Path;

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::models::Inventory;

/// Default location of the generated license report.
pub const DEFAULT_INVENTORY_PATH: &str = "target/generated-sources/license/LICENSES.yml";

/// Load the generated artifact → licenses report.
///
/// ```yaml
/// org.example:lib-a:
///   - MIT
/// org.example:lib-b:
///   - Apache-2.0
///   - MIT
/// ```
///
/// An artifact with a `null` value is read as declaring no licenses. A report
/// without any artifacts (empty, comments only, `null`, or `{}`) is an error:
/// it usually means the license generator failed.
pub fn load_inventory(path: &Path) -> Result<Inventory> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read license inventory: {}", path.display()))?;

    let inventory = parse_inventory(&content)
        .with_context(|| format!("Failed to parse license inventory: {}", path.display()))?;

    debug!(artifacts = inventory.len(), path = %path.display(), "loaded license inventory");
    Ok(inventory)
}

fn parse_inventory(content: &str) -> Result<Inventory> {
    let raw: Option<IndexMap<String, Option<Vec<String>>>> = serde_yaml_ng::from_str(content)?;

    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => bail!("license inventory is empty"),
    };

    let inventory = raw
        .into_iter()
        .map(|(artifact, licenses)| {
            let licenses = licenses.unwrap_or_default();
            if licenses.is_empty() {
                warn!(%artifact, "artifact declares no licenses");
            }
            (artifact, licenses)
        })
        .collect();

    Ok(inventory)
}
