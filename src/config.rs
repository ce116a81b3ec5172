use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

/// Default location of the permitted-licenses config, relative to the repository root.
pub const DEFAULT_CONFIG_PATH: &str = "./.github/permitted-licenses.yml";

/// Root of the permitted-licenses YAML document.
///
/// ```yaml
/// permitted:
///   - MIT
///   - Apache-2.0
/// permitted-with-warning:
///   - name: GPL-3.0
///     warning: copyleft, only allowed for build tooling
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    /// Licenses that are always acceptable.
    pub permitted: Vec<String>,
    /// Licenses that are acceptable but must be reviewed manually.
    pub permitted_with_warning: Vec<WarningLicense>,
    /// Anything else in the document; reported and ignored.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WarningLicense {
    pub name: String,
    /// Human-readable explanation shown next to the artifact.
    pub warning: String,
}

/// The loaded allow-list.
///
/// License names are compared by exact, case-sensitive string equality. No
/// normalization or SPDX expression parsing takes place: `MIT` and `mit` are
/// different licenses as far as the policy is concerned.
#[derive(Debug, Clone, Default)]
pub struct LicensePolicy {
    pub permitted: HashSet<String>,
    /// Warning-tier license name → warning text.
    pub warnings: HashMap<String, String>,
}

impl LicensePolicy {
    /// Build the lookup tables from a parsed config file.
    ///
    /// A repeated warning-license name keeps its first entry. A license listed
    /// in both tiers stays in both; the classifier checks `permitted` first.
    pub fn from_config(config: ConfigFile) -> Self {
        for key in config.unknown_fields.keys() {
            warn!(field = %key, "unknown config field will be ignored");
        }

        let permitted: HashSet<String> = config.permitted.into_iter().collect();

        let mut warnings = HashMap::new();
        for entry in config.permitted_with_warning {
            if permitted.contains(&entry.name) {
                warn!(
                    license = %entry.name,
                    "license is both permitted and permitted-with-warning; treating it as permitted"
                );
            }
            if warnings.contains_key(&entry.name) {
                warn!(license = %entry.name, "duplicate permitted-with-warning entry; keeping the first");
                continue;
            }
            warnings.insert(entry.name, entry.warning);
        }

        LicensePolicy {
            permitted,
            warnings,
        }
    }
}

/// Load and parse the permitted-licenses config.
///
/// A missing or malformed file is an error: a broken compliance config must
/// stop the pipeline instead of letting every artifact through.
pub fn load_config(path: &Path) -> Result<LicensePolicy> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read license config: {}", path.display()))?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content)
        .with_context(|| format!("Failed to parse license config: {}", path.display()))?;

    let policy = LicensePolicy::from_config(config);
    debug!(
        permitted = policy.permitted.len(),
        with_warning = policy.warnings.len(),
        path = %path.display(),
        "loaded license config"
    );

    Ok(policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(content: &str) -> LicensePolicy {
        LicensePolicy::from_config(serde_yaml_ng::from_str(content).unwrap())
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("permitted-licenses.yml");
        fs::write(
            &path,
            r#"
permitted:
  - MIT
  - Apache-2.0
permitted-with-warning:
  - name: GPL-3.0
    warning: copyleft
  - name: EPL-2.0
    warning: "weak copyleft, check linking"
"#,
        )
        .unwrap();

        let policy = load_config(&path).unwrap();
        assert_eq!(policy.permitted.len(), 2);
        assert!(policy.permitted.contains("MIT"));
        assert!(policy.permitted.contains("Apache-2.0"));
        assert_eq!(policy.warnings.get("GPL-3.0").map(String::as_str), Some("copyleft"));
        assert_eq!(
            policy.warnings.get("EPL-2.0").map(String::as_str),
            Some("weak copyleft, check linking")
        );
    }

    #[test]
    fn test_empty_lists_are_accepted() {
        let policy = parse("permitted: []\npermitted-with-warning: []\n");
        assert!(policy.permitted.is_empty());
        assert!(policy.warnings.is_empty());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = load_config(Path::new("/nonexistent/permitted-licenses.yml"));
        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("Failed to read license config"));
    }

    #[test]
    fn test_malformed_yaml_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.yml");
        fs::write(&path, "permitted: [[[broken").unwrap();

        let err = format!("{:#}", load_config(&path).unwrap_err());
        assert!(err.contains("Failed to parse license config"));
    }

    #[test]
    fn test_missing_warning_section_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.yml");
        fs::write(&path, "permitted:\n  - MIT\n").unwrap();

        let err = format!("{:#}", load_config(&path).unwrap_err());
        assert!(err.contains("permitted-with-warning"));
    }

    #[test]
    fn test_warning_entry_requires_text() {
        let result: std::result::Result<ConfigFile, _> = serde_yaml_ng::from_str(
            "permitted: []\npermitted-with-warning:\n  - name: GPL-3.0\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_warning_name_keeps_first() {
        let policy = parse(
            r#"
permitted: []
permitted-with-warning:
  - name: GPL-3.0
    warning: first
  - name: GPL-3.0
    warning: second
"#,
        );
        assert_eq!(policy.warnings.len(), 1);
        assert_eq!(policy.warnings.get("GPL-3.0").map(String::as_str), Some("first"));
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let config: ConfigFile = serde_yaml_ng::from_str(
            "permitted: []\npermitted-with-warning: []\nforbidden: [GPL-2.0]\n",
        )
        .unwrap();
        assert!(config.unknown_fields.contains_key("forbidden"));
    }
}
