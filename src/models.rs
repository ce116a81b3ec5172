use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Artifact identifier → declared licenses, in inventory file order.
pub type Inventory = IndexMap<String, Vec<String>>;

/// Outcome of checking a single license name against the policy.
#[derive(Debug, Clone, PartialEq)]
pub enum LicenseStatus<'a> {
    Permitted,
    /// Accepted, but carries the configured warning text.
    Warning(&'a str),
    NotPermitted,
}

impl LicenseStatus<'_> {
    /// Permitted and warning-tier licenses both count as valid.
    pub fn is_valid(&self) -> bool {
        !matches!(self, LicenseStatus::NotPermitted)
    }
}

/// Per-artifact compliance decision.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Permitted,
    /// Accepted; the message is already attributed to the artifact.
    PermittedWithWarning(String),
    Rejected,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Permitted => write!(f, "permitted"),
            Verdict::PermittedWithWarning(_) => write!(f, "warning"),
            Verdict::Rejected => write!(f, "rejected"),
        }
    }
}

/// Verdicts for a whole inventory, keyed and ordered like the inventory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Evaluation {
    pub verdicts: IndexMap<String, Verdict>,
}

impl Evaluation {
    /// Warning lines, one per warned artifact.
    pub fn warnings(&self) -> Vec<&str> {
        self.verdicts
            .values()
            .filter_map(|v| match v {
                Verdict::PermittedWithWarning(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Rejected artifacts together with the licenses they declared.
    pub fn rejected(&self, inventory: &Inventory) -> Inventory {
        self.verdicts
            .iter()
            .filter(|(_, v)| **v == Verdict::Rejected)
            .map(|(artifact, _)| {
                let licenses = inventory.get(artifact).cloned().unwrap_or_default();
                (artifact.clone(), licenses)
            })
            .collect()
    }

    pub fn has_rejections(&self) -> bool {
        self.verdicts.values().any(|v| *v == Verdict::Rejected)
    }
}

/// Overall outcome written to the `result` section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Valid,
    Invalid,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Valid => write!(f, "valid"),
            Outcome::Invalid => write!(f, "invalid"),
        }
    }
}

/// Structured result record, serialized to the result file or as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CheckResult {
    pub all_artifacts: Inventory,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// Written as a one-item list (`result:\n - valid`), the shape CI scripts read.
    #[serde(with = "one_item_list")]
    pub result: Outcome,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub restricted_artifacts: Inventory,
}

impl CheckResult {
    pub fn new(inventory: &Inventory, evaluation: &Evaluation) -> Self {
        let result = if evaluation.has_rejections() {
            Outcome::Invalid
        } else {
            Outcome::Valid
        };

        CheckResult {
            all_artifacts: inventory.clone(),
            warnings: evaluation.warnings().into_iter().map(str::to_string).collect(),
            result,
            restricted_artifacts: evaluation.rejected(inventory),
        }
    }

    /// Process exit code consumed by the CI pipeline.
    pub fn exit_code(&self) -> i32 {
        match self.result {
            Outcome::Valid => 0,
            Outcome::Invalid => 1,
        }
    }
}

mod one_item_list {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Outcome;

    pub fn serialize<S: Serializer>(outcome: &Outcome, serializer: S) -> Result<S::Ok, S::Error> {
        [outcome].serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Outcome, D::Error> {
        let [outcome] = <[Outcome; 1]>::deserialize(deserializer)?;
        Ok(outcome)
    }
}
