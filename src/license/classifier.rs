use tracing::debug;

use crate::config::LicensePolicy;
use crate::models::{Evaluation, Inventory, LicenseStatus, Verdict};

/// Check one license name: permitted first, then the warning tier.
pub fn check_license<'a>(policy: &'a LicensePolicy, license: &str) -> LicenseStatus<'a> {
    if policy.permitted.contains(license) {
        return LicenseStatus::Permitted;
    }
    match policy.warnings.get(license) {
        Some(warning) => LicenseStatus::Warning(warning),
        None => LicenseStatus::NotPermitted,
    }
}

/// Decide whether an artifact with the given licenses may be used.
///
/// - no licenses → rejected
/// - one license → its own status; a warning-tier license yields its configured text
/// - several licenses → permitted when all validate, rejected when none do,
///   otherwise accepted with [`multiple_licenses_warning`]
pub fn classify(policy: &LicensePolicy, artifact: &str, licenses: &[String]) -> Verdict {
    match licenses {
        [] => Verdict::Rejected,
        [license] => match check_license(policy, license) {
            LicenseStatus::Permitted => Verdict::Permitted,
            LicenseStatus::Warning(text) => {
                Verdict::PermittedWithWarning(format!("{}: {}", artifact, text))
            }
            LicenseStatus::NotPermitted => Verdict::Rejected,
        },
        _ => {
            let valid = licenses
                .iter()
                .filter(|l| check_license(policy, l).is_valid())
                .count();

            if valid == licenses.len() {
                Verdict::Permitted
            } else if valid == 0 {
                Verdict::Rejected
            } else {
                Verdict::PermittedWithWarning(multiple_licenses_warning(artifact))
            }
        }
    }
}

/// Disclaimer for an artifact offering several licenses of which only some are allowed.
pub fn multiple_licenses_warning(artifact: &str) -> String {
    format!(
        "Artifact \"{}\" had multiple licenses, not all are permitted but at least one. \
         Typically this means that we can choose between them and since one is permitted, \
         everything is fine but this should be checked manually!",
        artifact
    )
}

/// Classify every artifact of the inventory, keeping inventory order.
pub fn evaluate(policy: &LicensePolicy, inventory: &Inventory) -> Evaluation {
    let verdicts = inventory
        .iter()
        .map(|(artifact, licenses)| {
            let verdict = classify(policy, artifact, licenses);
            debug!(%artifact, ?licenses, %verdict, "classified artifact");
            (artifact.clone(), verdict)
        })
        .collect();

    Evaluation { verdicts }
}
