use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{CheckResult, Evaluation, Inventory, Outcome, Verdict};

/// Render the console report: inventory dump, warnings, and the final banner.
pub fn render(
    inventory: &Inventory,
    evaluation: &Evaluation,
    result: &CheckResult,
    verbose: bool,
) {
    println!(
        "All artifacts and their licenses:\n\n{}\n",
        format_artifacts(inventory, 0)
    );

    if verbose {
        render_table(inventory, evaluation);
        println!();
    }

    if !result.warnings.is_empty() {
        let warnings = format!("Warnings:\n{}", format_warnings(&result.warnings));
        println!("{}\n", warnings.as_str().bright_yellow());
    }

    match result.result {
        Outcome::Invalid => {
            println!(
                "{}\n\n{}",
                "Some dependencies do have non-permitted licenses:".bright_red(),
                format_artifacts(&result.restricted_artifacts, 0)
            );
        }
        Outcome::Valid => {
            println!("{}", "All dependencies permitted.".bright_green());
        }
    }
}

/// YAML-like listing of artifacts and their licenses, indented by `indent` levels.
pub fn format_artifacts(artifacts: &Inventory, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    let mut out = String::new();
    for (artifact, licenses) in artifacts {
        out.push_str(&format!("{}{}:\n", pad, artifact));
        for license in licenses {
            out.push_str(&format!("{} - {}\n", pad, license));
        }
    }
    out
}

fn format_warnings(warnings: &[String]) -> String {
    warnings.iter().map(|w| format!(" - {}\n", w)).collect()
}

fn render_table(inventory: &Inventory, evaluation: &Evaluation) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Artifact").add_attribute(Attribute::Bold),
            Cell::new("Licenses").add_attribute(Attribute::Bold),
            Cell::new("Verdict").add_attribute(Attribute::Bold),
        ]);

    for (artifact, verdict) in &evaluation.verdicts {
        let licenses = inventory
            .get(artifact)
            .map(|l| l.join(", "))
            .unwrap_or_default();

        let (verdict_str, verdict_color) = match verdict {
            Verdict::Permitted => ("✓ permitted", Color::Green),
            Verdict::PermittedWithWarning(_) => ("⚠ warning", Color::Yellow),
            Verdict::Rejected => ("✗ rejected", Color::Red),
        };

        table.add_row(vec![
            Cell::new(artifact),
            Cell::new(if licenses.is_empty() { "(none)" } else { licenses.as_str() }),
            Cell::new(verdict_str)
                .fg(verdict_color)
                .set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{}", table);
}
