//! Output rendering for lint results and skipped runs.
//!
//! Supports `human` (default) and `json` outputs. Human mode prints the
//! success line to stdout and violation reports to stderr; JSON mode prints
//! one document to stdout with a top-level summary.

use crate::config::AbsentReason;
use crate::models::Report;
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && utils::colors_enabled()
}

/// Operator message for a skipped run. `config` names the config file.
pub fn skip_message(reason: AbsentReason, config: &str) -> String {
    match reason {
        AbsentReason::NotFound => format!(
            "{} {} not found. Skipping category validation.",
            utils::warning_prefix(),
            config
        ),
        AbsentReason::Malformed => format!(
            "{} {} does not contain a valid 'categories' array.",
            utils::warning_prefix(),
            config
        ),
    }
}

/// Print the skip notice. A missing file is reported on stdout, a malformed
/// one on stderr.
pub fn print_skip(reason: AbsentReason, config: &str, output: &str) {
    match output {
        "json" => println!("{}", to_pretty(&compose_skip_json(reason))),
        _ => match reason {
            AbsentReason::NotFound => println!("{}", skip_message(reason, config)),
            AbsentReason::Malformed => eprintln!("{}", skip_message(reason, config)),
        },
    }
}

/// Print lint results in the requested format.
pub fn print_report(res: &Report, config: &str, output: &str) {
    match output {
        "json" => println!("{}", to_pretty(&compose_report_json(res))),
        _ => {
            let color = use_colors(output);
            if res.passed() {
                let msg = "All categories validated successfully.";
                if color {
                    println!("{}", msg.green());
                } else {
                    println!("{}", msg);
                }
            } else {
                eprint!("{}", render_violations(res, config, color));
            }
        }
    }
}

/// Compose the human violation report (pure) for testing purposes.
pub fn render_violations(res: &Report, config: &str, color: bool) -> String {
    let header = "Category validation failed!";
    let mut out = String::new();
    out.push('\n');
    if color {
        out.push_str(&header.red().bold().to_string());
    } else {
        out.push_str(header);
    }
    out.push_str("\n\n");
    out.push_str(&format!(
        "The following files use categories not listed in {}:\n\n",
        config
    ));
    for v in &res.violations {
        let file = if color {
            v.file.bold().to_string()
        } else {
            v.file.clone()
        };
        out.push_str(&format!("  {}: '{}'\n", file, v.category));
    }
    out.push_str(&format!(
        "\nPlease add these categories to {} or remove them from the documents.\n\n",
        config
    ));
    out
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(res: &Report) -> JsonVal {
    json!({
        "status": if res.passed() { "ok" } else { "failed" },
        "violations": res.violations,
        "summary": res.summary,
    })
}

/// Compose the JSON document for a skipped run.
pub fn compose_skip_json(reason: AbsentReason) -> JsonVal {
    json!({
        "status": "skipped",
        "reason": match reason {
            AbsentReason::NotFound => "not_found",
            AbsentReason::Malformed => "malformed",
        },
        "violations": [],
        "summary": { "files": 0, "violations": 0 },
    })
}

fn to_pretty(v: &JsonVal) -> String {
    serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
}
