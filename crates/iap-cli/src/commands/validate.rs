//! Validate command implementation

use colored::Colorize;
use iap_core::GeneratorOrchestrator;
use iap_meta::ConfigLoader;
use serde_json::json;

use super::{error_tag, ok_tag, print_finding};
use crate::context::ProjectContext;
use crate::error::Result;

/// Run the validate command, returning the exit code.
///
/// An unreadable or malformed config is reported like any other error
/// finding and exits 1.
pub fn run_validate(ctx: &ProjectContext, json: bool) -> Result<i32> {
    let model = match ConfigLoader::new().load(&ctx.config_path) {
        Ok(model) => model,
        Err(e @ (iap_meta::Error::Parse { .. } | iap_meta::Error::ConfigNotFound { .. })) => {
            if json {
                let out = json!({"valid": false, "error": e.to_string()});
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{} {}", error_tag(), e);
            }
            return Ok(1);
        }
        Err(e) => return Err(e.into()),
    };

    let report = GeneratorOrchestrator::new(&ctx.root, &ctx.settings()?).validate(&model);

    if json {
        let mut out = serde_json::to_value(&report)?;
        out["valid"] = json!(report.is_valid());
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(report.exit_code());
    }

    println!("{} Loaded {}", ok_tag(), ctx.config_path);
    for finding in report.all() {
        print_finding(finding);
    }

    let counts = &report.counts;
    println!(
        "{} {} tools, {} languages, {} frameworks, {} structures, {} processes",
        "Found".dimmed(),
        counts.tools,
        counts.languages,
        counts.frameworks,
        counts.structures,
        counts.processes
    );

    if report.is_valid() {
        println!(
            "{} Validation passed with {} warning(s)",
            ok_tag(),
            report.warnings.len()
        );
    } else {
        println!(
            "{} Validation failed with {} error(s) and {} warning(s)",
            error_tag(),
            report.errors.len(),
            report.warnings.len()
        );
    }

    Ok(report.exit_code())
}
