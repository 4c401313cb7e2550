//! Generate command implementation

use colored::Colorize;
use iap_core::{GenerateOptions, GenerationReport, GeneratorOrchestrator, Selection};
use iap_fs::NormalizedPath;

use super::{error_tag, ok_tag, print_finding};
use crate::cli::GenerateArgs;
use crate::context::ProjectContext;
use crate::error::Result;

/// Run the generate command, returning the exit code.
///
/// Exits 1 when the config is invalid or any tool failed; other fatal
/// problems (unknown ids, missing documents) propagate as errors.
pub fn run_generate(ctx: &ProjectContext, args: GenerateArgs) -> Result<i32> {
    let model = ctx.load_model()?;
    let settings = ctx.settings()?;

    let tools = settings.effective_tools(&args.tools, &model);
    let parallel = settings.parallel && !args.sequential;
    let selection = Selection::new()
        .with_languages(args.languages)
        .with_frameworks(args.frameworks)
        .with_structures(args.structures)
        .with_processes(args.processes)
        .with_tools(tools)
        .with_on_demand(args.on_demand);

    let dest_root = args
        .out
        .as_deref()
        .map(NormalizedPath::new)
        .unwrap_or_else(|| ctx.root.clone());
    let options = GenerateOptions::new(dest_root)
        .with_dry_run(args.dry_run)
        .with_parallel(parallel);

    let orchestrator = GeneratorOrchestrator::new(&ctx.root, &settings);
    let report = match orchestrator.run(&model, &selection, &options) {
        Ok(report) => report,
        Err(iap_core::Error::InvalidConfig { report }) => {
            for finding in report.all() {
                print_finding(finding);
            }
            println!(
                "{} Configuration has {} error(s); nothing was generated",
                error_tag(),
                report.errors.len()
            );
            return Ok(1);
        }
        Err(e) => return Err(e.into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(if report.is_success() { 0 } else { 1 })
}

fn print_report(report: &GenerationReport) {
    for finding in &report.warnings {
        print_finding(finding);
    }

    let verb = if report.dry_run { "would write" } else { "written" };
    for outcome in &report.tools {
        match &outcome.error {
            None => {
                println!(
                    "{} {}: {} file(s)",
                    ok_tag(),
                    outcome.tool,
                    outcome.files.len()
                );
                for file in &outcome.files {
                    println!(
                        "   {} {}",
                        format!("{:<9}", file.status.as_str()).dimmed(),
                        file.path
                    );
                }
            }
            Some(error) => println!("{} {}: {}", error_tag(), outcome.tool, error),
        }
    }

    let failed = report.failed().count();
    if failed == 0 {
        println!(
            "{} {} tool(s) generated, {} file(s) {}",
            ok_tag(),
            report.tools.len(),
            if report.dry_run {
                report.tools.iter().map(|t| t.files.len()).sum::<usize>()
            } else {
                report.files_written()
            },
            verb
        );
    } else {
        println!(
            "{} {} of {} tool(s) failed",
            error_tag(),
            failed,
            report.tools.len()
        );
    }
}
