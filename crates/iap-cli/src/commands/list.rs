//! List command implementation

use colored::Colorize;
use iap_meta::ProcessKind;

use crate::cli::ListKind;
use crate::context::ProjectContext;
use crate::error::Result;

pub fn run_list(ctx: &ProjectContext, kind: ListKind) -> Result<i32> {
    let model = ctx.load_model()?;

    match kind {
        ListKind::Tools => {
            println!("{}", "Configured Tools".bold());
            for (id, tool) in model.tools() {
                let target = tool
                    .output_file()
                    .into_iter()
                    .chain(tool.output_dir())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!(
                    "  {} {:<24} {} ({})",
                    format!("{id:<12}").green(),
                    tool.name().unwrap_or(id),
                    tool.output().label().cyan(),
                    target.dimmed()
                );
            }
        }
        ListKind::Languages => {
            println!("{}", "Configured Languages".bold());
            for (id, language) in model.languages() {
                println!(
                    "  {} {:<24} {}",
                    format!("{id:<12}").green(),
                    language.display_name(id),
                    language.globs().unwrap_or("-").dimmed()
                );
                for (framework_id, framework) in &language.frameworks {
                    println!(
                        "    - {} {}",
                        framework_id.cyan(),
                        framework.category().unwrap_or("").dimmed()
                    );
                    for structure_id in framework.structures.keys() {
                        println!("        * {structure_id}");
                    }
                }
            }
        }
        ListKind::Processes => {
            println!("{}", "Configured Processes".bold());
            for (language_id, language) in model.languages() {
                for (id, process) in &language.processes {
                    let kind = match process.kind() {
                        ProcessKind::Permanent => process.kind().as_str().green(),
                        ProcessKind::OnDemand => process.kind().as_str().yellow(),
                    };
                    println!("  {:<12} {:<32} {}", language_id, id, kind);
                }
            }
        }
    }

    let counts = model.counts();
    println!();
    println!(
        "{} {} tools, {} languages, {} processes",
        "Total:".dimmed(),
        counts.tools,
        counts.languages,
        counts.processes
    );
    Ok(0)
}
