//! Command implementations for iap-cli

pub mod generate;
pub mod list;
pub mod validate;

pub use generate::run_generate;
pub use list::run_list;
pub use validate::run_validate;

use colored::Colorize;
use iap_meta::{Finding, Severity};

/// `[ERROR] <path>: <message>` or `[WARNING] <path>: <message>`.
pub(crate) fn print_finding(finding: &Finding) {
    let tag = match finding.severity {
        Severity::Error => finding.severity.tag().red().bold(),
        Severity::Warning => finding.severity.tag().yellow().bold(),
    };
    println!("{} {}: {}", tag, finding.path, finding.message);
}

pub(crate) fn ok_tag() -> colored::ColoredString {
    "[OK]".green().bold()
}

pub(crate) fn error_tag() -> colored::ColoredString {
    "[ERROR]".red().bold()
}
