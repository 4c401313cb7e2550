//! Config model and schema validation for ai-iap.
//!
//! `.ai-iap/config.json` describes which AI tools, languages, frameworks,
//! structures, and process guides exist. This crate deserializes it into a
//! read-only [`ConfigModel`] and checks it with the [`SchemaValidator`].
//!
//! Loading is purely structural. Everything semantic (missing required
//! properties, output-mode exclusivity, `alwaysApply` consistency) is a
//! [`Finding`] produced by validation, so one run reports every problem.

pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use error::{Error, Result};
pub use loader::ConfigLoader;
pub use schema::{
    CLAUDE_TOOL, CURSOR_TOOL, ConfigModel, EntityCounts, Framework, GENERAL_LANGUAGE, Language,
    Process, ProcessKind, Structure, Tool, ToolOutput,
};
pub use validation::{Finding, ReportBuilder, SchemaValidator, Severity, ValidationReport};
