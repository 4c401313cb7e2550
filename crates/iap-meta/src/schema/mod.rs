//! Typed view of `.ai-iap/config.json`
//!
//! - [`tool`] - AI tool consumers and their output capabilities
//! - [`language`] - language bundles with nested frameworks, structures, processes
//! - [`config`] - the root [`ConfigModel`]

pub mod config;
pub mod language;
pub mod tool;

pub use config::{ConfigModel, EntityCounts};
pub use language::{Framework, GENERAL_LANGUAGE, Language, Process, ProcessKind, Structure};
pub use tool::{CLAUDE_TOOL, CURSOR_TOOL, Tool, ToolOutput};

use serde_json::Value;

/// String view of a raw property; `None` when absent or not a string.
pub(crate) fn str_of(value: &Option<Value>) -> Option<&str> {
    value.as_ref().and_then(Value::as_str)
}

/// Boolean view of a raw property; `None` when absent or not a boolean.
pub(crate) fn bool_of(value: &Option<Value>) -> Option<bool> {
    value.as_ref().and_then(Value::as_bool)
}
