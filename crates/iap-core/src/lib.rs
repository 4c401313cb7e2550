//! Core orchestration for ai-iap
//!
//! Resolves a user's selection of languages, frameworks, structures,
//! processes, and tools against a validated config, loads the referenced
//! documents, and drives every selected tool's output adapters.

pub mod content;
pub mod error;
pub mod generator;
pub mod report;
pub mod resolver;
pub mod settings;

pub use content::load_content;
pub use error::{Error, Result, SelectionKind};
pub use generator::{GenerateOptions, GeneratorOrchestrator};
pub use report::{GenerationReport, ToolOutcome};
pub use resolver::{ResolvedBundle, Selection, SelectionResolver};
pub use settings::{ContentLayout, GeneratorSettings};
