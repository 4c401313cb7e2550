//! Shared test utilities for the ai-iap workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`] - canned tool and language definitions
//! - [`project`] - [`TestProject`] builder for a project with `.ai-iap/`

pub mod fixtures;
pub mod project;

pub use project::TestProject;
