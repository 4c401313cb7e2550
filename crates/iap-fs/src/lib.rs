//! Filesystem primitives for the ai-iap rule generator
//!
//! Provides forward-slash normalized paths, atomic writes, content
//! checksums, and format-detecting config loading.

pub mod checksum;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::IapPath;
pub use error::{Error, Result};
pub use io::WriteOutcome;
pub use path::{NormalizedPath, validate_relative_path};
