//! Output adapters for ai-iap.
//!
//! Turns an ordered list of resolved content references into the files a
//! specific AI tool reads.
//!
//! # Architecture
//!
//! Each [`OutputAdapter`] is a strategy for one output shape:
//!
//! 1. [`SingleFileAdapter`] - concatenates everything into `outputFile`,
//!    optionally with a frontmatter block per language section.
//! 2. [`DirectoryAdapter`] - one file per reference below `outputDir`,
//!    or one `skillFilename` per unit directory for skill-style tools.
//!
//! The [`ToolDispatcher`] picks adapters from the tool's resolved
//! [`iap_meta::ToolOutput`], never from its name, so a new tool is a config
//! entry rather than a code change.

pub mod adapter;
pub mod content;
pub mod directory;
pub mod dispatcher;
pub mod error;
pub mod frontmatter;
pub mod single_file;

pub use adapter::{CancelToken, EmitContext, FileOutcome, FileStatus, OutputAdapter, OutputFile, ToolTarget};
pub use content::{ContentKind, ContentRef, ContentStore, ToolBundle};
pub use directory::DirectoryAdapter;
pub use dispatcher::ToolDispatcher;
pub use error::{Error, Result};
pub use frontmatter::Frontmatter;
pub use single_file::SingleFileAdapter;
