//! Language bundles - the `languages` map of config.json
//!
//! A language owns its frameworks (which own structures) and its process
//! guides. Scalar properties are kept as raw JSON values so a mistyped one
//! becomes a validation finding rather than a load failure.
//!
//! # Example
//!
//! ```json
//! "python": {
//!   "name": "Python",
//!   "globs": "*.py",
//!   "alwaysApply": false,
//!   "description": "Python rules",
//!   "files": ["architecture", "code-style"],
//!   "frameworks": {
//!     "django": {
//!       "name": "Django", "file": "django", "category": "Web Framework",
//!       "description": "Django conventions",
//!       "structures": { "modular": { "name": "Modular", "file": "django-modular" } }
//!     }
//!   },
//!   "processes": {
//!     "migrations": { "name": "Migrations", "file": "database-migrations", "type": "permanent" }
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{bool_of, str_of};

/// The language whose rules apply to every project.
pub const GENERAL_LANGUAGE: &str = "general";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub globs: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_apply: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Value>,
    /// Obsolete selection flag from older config versions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Value>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub frameworks: IndexMap<String, Framework>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub processes: IndexMap<String, Process>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Language {
    /// The glob pattern, if `globs` is a string.
    pub fn globs(&self) -> Option<&str> {
        str_of(&self.globs)
    }

    /// `alwaysApply`, treating anything but `true` as false.
    pub fn always_apply(&self) -> bool {
        bool_of(&self.always_apply).unwrap_or(false)
    }

    pub fn description(&self) -> Option<&str> {
        str_of(&self.description)
    }

    /// String entries of `files`; empty if `files` is not an array.
    pub fn files(&self) -> Vec<&str> {
        self.files
            .as_ref()
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        str_of(&self.name).unwrap_or(id)
    }
}

/// Framework-specific rules nested under a language.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Framework {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub structures: IndexMap<String, Structure>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Framework {
    pub fn file(&self) -> Option<&str> {
        str_of(&self.file)
    }

    pub fn category(&self) -> Option<&str> {
        str_of(&self.category)
    }

    pub fn description(&self) -> Option<&str> {
        str_of(&self.description)
    }
}

/// Folder/architecture convention that overrides its framework's defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Structure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Structure {
    pub fn file(&self) -> Option<&str> {
        str_of(&self.file)
    }

    pub fn description(&self) -> Option<&str> {
        str_of(&self.description)
    }
}

/// Whether a process guide is part of the default AI context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessKind {
    /// Recurring guide, always generated
    Permanent,
    /// One-time setup guide, generated only on request
    #[serde(rename = "ondemand")]
    OnDemand,
}

impl ProcessKind {
    /// Parse a `type` value; `on-demand` is accepted as a spelling of `ondemand`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "permanent" => Some(Self::Permanent),
            "ondemand" | "on-demand" => Some(Self::OnDemand),
            _ => None,
        }
    }

    /// Directory name below the processes root.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Permanent => "permanent",
            Self::OnDemand => "ondemand",
        }
    }
}

impl std::fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task guide (CI setup, auth setup, migrations, ...).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub process_type: Option<Value>,
    #[serde(default, rename = "loadIntoAI", skip_serializing_if = "Option::is_none")]
    pub load_into_ai: Option<Value>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Process {
    pub fn file(&self) -> Option<&str> {
        str_of(&self.file)
    }

    pub fn description(&self) -> Option<&str> {
        str_of(&self.description)
    }

    /// The `type` property, if it names a known kind.
    pub fn declared_kind(&self) -> Option<ProcessKind> {
        str_of(&self.process_type).and_then(ProcessKind::parse)
    }

    /// Classification: a recognised `type`, else `loadIntoAI`, else permanent.
    pub fn kind(&self) -> ProcessKind {
        match (self.declared_kind(), bool_of(&self.load_into_ai)) {
            (Some(kind), _) => kind,
            (None, Some(false)) => ProcessKind::OnDemand,
            _ => ProcessKind::Permanent,
        }
    }
}
