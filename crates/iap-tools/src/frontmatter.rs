//! YAML-style frontmatter blocks
//!
//! Strings are written as JSON string literals, which YAML reads as
//! double-quoted scalars, so glob patterns like `*.py` need no escaping
//! rules of their own.

#[derive(Debug, Clone, PartialEq)]
enum Value {
    Str(String),
    Bool(bool),
}

/// Ordered `key: value` pairs between `---` fences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    entries: Vec<(&'static str, Value)>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn string(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.entries.push((key, Value::Str(value.into())));
        self
    }

    /// Adds the entry only when `value` is present.
    pub fn maybe_string(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.string(key, value),
            None => self,
        }
    }

    pub fn bool(mut self, key: &'static str, value: bool) -> Self {
        self.entries.push((key, Value::Bool(value)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The fenced block, ending in a newline. Empty when there are no entries.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let mut out = String::from("---\n");
        for (key, value) in &self.entries {
            let rendered = match value {
                Value::Str(s) => serde_json::Value::String(s.clone()).to_string(),
                Value::Bool(b) => b.to_string(),
            };
            out.push_str(key);
            out.push_str(": ");
            out.push_str(&rendered);
            out.push('\n');
        }
        out.push_str("---\n");
        out
    }
}
