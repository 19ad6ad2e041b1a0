use serde::{Deserialize, Serialize};

/// Snippet - a named unit of stored text
///
/// `name` is the primary key: at most one snippet exists per name, and
/// storing under an existing name replaces its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Unique name of the snippet
    pub name: String,

    /// Text body associated with the name
    pub content: String,
}

impl Snippet {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Check whether the content contains `needle` as a literal, case-sensitive substring
    pub fn contains(&self, needle: &str) -> bool {
        self.content.contains(needle)
    }
}

/// Result of storing a snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOutcome {
    /// The stored `(name, content)` pair
    pub snippet: Snippet,

    /// `true` if a new record was created, `false` if an existing one was updated
    pub created: bool,
}

impl StoreOutcome {
    pub fn created(snippet: Snippet) -> Self {
        Self {
            snippet,
            created: true,
        }
    }

    pub fn updated(snippet: Snippet) -> Self {
        Self {
            snippet,
            created: false,
        }
    }
}
