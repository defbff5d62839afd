use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of an entry in one of the document's lists.
///
/// Ids generated by this crate are UUID v4 strings, but any string is
/// accepted so that documents written by other tools (which may use
/// timestamps or counters) load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Wraps an existing token.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates an id that does not collide with any of `taken`.
    #[must_use]
    pub fn generate<'a>(taken: impl IntoIterator<Item = &'a Self> + Clone) -> Self {
        loop {
            let candidate = Self(Uuid::new_v4().to_string());
            if !taken.clone().into_iter().any(|id| id == &candidate) {
                return candidate;
            }
        }
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
