use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::fingerprint::fingerprint;
use crate::normalize::normalize;

/// Opaque snippet identifier.
///
/// Fresh ids are UUID v4 strings. Ids read back from storage are kept
/// verbatim, whatever shape an earlier writer gave them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SnippetId(String);

impl SnippetId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SnippetId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SnippetId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, optionally language-tagged block of stored code.
///
/// Fields are only writable through [`crate::builder`], which keeps
/// `normalized_hash` in step with `code` and never touches `id` or
/// `created_at` after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Snippet {
    pub(crate) id: SnippetId,
    pub(crate) name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub(crate) description: Option<String>,
    pub(crate) code: String,
    #[serde(default)]
    pub(crate) key_terms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub(crate) language: Option<String>,
    pub(crate) normalized_hash: String,
    pub(crate) created_at: jiff::Timestamp,
    pub(crate) updated_at: jiff::Timestamp,
}

impl Snippet {
    pub fn id(&self) -> &SnippetId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn key_terms(&self) -> &[String] {
        &self.key_terms
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn normalized_hash(&self) -> &str {
        &self.normalized_hash
    }

    pub fn created_at(&self) -> jiff::Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> jiff::Timestamp {
        self.updated_at
    }

    /// Bring a record read from storage back in line with the model invariants.
    ///
    /// Re-normalizes `code`, recomputes a stale `normalized_hash`, and turns
    /// empty `language`/`description` strings into `None`. Returns `true` if
    /// anything changed. Records with no code left after normalization keep
    /// their original text so nothing the user stored is lost.
    pub fn repair(&mut self) -> bool {
        let mut changed = false;

        let normalized = normalize(&self.code);
        if !normalized.is_empty() && normalized != self.code {
            self.code = normalized;
            changed = true;
        }

        let hash = fingerprint(&normalize(&self.code));
        if hash != self.normalized_hash {
            self.normalized_hash = hash;
            changed = true;
        }

        for field in [&mut self.language, &mut self.description] {
            if field.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *field = None;
                changed = true;
            }
        }

        changed
    }
}
