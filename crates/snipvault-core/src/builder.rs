//! Assembly of snippet records.
//!
//! Neither [`build`] nor [`update`] checks for duplicates or persists
//! anything; that is the save flow's job.

use jiff::Timestamp;

use crate::fingerprint::fingerprint;
use crate::models::snippet::{Snippet, SnippetId};
use crate::normalize::normalize;

/// Fields for a snippet that does not exist yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnippetDraft {
    pub name: String,
    pub description: Option<String>,
    pub code: String,
    pub key_terms: Vec<String>,
    pub language: Option<String>,
}

/// Edits to merge onto an existing snippet. `None` leaves a field alone;
/// for the optional fields `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnippetChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub code: Option<String>,
    pub key_terms: Option<Vec<String>>,
    pub language: Option<Option<String>>,
}

pub fn build(draft: SnippetDraft) -> Snippet {
    build_at(draft, Timestamp::now())
}

/// Create a snippet with a fresh id, stamped `created_at == updated_at == now`.
pub fn build_at(draft: SnippetDraft, now: Timestamp) -> Snippet {
    let code = normalize(&draft.code);
    Snippet {
        id: SnippetId::generate(),
        name: draft.name,
        description: non_empty(draft.description),
        normalized_hash: fingerprint(&code),
        code,
        key_terms: draft.key_terms,
        language: non_empty(draft.language),
        created_at: now,
        updated_at: now,
    }
}

pub fn update(existing: &Snippet, changes: SnippetChanges) -> Snippet {
    update_at(existing, changes, Timestamp::now())
}

/// Merge `changes` onto a copy of `existing`, recompute the fingerprint and
/// stamp `updated_at`. `id` and `created_at` are carried over untouched.
pub fn update_at(existing: &Snippet, changes: SnippetChanges, now: Timestamp) -> Snippet {
    let mut next = existing.clone();

    if let Some(name) = changes.name {
        next.name = name;
    }
    if let Some(description) = changes.description {
        next.description = non_empty(description);
    }
    if let Some(code) = changes.code {
        next.code = normalize(&code);
    }
    if let Some(key_terms) = changes.key_terms {
        next.key_terms = key_terms;
    }
    if let Some(language) = changes.language {
        next.language = non_empty(language);
    }

    next.normalized_hash = fingerprint(&normalize(&next.code));
    next.updated_at = now;
    next
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
