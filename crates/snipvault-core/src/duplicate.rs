use crate::models::conflict::DuplicateConflicts;
use crate::models::snippet::{Snippet, SnippetId};

/// The fields of a prospective snippet that take part in duplicate checks.
#[derive(Debug, Clone, Copy)]
pub struct DuplicateCandidate<'a> {
    /// Set when the candidate replaces an existing snippet, which is then
    /// never reported as colliding with itself.
    pub id: Option<&'a SnippetId>,
    pub name: &'a str,
    pub normalized_hash: &'a str,
}

impl<'a> DuplicateCandidate<'a> {
    pub fn new(snippet: &'a Snippet, id: Option<&'a SnippetId>) -> Self {
        Self {
            id,
            name: snippet.name(),
            normalized_hash: snippet.normalized_hash(),
        }
    }
}

/// Look for existing snippets that share the candidate's name (ignoring
/// case) or fingerprint. Read-only; both findings are independent.
pub fn check_duplicate(existing: &[Snippet], candidate: &DuplicateCandidate<'_>) -> DuplicateConflicts {
    let name = candidate.name.to_lowercase();
    let others = || {
        existing
            .iter()
            .filter(|s| candidate.id.is_none_or(|id| s.id() != id))
    };

    DuplicateConflicts {
        by_name: others().find(|s| s.name().to_lowercase() == name).cloned(),
        by_content: others()
            .find(|s| s.normalized_hash() == candidate.normalized_hash)
            .cloned(),
    }
}
