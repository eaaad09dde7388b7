use serde::Serialize;
use snipvault_core::models::conflict::DuplicateConflicts;
use snipvault_core::models::snippet::Snippet;
use ts_rs::TS;

/// Result of a save that got past validation.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "status", rename_all = "camelCase")]
#[ts(export)]
pub enum SaveOutcome {
    /// The snippet was written to the collection.
    Saved {
        snippet: Snippet,
        #[serde(rename = "wasNew")]
        was_new: bool,
        trimmed: bool,
    },
    /// Nothing was written; the caller may retry with a forced save.
    Conflict {
        conflicts: DuplicateConflicts,
        candidate: Snippet,
        trimmed: bool,
    },
}

impl SaveOutcome {
    pub fn snippet(&self) -> &Snippet {
        match self {
            Self::Saved { snippet, .. } => snippet,
            Self::Conflict { candidate, .. } => candidate,
        }
    }

    pub fn conflicts(&self) -> Option<&DuplicateConflicts> {
        match self {
            Self::Saved { .. } => None,
            Self::Conflict { conflicts, .. } => Some(conflicts),
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }

    /// Trimming or normalization changed the submitted text.
    pub fn trimmed(&self) -> bool {
        match self {
            Self::Saved { trimmed, .. } | Self::Conflict { trimmed, .. } => *trimmed,
        }
    }
}
