use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::snippet::Snippet;

/// Existing snippets that collide with a candidate.
///
/// A conflict is advisory: the caller decides whether to force the save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DuplicateConflicts {
    /// First other snippet whose name matches, ignoring case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub by_name: Option<Snippet>,
    /// First other snippet with the same fingerprint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub by_content: Option<Snippet>,
}

impl DuplicateConflicts {
    pub fn is_empty(&self) -> bool {
        self.by_name.is_none() && self.by_content.is_none()
    }
}
