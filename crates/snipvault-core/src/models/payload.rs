use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::snippet::SnippetId;
use crate::builder::{SnippetChanges, SnippetDraft};
use crate::error::CoreError;
use crate::key_terms::format_key_terms;
use crate::language::detect_language;
use crate::normalize::normalize;

/// A save request as submitted by the caller, before any cleanup.
///
/// `id` selects an existing snippet to update; without it a new snippet is
/// created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SavePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub id: Option<SnippetId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub description: Option<String>,
    pub code: String,
    /// Comma-separated key terms, exactly as typed.
    #[serde(default)]
    pub key_terms_raw: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub language: Option<String>,
}

/// Cleaned-up fields of a [`SavePayload`], ready to build or update a snippet.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSnippet {
    pub name: String,
    pub description: Option<String>,
    pub code: String,
    pub key_terms: Vec<String>,
    pub language: Option<String>,
    /// Trimming the name or normalizing the code changed what was submitted.
    pub trimmed: bool,
}

impl SavePayload {
    /// Validate and canonicalize the payload.
    ///
    /// The name is trimmed and the code normalized; either ending up empty is
    /// a validation error. A missing or blank language is filled in by
    /// [`detect_language`]. Outer whitespace around the code alone does not
    /// count as a change for [`PreparedSnippet::trimmed`].
    pub fn prepare(&self) -> Result<PreparedSnippet, CoreError> {
        let name = self.name.trim();
        let code = normalize(&self.code);
        let trimmed = name != self.name || code != self.code.trim();

        if name.is_empty() {
            return Err(CoreError::EmptyName);
        }
        if code.is_empty() {
            return Err(CoreError::EmptyCode);
        }

        let language = self
            .language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .or_else(|| detect_language(&code).map(str::to_string));

        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(PreparedSnippet {
            name: name.to_string(),
            description,
            code,
            key_terms: format_key_terms(&self.key_terms_raw),
            language,
            trimmed,
        })
    }
}

impl PreparedSnippet {
    pub fn to_draft(&self) -> SnippetDraft {
        SnippetDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            code: self.code.clone(),
            key_terms: self.key_terms.clone(),
            language: self.language.clone(),
        }
    }

    /// Every editable field, replacing whatever the existing snippet holds.
    pub fn to_changes(&self) -> SnippetChanges {
        SnippetChanges {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            code: Some(self.code.clone()),
            key_terms: Some(self.key_terms.clone()),
            language: Some(self.language.clone()),
        }
    }
}
