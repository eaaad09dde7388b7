use snipvault_core::builder;
use snipvault_core::duplicate::{DuplicateCandidate, check_duplicate};
use snipvault_core::models::payload::SavePayload;
use snipvault_core::models::snippet::{Snippet, SnippetId};
use snipvault_search::query;
use snipvault_search::stats::{self, LanguageCount};
use snipvault_storage::kv::KeyValueStore;
use snipvault_storage::state::{CollectionKeys, load_collection, save_collection};
use tracing::{debug, info, warn};

use crate::error::LibraryError;
use crate::outcome::SaveOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConflictGate {
    Check,
    Skip,
}

/// The snippet collection for one session, mirrored to a key-value store.
///
/// Loaded once on [`Library::open`]. Every mutation rewrites the whole
/// collection under the current key; write failures are logged and never
/// surface to the caller. If the stored collection could not be read, the
/// library works from the seed set in memory and writes nothing back.
pub struct Library<S: KeyValueStore> {
    store: S,
    keys: CollectionKeys,
    snippets: Vec<Snippet>,
    read_only: bool,
}

impl<S: KeyValueStore> Library<S> {
    pub fn open(store: S) -> Self {
        Self::open_with_keys(store, CollectionKeys::default())
    }

    pub fn open_with_keys(mut store: S, keys: CollectionKeys) -> Self {
        let loaded = load_collection(&mut store, &keys);
        let needs_write = loaded.needs_write();

        let mut library = Self {
            store,
            keys,
            read_only: loaded.is_unreadable(),
            snippets: loaded.snippets,
        };
        if needs_write {
            library.persist();
        }
        library
    }

    /// All snippets, newest insertions first.
    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn get(&self, id: &SnippetId) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.id() == id)
    }

    pub fn search(&self, term: &str, language: Option<&str>) -> Vec<&Snippet> {
        query::search(&self.snippets, term, language)
    }

    pub fn all_languages(&self) -> Vec<String> {
        query::all_languages(&self.snippets)
    }

    pub fn language_stats(&self) -> Vec<LanguageCount> {
        stats::language_stats(&self.snippets)
    }

    /// Save a new or edited snippet unless it collides with another one.
    ///
    /// On a name or content collision nothing is written and
    /// [`SaveOutcome::Conflict`] carries the colliding snippets plus the
    /// candidate that would have been stored.
    pub fn save(&mut self, payload: &SavePayload) -> Result<SaveOutcome, LibraryError> {
        self.save_with(payload, ConflictGate::Check)
    }

    /// Save regardless of collisions. Validation and lookup still apply and
    /// the payload goes through the same normalization as [`Library::save`].
    pub fn force_save(&mut self, payload: &SavePayload) -> Result<SaveOutcome, LibraryError> {
        self.save_with(payload, ConflictGate::Skip)
    }

    /// Remove a snippet by id, keeping the order of the rest.
    pub fn remove(&mut self, id: &SnippetId) -> Option<Snippet> {
        let Some(index) = self.position(id) else {
            debug!(%id, "remove requested for unknown snippet");
            return None;
        };

        let removed = self.snippets.remove(index);
        self.persist();
        info!(%id, name = %removed.name(), "snippet removed");
        Some(removed)
    }

    /// Changes are kept in memory only because the stored collection could
    /// not be read at open.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn save_with(&mut self, payload: &SavePayload, gate: ConflictGate) -> Result<SaveOutcome, LibraryError> {
        let prepared = payload.prepare()?;

        let (candidate, index) = match &payload.id {
            Some(id) => {
                let index = self
                    .position(id)
                    .ok_or_else(|| LibraryError::NotFound(id.clone()))?;
                let updated = builder::update(&self.snippets[index], prepared.to_changes());
                (updated, Some(index))
            }
            None => (builder::build(prepared.to_draft()), None),
        };

        if gate == ConflictGate::Check {
            let conflicts = check_duplicate(
                &self.snippets,
                &DuplicateCandidate::new(&candidate, payload.id.as_ref()),
            );
            if !conflicts.is_empty() {
                info!(
                    name = %candidate.name(),
                    by_name = conflicts.by_name.is_some(),
                    by_content = conflicts.by_content.is_some(),
                    "save held back by duplicate conflict"
                );
                return Ok(SaveOutcome::Conflict {
                    conflicts,
                    candidate,
                    trimmed: prepared.trimmed,
                });
            }
        }

        match index {
            Some(index) => self.snippets[index] = candidate.clone(),
            None => self.snippets.insert(0, candidate.clone()),
        }
        self.persist();

        info!(
            id = %candidate.id(),
            name = %candidate.name(),
            was_new = index.is_none(),
            forced = gate == ConflictGate::Skip,
            "snippet saved"
        );

        Ok(SaveOutcome::Saved {
            snippet: candidate,
            was_new: index.is_none(),
            trimmed: prepared.trimmed,
        })
    }

    fn position(&self, id: &SnippetId) -> Option<usize> {
        self.snippets.iter().position(|s| s.id() == id)
    }

    fn persist(&mut self) {
        if self.read_only {
            debug!(key = %self.keys.current, "store unreadable at open, skipping write");
            return;
        }
        if let Err(e) = save_collection(&mut self.store, &self.keys.current, &self.snippets) {
            warn!(key = %self.keys.current, error = %e, "failed to persist snippets");
        }
    }
}
