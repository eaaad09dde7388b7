use snipvault_core::models::snippet::Snippet;
use snipvault_core::seed::seed_snippets;
use snipvault_core::storage_keys;
use tracing::{debug, error, info, warn};

use crate::error::StorageError;
use crate::kv::KeyValueStore;

/// Where the collection lives: the key written today plus keys used by
/// earlier releases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionKeys {
    pub current: String,
    pub legacy: Vec<String>,
}

impl Default for CollectionKeys {
    fn default() -> Self {
        Self {
            current: storage_keys::COLLECTION.to_string(),
            legacy: storage_keys::legacy_collections(),
        }
    }
}

/// Where a loaded collection came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionSource {
    Current,
    /// Read from a legacy key and copied under the current key.
    Legacy { key: String },
    /// Nothing usable was stored; the built-in starter set was used.
    Seed,
    /// A collection key could not be read. The starter set is served from
    /// memory and must not be written over whatever the store still holds.
    Unreadable { key: String },
}

#[derive(Debug, Clone)]
pub struct LoadedCollection {
    pub snippets: Vec<Snippet>,
    pub source: CollectionSource,
    /// Records that needed [`Snippet::repair`] on the way in.
    pub repaired: usize,
}

impl LoadedCollection {
    /// Whether the in-memory collection differs from what sits under the
    /// current key and should be written back.
    pub fn needs_write(&self) -> bool {
        match self.source {
            CollectionSource::Current => self.repaired > 0,
            CollectionSource::Legacy { .. } | CollectionSource::Seed => true,
            CollectionSource::Unreadable { .. } => false,
        }
    }

    /// Whether writing this collection could clobber data the store failed to return.
    pub fn is_unreadable(&self) -> bool {
        matches!(self.source, CollectionSource::Unreadable { .. })
    }
}

/// Load the snippet collection. Never fails.
///
/// Reads the current key, then each legacy key in order (migrating the first
/// one found), and parses the bytes as a JSON array. Missing, empty or
/// malformed data falls back to the seed collection. A read error on any key
/// stops the chain: the seed is served as [`CollectionSource::Unreadable`]
/// and no key is migrated or removed.
pub fn load_collection<S: KeyValueStore + ?Sized>(
    store: &mut S,
    keys: &CollectionKeys,
) -> LoadedCollection {
    let mut source = CollectionSource::Current;
    let mut raw = match read_non_empty(store, &keys.current) {
        Ok(raw) => raw,
        Err(e) => return unreadable(&keys.current, &e),
    };

    if raw.is_none() {
        for key in &keys.legacy {
            match read_non_empty(store, key) {
                Ok(Some(bytes)) => {
                    migrate_legacy(store, &keys.current, key, &bytes);
                    source = CollectionSource::Legacy { key: key.clone() };
                    raw = Some(bytes);
                    break;
                }
                Ok(None) => {}
                Err(e) => return unreadable(key, &e),
            }
        }
    }

    let Some(bytes) = raw else {
        debug!(key = %keys.current, "no stored collection, using seed snippets");
        return seeded(CollectionSource::Seed);
    };

    match serde_json::from_slice::<Vec<Snippet>>(&bytes) {
        Ok(mut snippets) => {
            let mut repaired = 0;
            for snippet in &mut snippets {
                if snippet.repair() {
                    repaired += 1;
                }
            }
            if repaired > 0 {
                warn!(repaired, "repaired stored snippets with stale fields");
            }
            info!(count = snippets.len(), ?source, "snippet collection loaded");
            LoadedCollection {
                snippets,
                source,
                repaired,
            }
        }
        Err(e) => {
            error!(error = %e, ?source, "failed to parse stored snippets, using seed snippets");
            seeded(CollectionSource::Seed)
        }
    }
}

/// Serialize the whole collection and write it under `key`.
pub fn save_collection<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    snippets: &[Snippet],
) -> Result<(), StorageError> {
    let body = serde_json::to_vec(snippets)?;
    store.set(key, &body)?;
    debug!(key, count = snippets.len(), "snippet collection saved");
    Ok(())
}

fn seeded(source: CollectionSource) -> LoadedCollection {
    LoadedCollection {
        snippets: seed_snippets(),
        source,
        repaired: 0,
    }
}

fn unreadable(key: &str, e: &StorageError) -> LoadedCollection {
    error!(key, error = %e, "failed to read stored snippets, serving seed snippets without saving");
    seeded(CollectionSource::Unreadable { key: key.to_string() })
}

/// Read `key`, treating an empty value as missing.
fn read_non_empty<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
    Ok(store.get(key)?.filter(|bytes| !bytes.is_empty()))
}

/// Copy a legacy value under the current key and drop the legacy key.
///
/// Failures are logged only; the caller keeps working with the bytes it
/// already read. The legacy key is kept if the copy did not succeed.
fn migrate_legacy<S: KeyValueStore + ?Sized>(store: &mut S, current: &str, legacy: &str, bytes: &[u8]) {
    if let Err(e) = store.set(current, bytes) {
        warn!(from = legacy, to = current, error = %e, "failed to migrate legacy snippets");
        return;
    }
    if let Err(e) = store.remove(legacy) {
        warn!(key = legacy, error = %e, "failed to remove legacy snippets key");
        return;
    }
    info!(from = legacy, to = current, "migrated legacy snippet collection");
}
