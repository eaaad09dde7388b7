//! Key conventions for the persisted snippet collection.
//!
//! The whole collection lives under one key as a JSON array. Older builds
//! wrote it under different keys; those are read once and migrated.

/// Key the collection is read from and written to.
pub const COLLECTION: &str = "code-snippet-playground:v1";

/// Keys used by earlier releases, checked in order when [`COLLECTION`] is empty.
pub const LEGACY_COLLECTIONS: &[&str] = &["ai-snippet-manager:v1"];

pub fn legacy_collections() -> Vec<String> {
    LEGACY_COLLECTIONS.iter().map(|k| k.to_string()).collect()
}
