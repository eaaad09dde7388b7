//! snipvault-storage
//!
//! Key-value persistence for the snippet collection: the store abstraction,
//! in-memory and directory-backed stores, and collection load/save with
//! legacy-key migration.

pub mod dir_store;
pub mod error;
pub mod kv;
pub mod state;
