//! snipvault-search
//!
//! Read-only queries over an in-memory snippet collection.

pub mod query;
pub mod stats;
