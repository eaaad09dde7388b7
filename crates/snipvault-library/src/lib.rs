//! snipvault-library
//!
//! The session-owned snippet collection and the save flow built on the pure
//! core: validate, build or update, check duplicates, persist.

pub mod error;
pub mod library;
pub mod outcome;
pub mod session;
