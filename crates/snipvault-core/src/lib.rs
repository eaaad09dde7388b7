//! snipvault-core
//!
//! Pure snippet domain: models, normalization, fingerprinting, language
//! heuristics, key-term parsing, duplicate detection and record assembly.
//! No I/O and no logging. Everything here is a function over values.

pub mod builder;
pub mod duplicate;
pub mod error;
pub mod fingerprint;
pub mod key_terms;
pub mod language;
pub mod models;
pub mod normalize;
pub mod seed;
pub mod storage_keys;
