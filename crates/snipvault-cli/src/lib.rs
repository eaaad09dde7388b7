//! snipvault-cli library root.
//!
//! Exposes argument parsing, configuration and command execution so
//! integration tests can drive them against an in-memory store without
//! spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
