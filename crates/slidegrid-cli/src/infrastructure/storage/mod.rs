//! Storage infrastructure: configuration file persistence.
//!
//! The `config` sub-module reads the TOML configuration file from the
//! platform-appropriate directory (or an explicit path), writes a default
//! file on request, and supplies defaults when no file exists yet.

pub mod config;
