//! slidegrid-cli library entry point.
//!
//! Re-exports all public modules so that the binary entry point in `main.rs`
//! and the unit tests share the same module tree.
//!
//! - **`application`** – Inspection use cases: render parsed cells, summarize
//!   the preset catalogue, batch-check persisted descriptions.
//! - **`infrastructure`** – File-system adapters (the TOML config file).

pub mod application;
pub mod infrastructure;
