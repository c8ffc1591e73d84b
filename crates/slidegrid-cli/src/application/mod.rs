//! Application layer use cases for the inspector.
//!
//! Use cases here turn parser output into reports.  They do no file or
//! terminal I/O themselves; `main.rs` reads the inputs and prints the
//! returned text.
//!
//! - **`inspect`** – Render resolved cells, summarize presets, batch-check
//!   description lists.

pub mod inspect;
