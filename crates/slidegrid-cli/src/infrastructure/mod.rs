//! Infrastructure layer for the inspector.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `slidegrid_core`, but MUST NOT be imported by the `application` layer.

pub mod storage;
