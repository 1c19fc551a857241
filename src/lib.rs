//! A minimal version-control engine.
//!
//! Snapshots a directory tree into a content-addressable object store,
//! links snapshots into a single-parent commit history, and moves the
//! working directory between snapshots by name or object id.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
