//! Command implementations
//!
//! Organized into two categories:
//!
//! - `plumbing`: low-level object manipulation (hash-object, cat-file,
//!   write-tree, read-tree)
//! - `porcelain`: user-facing workflows (init, commit, checkout, log,
//!   branch, tag, status)

pub mod plumbing;
pub mod porcelain;
