//! Core repository components
//!
//! This module contains the fundamental building blocks of a repository:
//!
//! - `database`: Content-addressed object store for blobs, trees, and commits
//! - `refs`: Reference management (branches, HEAD, tags)
//! - `repository`: High-level repository handle and coordination
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod refs;
pub mod repository;
pub mod workspace;
