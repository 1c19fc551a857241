//! Data structures and algorithms
//!
//! - `branch`: branch names and revision name resolution
//! - `log`: commit history traversal
//! - `objects`: object types (blob, tree, commit)

pub mod branch;
pub mod log;
pub mod objects;
