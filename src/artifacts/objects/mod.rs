//! Object types and operations
//!
//! All content is stored as objects identified by SHA-1 hashes. There are
//! three types:
//!
//! - **Blob**: raw file bytes
//! - **Tree**: sorted directory listing of (type, id, name) entries
//! - **Commit**: tree reference, optional parent, and a message
//!
//! On disk every object is stored as `<type>\0<payload>` under a key that
//! is the hex digest of that record.

pub mod commit;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
