//! Error taxonomy for the object store and name resolution.
//!
//! Absence of a reference is a normal state and is modeled as `Option`,
//! not as an error. The variants here cover the remaining failure modes:
//! missing objects, wrong object types, corrupted serialized data, and
//! names that resolve to nothing.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("object {0} not found")]
    NotFound(ObjectId),
    #[error("object {oid} is a {actual}, not a {expected}")]
    TypeMismatch {
        oid: ObjectId,
        expected: ObjectType,
        actual: ObjectType,
    },
    #[error("malformed tree object {oid}: {reason}")]
    MalformedTree { oid: ObjectId, reason: String },
    #[error("malformed commit object {oid}: {reason}")]
    MalformedCommit { oid: ObjectId, reason: String },
    #[error("unknown revision name '{0}'")]
    UnknownName(String),
}
