use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::StoreError;
use anyhow::Context;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::path::{Path, PathBuf};

/// Content-addressed object store
///
/// A flat key/value store under the `objects` directory. Each record is
/// the object type tag, a NUL byte, and the raw payload; its key is the
/// hex-encoded SHA-1 digest of that record. Records are immutable and the
/// store is append-only: storing identical content twice is a no-op.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Hash a payload under a type tag and store the record
    ///
    /// Returns the object id whether or not the record already existed.
    pub fn put(&self, payload: &[u8], object_type: ObjectType) -> anyhow::Result<ObjectId> {
        let record = Self::build_record(payload, object_type);

        let mut hasher = Sha1::new();
        hasher.update(&record);
        let oid = ObjectId::try_parse(format!("{:x}", hasher.finalize()))?;

        let object_path = self.object_path(&oid);
        if !object_path.exists() {
            std::fs::create_dir_all(&self.path).with_context(|| {
                format!("unable to create objects directory {}", self.path.display())
            })?;
            std::fs::write(&object_path, &record).with_context(|| {
                format!("unable to write object file {}", object_path.display())
            })?;
        }

        Ok(oid)
    }

    /// Load the payload of a stored object
    ///
    /// With `expected_type` given, a stored record of any other type fails
    /// with [`StoreError::TypeMismatch`]; with `None`, any type is
    /// returned (raw inspection). A missing key fails with
    /// [`StoreError::NotFound`].
    pub fn get(
        &self,
        oid: &ObjectId,
        expected_type: Option<ObjectType>,
    ) -> anyhow::Result<Bytes> {
        let (actual_type, payload) = self.read_record(oid)?;

        if let Some(expected) = expected_type
            && expected != actual_type
        {
            return Err(StoreError::TypeMismatch {
                oid: oid.clone(),
                expected,
                actual: actual_type,
            }
            .into());
        }

        Ok(payload)
    }

    /// Read the type tag of a stored object without interpreting the payload
    pub fn object_type(&self, oid: &ObjectId) -> anyhow::Result<ObjectType> {
        let (object_type, _) = self.read_record(oid)?;
        Ok(object_type)
    }

    /// Load and parse a commit object
    pub fn load_commit(&self, oid: &ObjectId) -> anyhow::Result<Commit> {
        let payload = self.get(oid, Some(ObjectType::Commit))?;
        Commit::deserialize(oid, &payload)
    }

    /// Load and parse a tree object
    pub fn load_tree(&self, oid: &ObjectId) -> anyhow::Result<Tree> {
        let payload = self.get(oid, Some(ObjectType::Tree))?;
        Tree::deserialize(oid, &payload)
    }

    fn build_record(payload: &[u8], object_type: ObjectType) -> Vec<u8> {
        let type_tag = object_type.as_str().as_bytes();
        let mut record = Vec::with_capacity(type_tag.len() + 1 + payload.len());
        record.extend_from_slice(type_tag);
        record.push(0);
        record.extend_from_slice(payload);
        record
    }

    fn object_path(&self, oid: &ObjectId) -> PathBuf {
        self.path.join(oid.as_ref())
    }

    fn read_record(&self, oid: &ObjectId) -> anyhow::Result<(ObjectType, Bytes)> {
        let object_path = self.object_path(oid);
        let record = match std::fs::read(&object_path) {
            Ok(record) => record,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(oid.clone()).into());
            }
            Err(error) => {
                return Err(error).with_context(|| {
                    format!("unable to read object file {}", object_path.display())
                });
            }
        };

        let separator = record
            .iter()
            .position(|byte| *byte == 0)
            .with_context(|| format!("object {} has no type tag separator", oid))?;

        let type_tag = std::str::from_utf8(&record[..separator])
            .with_context(|| format!("object {} has a non-UTF-8 type tag", oid))?;
        let object_type = ObjectType::try_from(type_tag)?;

        let payload = Bytes::from(record).split_off(separator + 1);
        Ok((object_type, payload))
    }
}
