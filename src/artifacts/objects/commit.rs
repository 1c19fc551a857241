//! Commit objects
//!
//! A commit links a tree snapshot into history. Serialized form:
//!
//! ```text
//! tree <tree-oid>
//! parent <parent-oid>        (absent for a root commit)
//!
//! <message>
//! ```
//!
//! The parent is singular; merge commits are not representable.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::StoreError;
use bytes::Bytes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    tree_oid: ObjectId,
    parent: Option<ObjectId>,
    message: String,
}

impl Commit {
    pub fn new(tree_oid: ObjectId, parent: Option<ObjectId>, message: String) -> Self {
        Commit {
            tree_oid,
            parent,
            message,
        }
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the commit message, for short-form display
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn serialize(&self) -> Bytes {
        let mut lines = vec![format!("tree {}", self.tree_oid)];
        if let Some(parent) = &self.parent {
            lines.push(format!("parent {}", parent));
        }
        lines.push(String::new());
        lines.push(self.message.clone());

        let mut payload = lines.join("\n");
        payload.push('\n');
        Bytes::from(payload)
    }

    /// Parse a stored commit payload
    ///
    /// Fails with [`StoreError::MalformedCommit`] on any header key other
    /// than `tree`/`parent`, on invalid header values, and on a missing
    /// `tree` header.
    pub fn deserialize(oid: &ObjectId, payload: &[u8]) -> anyhow::Result<Self> {
        let malformed = |reason: String| StoreError::MalformedCommit {
            oid: oid.clone(),
            reason,
        };

        let text = std::str::from_utf8(payload)
            .map_err(|_| malformed("payload is not valid UTF-8".to_string()))?;

        let mut tree_oid = None;
        let mut parent = None;
        let mut lines = text.lines();

        for line in &mut lines {
            if line.is_empty() {
                break;
            }

            let (key, value) = line
                .split_once(' ')
                .ok_or_else(|| malformed(format!("header line '{line}' has no value")))?;
            let value = ObjectId::try_parse(value.to_string())
                .map_err(|error| malformed(error.to_string()))?;

            match key {
                "tree" => tree_oid = Some(value),
                "parent" => parent = Some(value),
                _ => return Err(malformed(format!("unknown header '{key}'")).into()),
            }
        }

        let tree_oid = tree_oid.ok_or_else(|| malformed("missing tree header".to_string()))?;
        let message = lines.collect::<Vec<_>>().join("\n");

        Ok(Commit::new(tree_oid, parent, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn oid(fill: char) -> ObjectId {
        ObjectId::try_parse(fill.to_string().repeat(40)).unwrap()
    }

    #[test]
    fn root_commit_round_trips_without_parent() {
        let commit = Commit::new(oid('a'), None, "first".to_string());

        let parsed = Commit::deserialize(&oid('0'), &commit.serialize()).unwrap();

        assert_eq!(parsed.tree_oid(), &oid('a'));
        assert_eq!(parsed.parent(), None);
        assert_eq!(parsed.message(), "first");
    }

    #[test]
    fn commit_with_parent_round_trips() {
        let commit = Commit::new(oid('a'), Some(oid('b')), "second\n\nbody line".to_string());

        let parsed = Commit::deserialize(&oid('0'), &commit.serialize()).unwrap();

        assert_eq!(parsed.parent(), Some(&oid('b')));
        assert_eq!(parsed.message(), "second\n\nbody line");
        assert_eq!(parsed.short_message(), "second");
    }

    #[test]
    fn unknown_header_is_malformed() {
        let payload = format!("tree {}\nauthor {}\n\nmsg\n", oid('a'), oid('b'));
        let error = Commit::deserialize(&oid('0'), payload.as_bytes()).unwrap_err();

        assert!(matches!(
            error.downcast_ref::<StoreError>(),
            Some(StoreError::MalformedCommit { .. })
        ));
    }

    #[test]
    fn missing_tree_header_is_malformed() {
        let payload = format!("parent {}\n\nmsg\n", oid('b'));
        let error = Commit::deserialize(&oid('0'), payload.as_bytes()).unwrap_err();

        assert!(matches!(
            error.downcast_ref::<StoreError>(),
            Some(StoreError::MalformedCommit { .. })
        ));
    }

    #[test]
    fn serialized_headers_come_before_a_blank_line() {
        let commit = Commit::new(oid('a'), Some(oid('b')), "msg".to_string());
        let payload = commit.serialize();
        let text = std::str::from_utf8(&payload).unwrap();

        let expected = format!("tree {}\nparent {}\n\nmsg\n", oid('a'), oid('b'));
        assert_eq!(text, expected);
    }
}
