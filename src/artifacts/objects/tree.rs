//! Tree objects
//!
//! A tree is a directory snapshot: a listing of (entry type, object id,
//! name) triples, one per line, sorted by name. Sorting makes the payload
//! deterministic, so identical directory contents always hash to the same
//! id regardless of file system enumeration order.
//!
//! ## Format
//!
//! Each entry: `<type> <oid> <name>\n` where `<type>` is `blob` or
//! `tree`. A directory with no eligible entries serializes to an empty
//! payload, which is a legal tree distinct from tree absence.

use crate::areas::database::Database;
use crate::areas::workspace::{Workspace, WorkspaceEntryKind};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::StoreError;
use anyhow::Context;
use bytes::Bytes;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::path::PathBuf;

/// Type tag of a single tree entry
///
/// Trees only ever reference blobs and other trees; any other tag in a
/// stored tree is corruption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEntryKind {
    Blob,
    Tree,
}

impl TreeEntryKind {
    pub fn as_str(&self) -> &str {
        match self {
            TreeEntryKind::Blob => "blob",
            TreeEntryKind::Tree => "tree",
        }
    }

    fn parse(tag: &str) -> Option<Self> {
        match tag {
            "blob" => Some(TreeEntryKind::Blob),
            "tree" => Some(TreeEntryKind::Tree),
            _ => None,
        }
    }
}

/// A directory snapshot
///
/// Entries are keyed by name in a `BTreeMap`, so serialization is sorted
/// without an extra pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: BTreeMap<String, (TreeEntryKind, ObjectId)>,
}

impl Tree {
    pub fn add_entry(&mut self, name: String, kind: TreeEntryKind, oid: ObjectId) {
        self.entries.insert(name, (kind, oid));
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &(TreeEntryKind, ObjectId))> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn serialize(&self) -> Bytes {
        let mut payload = String::new();
        for (name, (kind, oid)) in &self.entries {
            payload.push_str(&format!("{} {} {}\n", kind.as_str(), oid, name));
        }
        Bytes::from(payload)
    }

    /// Parse a stored tree payload
    ///
    /// Fails with [`StoreError::MalformedTree`] on unknown entry type
    /// tags, invalid object ids, and entry names that contain a path
    /// separator or are `.`/`..`.
    pub fn deserialize(oid: &ObjectId, payload: &[u8]) -> anyhow::Result<Self> {
        let malformed = |reason: String| StoreError::MalformedTree {
            oid: oid.clone(),
            reason,
        };

        let text = std::str::from_utf8(payload)
            .map_err(|_| malformed("payload is not valid UTF-8".to_string()))?;

        let mut tree = Tree::default();
        for line in text.lines() {
            let mut parts = line.splitn(3, ' ');
            let (Some(tag), Some(entry_oid), Some(name)) =
                (parts.next(), parts.next(), parts.next())
            else {
                return Err(malformed(format!("truncated entry line '{line}'")).into());
            };

            let kind = TreeEntryKind::parse(tag)
                .ok_or_else(|| malformed(format!("unknown entry type '{tag}'")))?;
            let entry_oid = ObjectId::try_parse(entry_oid.to_string())
                .map_err(|error| malformed(error.to_string()))?;

            if name.is_empty() || name.contains('/') || name == "." || name == ".." {
                return Err(malformed(format!("invalid entry name '{name}'")).into());
            }

            tree.add_entry(name.to_string(), kind, entry_oid);
        }

        Ok(tree)
    }

    /// Snapshot the workspace into the database and return the root tree id
    ///
    /// Directories are processed deepest-first so every child tree id is
    /// known before its parent is serialized; no recursion is involved,
    /// so nesting depth is unbounded. Ignored paths and non-regular
    /// entries are skipped.
    pub fn write_from(workspace: &Workspace, database: &Database) -> anyhow::Result<ObjectId> {
        let mut dirs = workspace.list_dirs()?;
        dirs.sort_by_key(|dir| std::cmp::Reverse(dir.components().count()));
        // The root itself comes last.
        dirs.push(PathBuf::new());

        let mut tree_ids: HashMap<PathBuf, ObjectId> = HashMap::new();
        for dir in dirs {
            let mut tree = Tree::default();

            for entry in workspace.list_dir(&dir)? {
                let (kind, oid) = match entry.kind {
                    WorkspaceEntryKind::File => {
                        let payload = workspace.read_file(&entry.path)?;
                        (TreeEntryKind::Blob, database.put(&payload, ObjectType::Blob)?)
                    }
                    WorkspaceEntryKind::Directory => {
                        let oid = tree_ids.remove(&entry.path).with_context(|| {
                            format!("subdirectory {} was not snapshotted", entry.path.display())
                        })?;
                        (TreeEntryKind::Tree, oid)
                    }
                };
                tree.add_entry(entry.name, kind, oid);
            }

            let oid = database.put(&tree.serialize(), ObjectType::Tree)?;
            tree_ids.insert(dir, oid);
        }

        tree_ids
            .remove(&PathBuf::new())
            .context("workspace root was not snapshotted")
    }

    /// Expand a tree id into a flat mapping of blob paths to object ids
    ///
    /// Walks nested trees with an explicit queue and accumulates every
    /// entry of every tree.
    pub fn flatten(
        database: &Database,
        tree_oid: &ObjectId,
    ) -> anyhow::Result<BTreeMap<PathBuf, ObjectId>> {
        let mut result = BTreeMap::new();
        let mut queue = VecDeque::from([(tree_oid.clone(), PathBuf::new())]);

        while let Some((oid, prefix)) = queue.pop_front() {
            let tree = database.load_tree(&oid)?;

            for (name, (kind, entry_oid)) in tree.entries {
                let path = prefix.join(&name);
                match kind {
                    TreeEntryKind::Blob => {
                        result.insert(path, entry_oid);
                    }
                    TreeEntryKind::Tree => queue.push_back((entry_oid, path)),
                }
            }
        }

        Ok(result)
    }
}
