//! References (branches, HEAD, tags)
//!
//! References are human-readable names pointing at commits. A reference
//! is either:
//! - Direct: containing an object id
//! - Symbolic: pointing to another reference (e.g. HEAD -> refs/heads/master)
//!
//! ## Reference Types
//!
//! - HEAD: the current checkout position, symbolic while a branch is
//!   checked out and direct while detached
//! - Branches: refs/heads/* pointing at branch tip commits
//! - Tags: refs/tags/* pointing at tagged commits
//!
//! ## File Format
//!
//! References are stored as text files containing either a 40-character
//! hex object id (direct) or `ref: <path>` (symbolic). A missing or empty
//! file reads as an absent reference, never as an error.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic reference files
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Namespace prefix for branch references
pub const HEADS_PREFIX: &str = "refs/heads/";

/// Namespace prefix for tag references
pub const TAGS_PREFIX: &str = "refs/tags/";

/// Value stored under a reference name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefValue {
    /// Alias for another reference
    Symbolic(String),
    /// Object id
    Direct(ObjectId),
}

impl RefValue {
    fn to_file_content(&self) -> String {
        match self {
            RefValue::Symbolic(target) => format!("ref: {}", target),
            RefValue::Direct(oid) => oid.as_ref().to_string(),
        }
    }
}

/// Reference manager
///
/// Reads and writes reference files under the repository directory and
/// follows symbolic chains. Updates are plain single-file writes; a
/// truncated file left by a crash simply reads back as absent.
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository directory holding HEAD and refs/
    path: Box<Path>,
}

impl Refs {
    /// Read a reference, optionally following symbolic aliases
    ///
    /// With `deref` set, the symbolic chain is walked until a direct
    /// value is found or the chain bottoms out in a missing reference
    /// (`Ok(None)`). Without it, the immediate stored value is returned,
    /// which is how callers distinguish "HEAD is a branch pointer" from
    /// "HEAD is a detached commit id".
    pub fn get_ref(&self, name: &str, deref: bool) -> anyhow::Result<Option<RefValue>> {
        let (_, value) = self.resolve(name, deref)?;
        Ok(value)
    }

    /// Read the object id a reference ultimately points at
    pub fn read_oid(&self, name: &str) -> anyhow::Result<Option<ObjectId>> {
        match self.get_ref(name, true)? {
            Some(RefValue::Direct(oid)) => Ok(Some(oid)),
            Some(RefValue::Symbolic(_)) | None => Ok(None),
        }
    }

    /// Write a reference
    ///
    /// With `deref` set, the symbolic chain is first resolved down to the
    /// final concrete reference name, so updating HEAD while it aliases a
    /// branch advances the branch itself. Without it, the named file is
    /// written directly, which is how checkout re-points HEAD at another
    /// branch or detaches it.
    pub fn update_ref(&self, name: &str, value: RefValue, deref: bool) -> anyhow::Result<()> {
        let name = if deref {
            self.resolve(name, true)?.0
        } else {
            name.to_string()
        };

        let ref_path = self.ref_path(&name);
        if let Some(parent) = ref_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("unable to create parent directories for ref {}", name)
            })?;
        }

        std::fs::write(&ref_path, value.to_file_content())
            .with_context(|| format!("unable to write ref file {}", ref_path.display()))
    }

    /// List every reference whose name starts with `prefix`
    ///
    /// Each reference is fully dereferenced; dangling references are
    /// skipped. HEAD is included when it matches the prefix.
    pub fn iter_refs(&self, prefix: &str) -> anyhow::Result<Vec<(String, ObjectId)>> {
        let mut names = vec![HEAD_REF_NAME.to_string()];
        names.extend(self.list_ref_names()?);

        let mut refs = Vec::new();
        for name in names {
            if !name.starts_with(prefix) {
                continue;
            }
            if let Some(oid) = self.read_oid(&name)? {
                refs.push((name, oid));
            }
        }

        // Directory enumeration order is unspecified; keep listings stable.
        refs.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(refs)
    }

    /// Create a branch reference at the given commit
    pub fn create_branch(&self, name: &str, oid: ObjectId) -> anyhow::Result<()> {
        let ref_name = format!("{}{}", HEADS_PREFIX, name);

        if self.ref_path(&ref_name).exists() {
            anyhow::bail!("branch {} already exists", name);
        }

        self.update_ref(&ref_name, RefValue::Direct(oid), true)
    }

    /// Create or move a tag reference
    pub fn create_tag(&self, name: &str, oid: ObjectId) -> anyhow::Result<()> {
        self.update_ref(&format!("{}{}", TAGS_PREFIX, name), RefValue::Direct(oid), true)
    }

    /// Check whether a name identifies an existing branch
    pub fn is_branch(&self, name: &str) -> bool {
        self.ref_path(&format!("{}{}", HEADS_PREFIX, name)).exists()
    }

    /// Name of the branch HEAD currently aliases, if any
    ///
    /// Returns `None` while HEAD is detached or not yet written.
    pub fn current_branch(&self) -> anyhow::Result<Option<String>> {
        match self.get_ref(HEAD_REF_NAME, false)? {
            Some(RefValue::Symbolic(target)) => Ok(target
                .strip_prefix(HEADS_PREFIX)
                .map(str::to_owned)
                .or(Some(target))),
            Some(RefValue::Direct(_)) | None => Ok(None),
        }
    }

    /// Follow a symbolic chain from `name`
    ///
    /// Returns the name of the reference where the walk stopped together
    /// with its stored value: the first direct reference, the first
    /// missing one, or - when `deref` is off - the starting reference
    /// itself. Chains are required to terminate; a cycle is reported as
    /// an error instead of looping.
    fn resolve(&self, name: &str, deref: bool) -> anyhow::Result<(String, Option<RefValue>)> {
        let mut name = name.to_string();
        let mut seen = HashSet::new();

        loop {
            let value = self.read_ref_file(&name)?;
            match value {
                Some(RefValue::Symbolic(target)) if deref => {
                    if !seen.insert(name.clone()) {
                        anyhow::bail!("symbolic reference cycle at {}", name);
                    }
                    name = target;
                }
                other => return Ok((name, other)),
            }
        }
    }

    fn read_ref_file(&self, name: &str) -> anyhow::Result<Option<RefValue>> {
        let ref_path = self.ref_path(name);
        if !ref_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&ref_path)
            .with_context(|| format!("unable to read ref file {}", ref_path.display()))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            Ok(Some(RefValue::Symbolic(symref_match[1].to_string())))
        } else {
            Ok(Some(RefValue::Direct(ObjectId::try_parse(
                content.to_string(),
            )?)))
        }
    }

    fn list_ref_names(&self) -> anyhow::Result<Vec<String>> {
        Ok(WalkDir::new(self.refs_path())
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(self.path.as_ref()).ok()?;
                Some(relative_path.to_string_lossy().to_string())
            })
            .collect::<Vec<_>>())
    }

    fn ref_path(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }

    pub fn tags_path(&self) -> Box<Path> {
        self.refs_path().join("tags").into_boxed_path()
    }
}
