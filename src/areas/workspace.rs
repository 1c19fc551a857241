use anyhow::Context;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Name of the repository directory inside the working tree
pub const REPO_DIR: &str = ".minigit";

const IGNORED_PATHS: [&str; 3] = [REPO_DIR, ".", ".."];

/// Kind of a workspace directory entry
///
/// Symbolic links and other non-regular, non-directory entries are not
/// represented; enumeration skips them entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceEntryKind {
    File,
    Directory,
}

/// A single non-ignored entry of a workspace directory
#[derive(Debug, Clone)]
pub struct WorkspaceEntry {
    /// Entry name, free of path separators
    pub name: String,
    /// Path relative to the workspace root
    pub path: PathBuf,
    pub kind: WorkspaceEntryKind,
}

/// Working directory file system operations
///
/// Owns every non-ignored path beneath the workspace root: enumeration
/// for snapshotting, and destructive clearing plus rewriting for
/// materialization.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether a workspace-relative path is ignored
    ///
    /// A path is ignored when any of its components is the repository
    /// directory itself.
    pub fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                let name_str = name.to_string_lossy();
                IGNORED_PATHS.contains(&name_str.as_ref())
            } else {
                false
            }
        })
    }

    fn relative_to_root(&self, path: &Path) -> Option<PathBuf> {
        path.strip_prefix(self.path.as_ref()).ok().map(PathBuf::from)
    }

    /// List the non-ignored entries of a single workspace directory
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory path relative to the workspace root (empty for
    ///   the root itself)
    ///
    /// Regular files and directories are returned; everything else is
    /// skipped. Enumeration order is whatever the file system yields;
    /// callers that need determinism sort by name themselves.
    pub fn list_dir(&self, dir: &Path) -> anyhow::Result<Vec<WorkspaceEntry>> {
        let dir_path = self.path.join(dir);
        let mut entries = Vec::new();

        for entry in std::fs::read_dir(&dir_path)
            .with_context(|| format!("unable to read directory {}", dir_path.display()))?
        {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                // Names that are not valid UTF-8 cannot be recorded in a
                // tree entry; skip them like other non-representable paths.
                continue;
            };

            let relative_path = dir.join(&name);
            if Self::is_ignored(&relative_path) {
                continue;
            }

            // file_type() does not follow symlinks, so links show up as
            // neither file nor directory and fall through.
            let file_type = entry.file_type()?;
            let kind = if file_type.is_file() {
                WorkspaceEntryKind::File
            } else if file_type.is_dir() {
                WorkspaceEntryKind::Directory
            } else {
                continue;
            };

            entries.push(WorkspaceEntry {
                name,
                path: relative_path,
                kind,
            });
        }

        Ok(entries)
    }

    /// List every non-ignored directory beneath the workspace root
    ///
    /// Returns paths relative to the root, the root itself excluded.
    pub fn list_dirs(&self) -> anyhow::Result<Vec<PathBuf>> {
        Ok(WalkDir::new(&self.path)
            .into_iter()
            .filter_entry(|entry| !self.is_ignored_entry(entry.path()))
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_dir())
            .filter_map(|entry| self.relative_to_root(entry.path()))
            .filter(|path| !path.as_os_str().is_empty())
            .collect::<Vec<_>>())
    }

    fn is_ignored_entry(&self, path: &Path) -> bool {
        self.relative_to_root(path)
            .map(|relative| Self::is_ignored(&relative))
            .unwrap_or(false)
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Vec<u8>> {
        let file_path = self.path.join(file_path);

        std::fs::read(&file_path)
            .with_context(|| format!("unable to read file {}", file_path.display()))
    }

    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<()> {
        let file_path = self.path.join(file_path);

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("unable to create parent directories for {}", file_path.display())
            })?;
        }

        std::fs::write(&file_path, data)
            .with_context(|| format!("unable to write file {}", file_path.display()))
    }

    /// Delete every non-ignored file beneath the root, then remove the
    /// directories left empty by those deletions
    ///
    /// Directory removal is best-effort: a directory still holding ignored
    /// residue fails `remove_dir` and is left in place.
    pub fn clear(&self) -> anyhow::Result<()> {
        for entry in WalkDir::new(&self.path)
            .contents_first(true)
            .into_iter()
            .filter_entry(|entry| !self.is_ignored_entry(entry.path()))
        {
            let entry = entry?;
            if entry.path() == self.path.as_ref() {
                continue;
            }

            if entry.file_type().is_dir() {
                let _ = std::fs::remove_dir(entry.path());
            } else {
                std::fs::remove_file(entry.path()).with_context(|| {
                    format!("unable to remove file {}", entry.path().display())
                })?;
            }
        }

        Ok(())
    }
}
