use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::workspace::{REPO_DIR, Workspace};
use std::cell::RefCell;
use std::path::Path;

/// High-level repository handle
///
/// Owns the component handles (database, refs, workspace) rooted at one
/// working directory. Every operation goes through an explicit
/// `Repository` value; there is no ambient "current repository" state.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    refs: Refs,
    workspace: Workspace,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path);
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;

        let repo_path = path.join(REPO_DIR);
        let database = Database::new(repo_path.join("objects").into_boxed_path());
        let refs = Refs::new(repo_path.into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            refs,
            workspace,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repo_path(&self) -> Box<Path> {
        self.path.join(REPO_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> std::cell::RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
