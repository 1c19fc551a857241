use crate::areas::refs::{HEAD_REF_NAME, HEADS_PREFIX, RefValue};
use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

const DEFAULT_BRANCH: &str = "master";

impl Repository {
    pub fn init(&self) -> anyhow::Result<()> {
        if self.repo_path().exists() {
            anyhow::bail!(
                "{} already exists; this directory is already a repository",
                self.repo_path().display()
            );
        }

        fs::create_dir_all(self.database().objects_path())
            .context("failed to create objects directory")?;
        fs::create_dir_all(self.refs().heads_path())
            .context("failed to create refs/heads directory")?;
        fs::create_dir_all(self.refs().tags_path())
            .context("failed to create refs/tags directory")?;

        // HEAD starts attached to a branch that does not exist yet; it
        // springs into existence on the first commit.
        self.refs()
            .update_ref(
                HEAD_REF_NAME,
                RefValue::Symbolic(format!("{}{}", HEADS_PREFIX, DEFAULT_BRANCH)),
                false,
            )
            .context("failed to create initial HEAD reference")?;

        writeln!(
            self.writer(),
            "Initialized empty repository in {}",
            self.repo_path().display()
        )?;

        Ok(())
    }
}
