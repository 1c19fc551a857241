use crate::areas::refs::{HEAD_REF_NAME, HEADS_PREFIX, RefValue};
use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use std::io::Write;

const DETACHMENT_NOTICE: &str = r#"
You are in 'detached HEAD' state. You can look around and commit, and
discard those commits without impacting any branch by checking out a
branch again. To keep them, create a branch:

    minigit branch <new-branch-name>
"#;

impl Repository {
    /// Move the working directory to another snapshot
    ///
    /// Resolves `target` to a commit, materializes its tree, then sets
    /// HEAD: a branch name attaches HEAD symbolically to that branch,
    /// anything else (tag, raw id) leaves HEAD detached at the resolved
    /// commit.
    pub fn checkout(&self, target: &str) -> anyhow::Result<()> {
        let oid = Revision::parse(target).resolve(self.refs())?;
        let commit = self.database().load_commit(&oid)?;

        self.materialize_tree(commit.tree_oid())?;

        if self.refs().is_branch(target) {
            self.refs().update_ref(
                HEAD_REF_NAME,
                RefValue::Symbolic(format!("{}{}", HEADS_PREFIX, target)),
                false,
            )?;
            writeln!(self.writer(), "Switched to branch '{}'", target)?;
        } else {
            self.refs()
                .update_ref(HEAD_REF_NAME, RefValue::Direct(oid.clone()), false)?;
            writeln!(
                self.writer(),
                "HEAD is now at {} {}",
                oid.to_short_oid(),
                commit.short_message()
            )?;
            eprintln!("Note: checking out '{}'.\n{}", target, DETACHMENT_NOTICE);
        }

        Ok(())
    }
}
