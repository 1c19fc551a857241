use crate::areas::refs::{HEAD_REF_NAME, RefValue};
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use std::io::Write;

impl Repository {
    /// Snapshot the working directory and append a commit to history
    ///
    /// The resolved HEAD becomes the parent (absent for the very first
    /// commit). HEAD is updated through the symbolic-aware rule: while a
    /// branch is checked out the branch advances, while detached the
    /// direct HEAD value advances.
    pub fn commit(&self, message: &str) -> anyhow::Result<()> {
        let tree_oid = Tree::write_from(self.workspace(), self.database())?;
        let parent = self.refs().read_oid(HEAD_REF_NAME)?;

        let commit = Commit::new(tree_oid, parent, message.to_string());
        let oid = self
            .database()
            .put(&commit.serialize(), ObjectType::Commit)?;

        self.refs()
            .update_ref(HEAD_REF_NAME, RefValue::Direct(oid.clone()), true)?;

        let position = match self.refs().current_branch()? {
            Some(branch) => branch,
            None => "detached HEAD".to_string(),
        };
        writeln!(
            self.writer(),
            "[{} {}] {}",
            position,
            oid.to_short_oid(),
            commit.short_message()
        )?;

        Ok(())
    }
}
