use crate::areas::repository::Repository;
use crate::artifacts::objects::tree::Tree;
use std::io::Write;

impl Repository {
    /// Snapshot the working directory and print the root tree id
    pub fn write_tree(&self) -> anyhow::Result<()> {
        let tree_oid = Tree::write_from(self.workspace(), self.database())?;

        writeln!(self.writer(), "{}", tree_oid)?;

        Ok(())
    }
}
