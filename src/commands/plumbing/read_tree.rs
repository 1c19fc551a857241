use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;

impl Repository {
    /// Replace the working directory with the contents of a tree object
    pub fn read_tree(&self, name: &str) -> anyhow::Result<()> {
        let tree_oid = Revision::parse(name).resolve(self.refs())?;
        self.materialize_tree(&tree_oid)
    }

    /// Rebuild the working directory from a tree
    ///
    /// Destructive overwrite, not a merge: every non-ignored file not in
    /// the target tree is deleted. The flattened mapping is computed
    /// before clearing begins, so a malformed tree fails the operation
    /// without touching the workspace.
    pub(crate) fn materialize_tree(&self, tree_oid: &ObjectId) -> anyhow::Result<()> {
        let flat = Tree::flatten(self.database(), tree_oid)?;

        self.workspace().clear()?;
        for (path, oid) in flat {
            let payload = self.database().get(&oid, Some(ObjectType::Blob))?;
            self.workspace().write_file(&path, &payload)?;
        }

        Ok(())
    }
}
