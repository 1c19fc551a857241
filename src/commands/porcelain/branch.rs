use crate::areas::refs::{HEAD_REF_NAME, HEADS_PREFIX};
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::revision::Revision;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Create a branch at the given start point (HEAD by default)
    pub fn branch(&self, name: &str, start_point: Option<&str>) -> anyhow::Result<()> {
        let name = BranchName::try_parse(name.to_string())?;

        let start_oid = match start_point {
            Some(start_point) => Some(Revision::parse(start_point).resolve(self.refs())?),
            None => self.refs().read_oid(HEAD_REF_NAME)?,
        }
        .ok_or_else(|| anyhow::anyhow!("no current HEAD to branch from"))?;

        self.refs().create_branch(name.as_ref(), start_oid)
    }

    /// List branches, marking the one HEAD is attached to
    pub fn list_branches(&self) -> anyhow::Result<()> {
        let current = self.refs().current_branch()?;

        for (ref_name, _) in self.refs().iter_refs(HEADS_PREFIX)? {
            let name = ref_name.strip_prefix(HEADS_PREFIX).unwrap_or(&ref_name);

            if current.as_deref() == Some(name) {
                writeln!(self.writer(), "* {}", name.green())?;
            } else {
                writeln!(self.writer(), "  {}", name)?;
            }
        }

        Ok(())
    }
}
