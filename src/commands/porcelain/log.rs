use crate::areas::refs::{HEAD_REF_NAME, HEADS_PREFIX, TAGS_PREFIX};
use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::collections::HashMap;
use std::io::Write;

impl Repository {
    /// Show the history reachable from a revision (HEAD by default)
    ///
    /// An unborn HEAD (fresh repository with no commits) prints nothing.
    pub fn log(&self, start: Option<&str>) -> anyhow::Result<()> {
        let seed = match start {
            Some(start) => Some(Revision::parse(start).resolve(self.refs())?),
            None => self.refs().read_oid(HEAD_REF_NAME)?,
        };

        let decorations = self.ref_decorations()?;

        for item in RevList::new(self.database(), seed) {
            let (oid, commit) = item?;

            writeln!(
                self.writer(),
                "{}{}",
                format!("commit {}", oid).yellow(),
                self.decoration_suffix(&decorations, &oid)
            )?;
            writeln!(self.writer())?;
            for message_line in commit.message().lines() {
                writeln!(self.writer(), "    {}", message_line)?;
            }
            writeln!(self.writer())?;
        }

        Ok(())
    }

    /// Map each commit id to the reference names pointing at it
    fn ref_decorations(&self) -> anyhow::Result<HashMap<ObjectId, Vec<String>>> {
        Ok(self
            .refs()
            .iter_refs("")?
            .into_iter()
            .fold(HashMap::new(), |mut acc, (name, oid)| {
                acc.entry(oid).or_insert_with(Vec::new).push(name);
                acc
            }))
    }

    fn decoration_suffix(
        &self,
        decorations: &HashMap<ObjectId, Vec<String>>,
        oid: &ObjectId,
    ) -> String {
        let Some(names) = decorations.get(oid) else {
            return String::new();
        };

        let names = names
            .iter()
            .map(|name| {
                if name == HEAD_REF_NAME {
                    name.cyan().to_string()
                } else if let Some(branch) = name.strip_prefix(HEADS_PREFIX) {
                    branch.green().to_string()
                } else if let Some(tag) = name.strip_prefix(TAGS_PREFIX) {
                    format!("tag: {}", tag).yellow().to_string()
                } else {
                    name.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!(" ({})", names)
    }
}
