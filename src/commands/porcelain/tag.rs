use crate::areas::refs::HEAD_REF_NAME;
use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;

impl Repository {
    /// Name a commit under refs/tags (HEAD by default)
    pub fn tag(&self, name: &str, target: Option<&str>) -> anyhow::Result<()> {
        let oid = match target {
            Some(target) => Some(Revision::parse(target).resolve(self.refs())?),
            None => self.refs().read_oid(HEAD_REF_NAME)?,
        }
        .ok_or_else(|| anyhow::anyhow!("no current HEAD to tag"))?;

        self.refs().create_tag(name, oid)
    }
}
