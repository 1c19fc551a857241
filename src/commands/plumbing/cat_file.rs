use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use std::io::Write;

impl Repository {
    /// Print the raw payload of an object, whatever its type
    pub fn cat_file(&self, name: &str) -> anyhow::Result<()> {
        let oid = Revision::parse(name).resolve(self.refs())?;
        let payload = self.database().get(&oid, None)?;

        self.writer().write_all(&payload)?;

        Ok(())
    }
}
