use crate::areas::repository::Repository;
use crate::artifacts::objects::object_type::ObjectType;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Hash a workspace file as a blob and store it
    pub fn hash_object(&self, file: &str) -> anyhow::Result<()> {
        let payload = self.workspace().read_file(Path::new(file))?;
        let oid = self.database().put(&payload, ObjectType::Blob)?;

        writeln!(self.writer(), "{}", oid)?;

        Ok(())
    }
}
