use crate::areas::refs::HEAD_REF_NAME;
use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Report the current checkout position
    pub fn status(&self) -> anyhow::Result<()> {
        match self.refs().current_branch()? {
            Some(branch) => writeln!(self.writer(), "On branch {}", branch)?,
            None => match self.refs().read_oid(HEAD_REF_NAME)? {
                Some(oid) => {
                    writeln!(self.writer(), "HEAD detached at {}", oid.to_short_oid())?
                }
                None => writeln!(self.writer(), "No commits yet")?,
            },
        }

        Ok(())
    }
}
