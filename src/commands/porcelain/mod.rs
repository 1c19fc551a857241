//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: initialize a new repository
//! - `commit`: snapshot the working directory into history
//! - `checkout`: move the working directory to another snapshot
//! - `log`: show commit history
//! - `branch`: create or list branches
//! - `tag`: name a commit
//! - `status`: show the current checkout position

pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod status;
pub mod tag;
