use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let file1 = FileSpec::new(repository_dir.path().join("1.txt"), "one".to_string());
    write_file(file1);

    let file2 = FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    );
    write_file(file2);

    let file3 = FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    );
    write_file(file3);

    run_minigit_command(repository_dir.path(), &["commit", "-m", "Initial commit"])
        .assert()
        .success();

    repository_dir
}

pub fn run_minigit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("minigit").expect("Failed to find minigit binary");
    cmd.envs(vec![("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Read a reference file from the repository directory, trimmed
pub fn read_ref_file(dir: &Path, name: &str) -> Result<String, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(dir.join(".minigit").join(name))?;
    Ok(content.trim().to_string())
}

/// Get the current HEAD commit SHA, following an attached HEAD to its branch
pub fn get_head_commit_sha(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let head_content = read_ref_file(dir, "HEAD")?;

    if let Some(ref_path) = head_content.strip_prefix("ref: ") {
        read_ref_file(dir, ref_path.trim())
    } else {
        Ok(head_content)
    }
}

/// Get the raw payload of a commit object by using cat-file
pub fn cat_commit(dir: &Path, commit_id: &str) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_minigit_command(dir, &["cat-file", commit_id]).output()?;
    Ok(String::from_utf8(output.stdout)?)
}

/// Get the parent commit ID of a given commit
pub fn get_parent_commit_id(
    dir: &Path,
    commit_id: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    for line in cat_commit(dir, commit_id)?.lines() {
        if let Some(oid) = line.strip_prefix("parent ") {
            return Ok(oid.to_string());
        }
    }

    Err("No parent found".into())
}
