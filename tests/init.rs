use assert_cmd::Command;
use predicates::prelude::predicate;

mod common;

#[test]
fn init_repository_successfully() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let mut sut = Command::cargo_bin("minigit")?;

    sut.arg("init").arg(dir.path());

    sut.assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty repository in .+\n$",
        )?)
        .stdout(predicate::str::contains(".minigit"));

    let repo_dir = dir.path().join(".minigit");
    assert!(repo_dir.join("objects").is_dir());
    assert!(repo_dir.join("refs").join("heads").is_dir());
    assert!(repo_dir.join("refs").join("tags").is_dir());

    let head_content = std::fs::read_to_string(repo_dir.join("HEAD"))?;
    assert_eq!(head_content.trim(), "ref: refs/heads/master");

    Ok(())
}

#[test]
fn reinitializing_an_existing_repository_fails() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;

    common::command::run_minigit_command(dir.path(), &["init"])
        .assert()
        .success();

    common::command::run_minigit_command(dir.path(), &["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already a repository"));

    Ok(())
}
