use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

use common::command::{
    get_head_commit_sha, init_repository_dir, read_ref_file, repository_dir, run_minigit_command,
};
use common::file::{FileSpec, write_file};

#[rstest]
fn create_branch_at_head(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    let head_sha = get_head_commit_sha(dir.path())?;

    run_minigit_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    assert_eq!(read_ref_file(dir.path(), "refs/heads/feature")?, head_sha);
    // creating a branch does not switch to it
    assert_eq!(read_ref_file(dir.path(), "HEAD")?, "ref: refs/heads/master");

    Ok(())
}

#[rstest]
fn create_branch_from_start_point(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    let first_sha = get_head_commit_sha(dir.path())?;

    write_file(FileSpec::new(dir.path().join("4.txt"), "four".to_string()));
    run_minigit_command(dir.path(), &["commit", "-m", "Second commit"])
        .assert()
        .success();

    run_minigit_command(dir.path(), &["branch", "old", &first_sha])
        .assert()
        .success();

    assert_eq!(read_ref_file(dir.path(), "refs/heads/old")?, first_sha);

    run_minigit_command(dir.path(), &["checkout", "old"])
        .assert()
        .success();
    assert!(!dir.path().join("4.txt").exists());

    Ok(())
}

#[rstest]
fn list_branches_marks_the_current_one(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    run_minigit_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    run_minigit_command(dir.path(), &["branch", "topic"])
        .assert()
        .success();

    run_minigit_command(dir.path(), &["branch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* master"))
        .stdout(predicate::str::contains("  feature"))
        .stdout(predicate::str::contains("  topic"));

    Ok(())
}

#[rstest]
#[case("bad..name")]
#[case(".hidden")]
#[case("spaced out")]
#[case("")]
fn create_branch_with_invalid_name_fails(
    init_repository_dir: TempDir,
    #[case] name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    run_minigit_command(dir.path(), &["branch", name])
        .assert()
        .failure();

    Ok(())
}

#[rstest]
fn create_duplicate_branch_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    run_minigit_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    run_minigit_command(dir.path(), &["branch", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    Ok(())
}

#[rstest]
fn create_branch_without_commits_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;

    run_minigit_command(dir.path(), &["init"]).assert().success();

    run_minigit_command(dir.path(), &["branch", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no current HEAD"));

    Ok(())
}
