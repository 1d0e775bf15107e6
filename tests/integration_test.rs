// tests/integration_test.rs
use assert_cmd::Command;
use chrono::NaiveDate;
use git2::Repository;
use predicates::prelude::*;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::Path;
use tagger::config::Config;
use tagger::domain::{BumpLevel, Version};
use tagger::git::{Git2Repository, Repository as _};
use tagger::manifest;
use tagger::release::{ReleaseOptions, ReleaseOutcome, ReleasePipeline};
use tempfile::TempDir;

#[test]
fn test_tagger_help() {
    Command::cargo_bin("tagger")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("conventional commits"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_tagger_version() {
    Command::cargo_bin("tagger")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_tagger_outside_repository_fails() {
    let temp_dir = TempDir::new().unwrap();
    Command::cargo_bin("tagger")
        .unwrap()
        .arg("--root")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Git repository error"));
}

fn commit_file(repo: &Repository, root: &Path, file: &str, content: &str, message: &str) {
    fs::write(root.join(file), content).expect("Could not write file");

    let mut index = repo.index().expect("Could not get index");
    index
        .add_path(Path::new(file))
        .expect("Could not add file to index");
    index.write().expect("Could not write index");

    let tree_id = index.write_tree().expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");
    let signature = repo.signature().expect("Could not get sig");

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
        .expect("Could not create commit");
}

// Helper function to set up a temporary repo: tagged v1.0.0, then a feat and a fix
fn setup_test_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let root = temp_dir.path();

    let repo = Repository::init(root).expect("Could not init git repo");
    {
        let mut config = repo.config().expect("Could not get config");
        config
            .set_str("user.name", "Test User")
            .expect("Could not set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Could not set user.email");
    }

    commit_file(
        &repo,
        root,
        "package.json",
        "{\n  \"name\": \"demo\",\n  \"version\": \"1.0.0\"\n}\n",
        "chore: initial commit",
    );
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    repo.tag_lightweight("v1.0.0", head.as_object(), false)
        .expect("Could not create tag");

    commit_file(&repo, root, "README.md", "demo\n", "feat(ui): add button");
    commit_file(&repo, root, "README.md", "demo!\n", "fix: crash on start");

    temp_dir
}

#[test]
fn test_git2_repository_history() {
    let temp_dir = setup_test_repo();
    let repo = Git2Repository::open(temp_dir.path()).unwrap();

    assert_eq!(repo.last_tag().unwrap(), Some("v1.0.0".to_string()));
    assert_eq!(
        repo.commit_subjects(Some("v1.0.0")).unwrap(),
        vec!["fix: crash on start", "feat(ui): add button"]
    );
    assert_eq!(
        repo.commit_subjects(None).unwrap(),
        vec![
            "fix: crash on start",
            "feat(ui): add button",
            "chore: initial commit"
        ]
    );
    assert_eq!(repo.head_hash().unwrap().len(), 40);
}

#[test]
fn test_git2_repository_without_commits() {
    let temp_dir = TempDir::new().unwrap();
    Repository::init(temp_dir.path()).unwrap();
    let repo = Git2Repository::open(temp_dir.path()).unwrap();

    assert_eq!(repo.last_tag().unwrap(), None);
    assert!(repo.commit_subjects(None).unwrap().is_empty());
}

#[test]
fn test_full_release_on_real_repository() {
    let temp_dir = setup_test_repo();
    let root = temp_dir.path();
    let repo = Git2Repository::open(root).unwrap();
    let config = Config::default();
    let options = ReleaseOptions {
        root: root.to_path_buf(),
        date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        dry_run: false,
    };

    let outcome = ReleasePipeline::new(&repo, &config).run(&options).unwrap();
    let ReleaseOutcome::Released(plan) = outcome else {
        panic!("expected a release");
    };
    assert_eq!(plan.bump, BumpLevel::Minor);
    assert_eq!(plan.next, Version::new(1, 1, 0));

    assert_eq!(
        manifest::read_version(&root.join("package.json")).unwrap(),
        Some(Version::new(1, 1, 0))
    );
    assert_eq!(
        fs::read_to_string(root.join("CHANGELOG.md")).unwrap(),
        "## v1.1.0 - 2024-06-30\n\n### ✨ Features\n- add button\n\n### 🐛 Fixes\n- crash on start\n\n"
    );

    let git = Repository::open(root).unwrap();
    let head = git.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(head.summary(), Some("chore(release): v1.1.0"));
    let tagged = git
        .revparse_single("refs/tags/v1.1.0")
        .unwrap()
        .peel_to_commit()
        .unwrap();
    assert_eq!(tagged.id(), head.id());

    let tree = head.tree().unwrap();
    assert!(tree.get_name("CHANGELOG.md").is_some());

    // Nothing new since the release tag.
    let again = ReleasePipeline::new(&repo, &config).run(&options).unwrap();
    assert_eq!(
        again,
        ReleaseOutcome::NothingToRelease {
            last_tag: Some("v1.1.0".to_string()),
            commit_count: 0,
        }
    );
}

#[test]
fn test_cli_dry_run_leaves_repository_untouched() {
    let temp_dir = setup_test_repo();
    let root = temp_dir.path();

    Command::cargo_bin("tagger")
        .unwrap()
        .arg("--root")
        .arg(root)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.1.0"))
        .stdout(predicate::str::contains("add button"));

    assert!(!root.join("CHANGELOG.md").exists());
    let git = Repository::open(root).unwrap();
    assert!(git.revparse_single("refs/tags/v1.1.0").is_err());
}

#[test]
fn test_cli_release_from_working_directory() {
    let temp_dir = setup_test_repo();
    let root = temp_dir.path();

    // No --root: the default "." must resolve against the working directory.
    Command::cargo_bin("tagger")
        .unwrap()
        .current_dir(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("v1.1.0"));

    let git = Repository::open(root).unwrap();
    let head = git.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(head.summary(), Some("chore(release): v1.1.0"));
    let tree = head.tree().unwrap();
    assert!(tree.get_name("CHANGELOG.md").is_some());
    assert!(git.revparse_single("refs/tags/v1.1.0").is_ok());
}

#[test]
#[serial]
fn test_release_with_relative_root() {
    let temp_dir = setup_test_repo();
    let config = Config::default();
    let options = ReleaseOptions {
        root: Path::new(".").to_path_buf(),
        date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        dry_run: false,
    };

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(temp_dir.path()).unwrap();
    let outcome = Git2Repository::open(".")
        .and_then(|repo| ReleasePipeline::new(&repo, &config).run(&options));
    env::set_current_dir(original_dir).unwrap();

    let ReleaseOutcome::Released(plan) = outcome.unwrap() else {
        panic!("expected a release");
    };
    assert_eq!(plan.tag, "v1.1.0");

    let git = Repository::open(temp_dir.path()).unwrap();
    let head = git.head().unwrap().peel_to_commit().unwrap();
    let tree = head.tree().unwrap();
    assert!(tree.get_name("CHANGELOG.md").is_some());
    let blob = tree
        .get_name("package.json")
        .unwrap()
        .to_object(&git)
        .unwrap()
        .peel_to_blob()
        .unwrap();
    assert!(String::from_utf8_lossy(blob.content()).contains("\"1.1.0\""));
}

#[test]
fn test_release_in_repository_without_commits() {
    let temp_dir = TempDir::new().unwrap();
    Repository::init(temp_dir.path()).unwrap();
    fs::write(temp_dir.path().join("package.json"), r#"{"version": "1.0.0"}"#).unwrap();
    let repo = Git2Repository::open(temp_dir.path()).unwrap();
    let config = Config::default();

    let outcome = ReleasePipeline::new(&repo, &config)
        .plan(temp_dir.path(), NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
        .unwrap();
    assert_eq!(
        outcome,
        ReleaseOutcome::NothingToRelease {
            last_tag: None,
            commit_count: 0,
        }
    );
}
