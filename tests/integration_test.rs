// tests/integration_test.rs
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_image-tags");

/// Run the binary with a clean environment describing a GitHub Actions job.
fn run_image_tags(workdir: &Path, vars: &[(&str, &str)], args: &[&str]) -> Output {
    let mut cmd = Command::new(BIN);
    cmd.env_clear().current_dir(workdir).arg("--debug").args(args);
    for (key, value) in vars {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute image-tags")
}

/// Create `<dir>/<name>.git` with one commit carrying the given tags.
fn create_tagged_repo(dir: &Path, name: &str, tags: &[&str]) {
    let repo = git2::Repository::init(dir.join(format!("{}.git", name))).unwrap();
    let signature = git2::Signature::now("Test", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let commit_id = repo
        .commit(Some("HEAD"), &signature, &signature, "initial", &tree, &[])
        .unwrap();
    let commit = repo.find_object(commit_id, None).unwrap();
    for tag in tags {
        repo.tag_lightweight(tag, &commit, false).unwrap();
    }
}

#[test]
fn test_image_tags_help() {
    let output = Command::new(BIN).arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("image-tags"));
    assert!(stdout.contains("Compute container image tags"));
}

#[test]
fn test_image_tags_version() {
    let output = Command::new(BIN).arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_protected_branch_writes_dev_tag() {
    let dir = TempDir::new().unwrap();
    let output_file = dir.path().join("output");

    let output = run_image_tags(
        dir.path(),
        &[
            ("GITHUB_JOB", "publish"),
            ("GITHUB_REF", "refs/heads/main"),
            ("GITHUB_OUTPUT", output_file.to_str().unwrap()),
        ],
        &[],
    );

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(std::fs::read_to_string(&output_file).unwrap(), "tags=dev\n");
}

#[test]
fn test_version_tag_resolves_against_remote_tags() {
    let dir = TempDir::new().unwrap();
    create_tagged_repo(dir.path(), "widget", &["v1.0.0", "v1.1.0", "v1.2.0-rc1", "docs"]);
    let server_url = format!("file://{}", dir.path().display());
    let output_file = dir.path().join("output");

    let output = run_image_tags(
        dir.path(),
        &[
            ("FORGEJO_JOB", "publish"),
            ("FORGEJO_SERVER_URL", server_url.as_str()),
            ("FORGEJO_REPOSITORY", "widget"),
            ("FORGEJO_REF", "refs/tags/v1.0.1"),
            ("FORGEJO_OUTPUT", output_file.to_str().unwrap()),
        ],
        &[],
    );

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        std::fs::read_to_string(&output_file).unwrap(),
        "tags=1.0.1,1.0\n"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("docs"), "unparsable tag should be reported: {}", stderr);
}

#[test]
fn test_newest_release_gets_latest() {
    let dir = TempDir::new().unwrap();
    create_tagged_repo(dir.path(), "widget", &["v1.0.0", "v1.1.0", "v2.0.0"]);
    let server_url = format!("file://{}", dir.path().display());
    let output_file = dir.path().join("output");

    let output = run_image_tags(
        dir.path(),
        &[
            ("GITHUB_JOB", "publish"),
            ("GITHUB_SERVER_URL", server_url.as_str()),
            ("GITHUB_REPOSITORY", "widget"),
            ("GITHUB_REF", "refs/tags/v2.0.0"),
            ("GITHUB_OUTPUT", output_file.to_str().unwrap()),
        ],
        &[],
    );

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        std::fs::read_to_string(&output_file).unwrap(),
        "tags=2.0.0,2.0,2,latest\n"
    );
}

#[test]
fn test_unreachable_repository_fails() {
    let dir = TempDir::new().unwrap();
    let server_url = format!("file://{}", dir.path().display());
    let output_file = dir.path().join("output");

    let output = run_image_tags(
        dir.path(),
        &[
            ("GITHUB_JOB", "publish"),
            ("GITHUB_SERVER_URL", server_url.as_str()),
            ("GITHUB_REPOSITORY", "missing"),
            ("GITHUB_REF", "refs/tags/v1.0.0"),
            ("GITHUB_OUTPUT", output_file.to_str().unwrap()),
        ],
        &[],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Couldn't find tags"));
    assert!(!output_file.exists());
}

#[test]
fn test_invalid_target_tag_fails() {
    let dir = TempDir::new().unwrap();
    let output_file = dir.path().join("output");

    let output = run_image_tags(
        dir.path(),
        &[
            ("GITHUB_JOB", "publish"),
            ("GITHUB_REF", "refs/tags/nightly"),
            ("GITHUB_OUTPUT", output_file.to_str().unwrap()),
        ],
        &[],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a valid version"));
    assert!(!output_file.exists());
}

#[test]
fn test_other_ref_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output_file = dir.path().join("output");

    let output = run_image_tags(
        dir.path(),
        &[
            ("GITHUB_JOB", "publish"),
            ("GITHUB_REF", "refs/heads/feature/login"),
            ("GITHUB_OUTPUT", output_file.to_str().unwrap()),
        ],
        &[],
    );

    assert!(output.status.success(), "{:?}", output);
    assert!(!output_file.exists());
}

#[test]
fn test_missing_forge_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_image_tags(dir.path(), &[], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unable to determine forge"));
}

#[test]
fn test_dry_run_prints_tags() {
    let dir = TempDir::new().unwrap();
    let output_file = dir.path().join("output");

    let output = run_image_tags(
        dir.path(),
        &[
            ("GITHUB_JOB", "publish"),
            ("GITHUB_REF", "refs/heads/feature"),
            ("GITHUB_OUTPUT", output_file.to_str().unwrap()),
        ],
        &["--dry-run", "--ref", "refs/heads/master"],
    );

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "tags=dev\n");
    assert!(!output_file.exists());
}

#[test]
fn test_config_file_changes_tags() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("imagetags.toml"),
        "protected_branches = [\"trunk\"]\ndev_tag = \"edge\"\noutput_key = \"image_tags\"\n",
    )
    .unwrap();
    let output_file = dir.path().join("output");

    let output = run_image_tags(
        dir.path(),
        &[
            ("GITHUB_JOB", "publish"),
            ("GITHUB_REF", "refs/heads/trunk"),
            ("GITHUB_OUTPUT", output_file.to_str().unwrap()),
        ],
        &[],
    );

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        std::fs::read_to_string(&output_file).unwrap(),
        "image_tags=edge\n"
    );
}
