use std::path::Path;
use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;

use crate::{CiSystem, detect_ci};

#[derive(Debug, Error)]
pub enum GitError {
    #[error("{ci} detected but `{var}` is not set")]
    MissingEnv { ci: CiSystem, var: &'static str },

    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("`git {}` failed: {}", args.join(" "), stderr.trim())]
    Command { args: Vec<String>, stderr: String },
}

/// Run git in `dir` and return its trimmed stdout.
///
/// # Errors
/// Returns error if git cannot be started or exits non-zero.
pub async fn run_git(dir: &Path, args: &[&str]) -> Result<String, GitError> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    if !output.status.success() {
        return Err(GitError::Command {
            args: args.iter().map(|a| a.to_string()).collect(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn from_ci_env(
    env: &impl Fn(&str) -> Option<String>,
    var_of: fn(&CiSystem) -> Option<&'static str>,
) -> Option<Result<String, GitError>> {
    let ci = detect_ci(env)?;
    let var = var_of(&ci)?;
    Some(env(var).ok_or(GitError::MissingEnv { ci, var }))
}

/// Commit SHA being built: taken from the CI environment when available,
/// otherwise `git rev-parse HEAD` in `dir`.
///
/// # Errors
/// Returns error if the CI variable is missing or git fails.
pub async fn get_sha(dir: &Path, env: impl Fn(&str) -> Option<String>) -> Result<String, GitError> {
    if let Some(sha) = from_ci_env(&env, CiSystem::sha_var) {
        return sha;
    }
    run_git(dir, &["rev-parse", "HEAD"]).await
}

/// Full ref being built: taken from the CI environment when available,
/// otherwise `git symbolic-ref HEAD` in `dir`.
///
/// # Errors
/// Returns error if the CI variable is missing or git fails (e.g. detached HEAD).
pub async fn get_ref(dir: &Path, env: impl Fn(&str) -> Option<String>) -> Result<String, GitError> {
    if let Some(git_ref) = from_ci_env(&env, CiSystem::ref_var) {
        return git_ref;
    }
    run_git(dir, &["symbolic-ref", "HEAD"]).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn init_repo_with_commit(path: &Path) {
        for args in [
            vec!["init", "-b", "main"],
            vec!["config", "user.email", "test@test.com"],
            vec!["config", "user.name", "Test"],
            vec!["commit", "--allow-empty", "-m", "Initial commit"],
        ] {
            std::process::Command::new("git")
                .args(&args)
                .current_dir(path)
                .output()
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_get_sha_from_github_actions() {
        let temp_dir = TempDir::new().unwrap();
        let env = env(&[("GITHUB_ACTIONS", "true"), ("GITHUB_SHA", "abc123")]);
        assert_eq!(get_sha(temp_dir.path(), env).await.unwrap(), "abc123");
    }

    #[tokio::test]
    async fn test_get_sha_from_travis_and_circle() {
        let temp_dir = TempDir::new().unwrap();
        let travis = env(&[("TRAVIS", "true"), ("TRAVIS_COMMIT", "t1")]);
        assert_eq!(get_sha(temp_dir.path(), travis).await.unwrap(), "t1");
        let circle = env(&[("CIRCLECI", "true"), ("CIRCLE_SHA1", "c1")]);
        assert_eq!(get_sha(temp_dir.path(), circle).await.unwrap(), "c1");
    }

    #[tokio::test]
    async fn test_get_sha_missing_ci_variable() {
        let temp_dir = TempDir::new().unwrap();
        let env = env(&[("GITHUB_ACTIONS", "true")]);
        let err = get_sha(temp_dir.path(), env).await.unwrap_err();
        assert!(matches!(
            err,
            GitError::MissingEnv {
                var: "GITHUB_SHA",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_get_sha_and_ref_from_git() {
        let temp_dir = TempDir::new().unwrap();
        init_repo_with_commit(temp_dir.path());

        let expected = std::process::Command::new("git")
            .args(["rev-parse", "HEAD"])
            .current_dir(temp_dir.path())
            .output()
            .unwrap();
        let expected = String::from_utf8_lossy(&expected.stdout).trim().to_string();

        let sha = get_sha(temp_dir.path(), env(&[])).await.unwrap();
        assert_eq!(sha, expected);
        assert_eq!(sha.len(), 40);

        let git_ref = get_ref(temp_dir.path(), env(&[])).await.unwrap();
        assert_eq!(git_ref, "refs/heads/main");
    }

    #[tokio::test]
    async fn test_jenkins_falls_back_to_git() {
        let temp_dir = TempDir::new().unwrap();
        init_repo_with_commit(temp_dir.path());

        let env = env(&[("JENKINS_HOME", "/var/jenkins")]);
        let sha = get_sha(temp_dir.path(), env).await.unwrap();
        assert_eq!(sha.len(), 40);
    }

    #[tokio::test]
    async fn test_get_ref_from_github_actions() {
        let temp_dir = TempDir::new().unwrap();
        let env = env(&[("GITHUB_ACTIONS", "true"), ("GITHUB_REF", "refs/pull/1/merge")]);
        assert_eq!(
            get_ref(temp_dir.path(), env).await.unwrap(),
            "refs/pull/1/merge"
        );
    }

    #[tokio::test]
    async fn test_run_git_outside_repo_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = run_git(temp_dir.path(), &["rev-parse", "HEAD"])
            .await
            .unwrap_err();
        match err {
            GitError::Command { args, .. } => assert_eq!(args, vec!["rev-parse", "HEAD"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
