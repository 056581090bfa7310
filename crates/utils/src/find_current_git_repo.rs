use std::path::{Path, PathBuf};

use anyhow::Result;
use gix::{ThreadSafeRepository, discover};

/// Find git repository from current directory using gix
pub fn find_current_git_repo(current_dir: &Path) -> Result<ThreadSafeRepository> {
    let repo = discover(current_dir)?.into_sync();
    Ok(repo)
}

/// Work tree root of the enclosing repository, or `current_dir` itself when
/// it is not inside one (or the repository is bare).
pub fn get_project_root(current_dir: &Path) -> PathBuf {
    find_current_git_repo(current_dir)
        .ok()
        .and_then(|repo| repo.work_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| current_dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_current_git_repo_outside_repo() {
        let temp_dir = TempDir::new().unwrap();
        assert!(find_current_git_repo(temp_dir.path()).is_err());
    }

    #[test]
    fn test_get_project_root_nested() {
        let temp_dir = TempDir::new().unwrap();
        let temp_path = temp_dir.path();

        std::process::Command::new("git")
            .arg("init")
            .current_dir(temp_path)
            .output()
            .unwrap();

        let nested_dir = temp_path.join("src").join("main");
        std::fs::create_dir_all(&nested_dir).unwrap();

        let root = get_project_root(&nested_dir);
        assert_eq!(
            root.canonicalize().unwrap(),
            temp_path.canonicalize().unwrap()
        );
    }

    #[test]
    fn test_get_project_root_without_repo() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(get_project_root(temp_dir.path()), temp_dir.path());
    }
}
