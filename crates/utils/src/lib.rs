mod ci;
mod expand_files;
mod find_current_git_repo;
mod get_argweave_config;
mod get_argweave_dir;
mod git;

pub use ci::{CiSystem, detect_ci, env_var};
pub use expand_files::expand_files;
pub use find_current_git_repo::{find_current_git_repo, get_project_root};
pub use get_argweave_config::get_argweave_config;
pub use get_argweave_dir::get_argweave_dir;
pub use git::{GitError, get_ref, get_sha, run_git};
