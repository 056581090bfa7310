use std::path::{Path, PathBuf};

use crate::get_project_root;

/// `.argweave` under the project root.
pub fn get_argweave_dir(current_dir: &Path) -> PathBuf {
    get_project_root(current_dir).join(".argweave")
}
