use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Expand positional file arguments.
///
/// Plain paths pass through untouched. Glob patterns are matched relative to
/// `base_dir` and replaced by their matches in sorted order, so the result
/// does not depend on directory iteration order. A pattern with no matches
/// contributes nothing.
pub fn expand_files(base_dir: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        if !is_glob(pattern) {
            files.push(PathBuf::from(pattern));
            continue;
        }
        let full_pattern = base_dir.join(pattern);
        let full_pattern = full_pattern.to_string_lossy();
        let mut matches = glob::glob(&full_pattern)
            .with_context(|| format!("Invalid file pattern `{pattern}`"))?
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to expand `{pattern}`"))?;
        matches.sort();
        files.extend(matches);
    }
    Ok(files)
}
