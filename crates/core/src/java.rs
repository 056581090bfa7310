use std::ffi::OsStr;
use std::path::{Path, PathBuf};

const JAVA_BINARY: &str = if cfg!(windows) { "java.exe" } else { "java" };

/// Pick the JVM launcher: an explicitly configured path wins, then
/// `$JAVA_HOME/bin/java`, then whatever `java` resolves to on `PATH`.
#[must_use]
pub fn resolve_java(configured: Option<&Path>, java_home: Option<&OsStr>) -> PathBuf {
    if let Some(java) = configured {
        return java.to_path_buf();
    }
    match java_home {
        Some(home) if !home.is_empty() => Path::new(home).join("bin").join(JAVA_BINARY),
        _ => PathBuf::from(JAVA_BINARY),
    }
}
