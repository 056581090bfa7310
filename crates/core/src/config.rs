use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{FilesPolicy, ToolKind};

/// Loaded from `.argweave/config.json`, controls how the JVM is located, where argument
/// files go and the per-tool launcher classpath.
///
/// Every field is optional; command line flags override what is set here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path of the `java` launcher. Defaults to `$JAVA_HOME/bin/java`, then `java` on PATH.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java: Option<PathBuf>,

    /// Directory for temporary argument files (default: the system temp dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_dir: Option<PathBuf>,

    /// Keep argument files after the tool exits
    #[serde(default)]
    pub keep_argfile: bool,

    #[serde(default)]
    pub aspectj: ToolConfig,

    #[serde(default)]
    pub lombok: ToolConfig,
}

/// Per-tool section of the config file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    /// Classpath used to launch the tool itself (e.g. aspectjtools.jar)
    #[serde(default)]
    pub classpath: Vec<PathBuf>,

    /// Overrides the tool's default handling of an empty file set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_policy: Option<FilesPolicy>,
}

impl Config {
    #[must_use]
    pub fn tool(&self, kind: ToolKind) -> &ToolConfig {
        match kind {
            ToolKind::AspectJ => &self.aspectj,
            ToolKind::Lombok => &self.lombok,
        }
    }
}
