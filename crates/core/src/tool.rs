use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::PathBuf;

use crate::option::ToolOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ToolKind {
    AspectJ,
    Lombok,
}

impl ToolKind {
    /// Returns the key used for per-tool sections in the config file
    #[must_use]
    pub const fn config_key(&self) -> &'static str {
        match self {
            Self::AspectJ => "aspectj",
            Self::Lombok => "lombok",
        }
    }

    /// Prefix for the temporary argument file name
    #[must_use]
    pub const fn argfile_prefix(&self) -> &'static str {
        match self {
            Self::AspectJ => "ajc-",
            Self::Lombok => "lombok-",
        }
    }
}

impl Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::AspectJ => "AspectJ".magenta().bold(),
                Self::Lombok => "Lombok".red().bold(),
            }
        )
    }
}

/// How the spawned tool is told where its argument file lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgFileStyle {
    /// The tool's own option, e.g. `-argfile <path>` for ajc.
    Flag(&'static str),
    /// The JVM launcher's `@<path>` expansion. The file then also carries the
    /// classpath and main class.
    Launcher,
}

/// What to do when the positional file set is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum FilesPolicy {
    /// Fail before anything is written or spawned.
    Required,
    /// Run the tool anyway.
    #[default]
    Optional,
    /// Do not run the tool and report the invocation as skipped.
    Skip,
}

/// A declared tool schema: everything needed to render and launch one tool.
///
/// `options` must return the same options in the same order on every call;
/// that order is the emission order of the argument list.
pub trait Tool: std::fmt::Debug + Send + Sync {
    fn kind(&self) -> ToolKind;
    fn main_class(&self) -> &str;
    fn tool_classpath(&self) -> &[PathBuf];
    fn argfile_style(&self) -> ArgFileStyle;

    /// Fixed tokens emitted before any option, e.g. a subcommand name.
    fn leading_args(&self) -> &[&'static str] {
        &[]
    }

    fn options(&self) -> Vec<ToolOption<'_>>;
    fn files(&self) -> &[PathBuf];

    /// Name of the positional file set in error messages.
    fn files_field(&self) -> &'static str {
        "files"
    }

    fn files_policy(&self) -> FilesPolicy {
        FilesPolicy::Optional
    }

    /// Stream the child's output instead of capturing it.
    fn verbose(&self) -> bool {
        false
    }
}
