use std::path::PathBuf;

use argweave_core::{ArgFileStyle, FilesPolicy, Tool, ToolKind, ToolOption};

pub const LOMBOK_MAIN_CLASS: &str = "lombok.launch.Main";

/// `lombok.launch.Main post-compile [--verbose] <class files>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCompile {
    pub lombok_classpath: Vec<PathBuf>,
    pub class_files: Vec<PathBuf>,
    pub verbose: bool,
    pub files_policy: FilesPolicy,
}

impl Default for PostCompile {
    fn default() -> Self {
        Self {
            lombok_classpath: Vec::new(),
            class_files: Vec::new(),
            verbose: false,
            files_policy: FilesPolicy::Skip,
        }
    }
}

impl PostCompile {
    pub fn new(lombok_classpath: Vec<PathBuf>, class_files: Vec<PathBuf>) -> Self {
        Self {
            lombok_classpath,
            class_files,
            ..Default::default()
        }
    }
}

impl Tool for PostCompile {
    fn kind(&self) -> ToolKind {
        ToolKind::Lombok
    }

    fn main_class(&self) -> &str {
        LOMBOK_MAIN_CLASS
    }

    fn tool_classpath(&self) -> &[PathBuf] {
        &self.lombok_classpath
    }

    // lombok.launch.Main has no argument file option of its own
    fn argfile_style(&self) -> ArgFileStyle {
        ArgFileStyle::Launcher
    }

    fn leading_args(&self) -> &[&'static str] {
        &["post-compile"]
    }

    fn options(&self) -> Vec<ToolOption<'_>> {
        vec![ToolOption::flag("--verbose", self.verbose)]
    }

    fn files(&self) -> &[PathBuf] {
        &self.class_files
    }

    fn files_field(&self) -> &'static str {
        "classFiles"
    }

    fn files_policy(&self) -> FilesPolicy {
        self.files_policy
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}
