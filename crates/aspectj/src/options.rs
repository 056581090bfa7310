use std::path::PathBuf;

use argweave_core::{ArgFileStyle, FilesPolicy, Tool, ToolKind, ToolOption};

use crate::{DebugInfo, WarnCategory};

pub const AJC_MAIN_CLASS: &str = "org.aspectj.tools.ajc.Main";

/// Options for one `ajc` run.
///
/// Paths may be relative; they are resolved against the runner's working
/// directory when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AjcOptions {
    /// Classpath holding the compiler itself (aspectjtools.jar).
    pub aspectj_classpath: Vec<PathBuf>,

    /// Bytecode (jars or directories) to accept as source and weave.
    pub inpath: Vec<PathBuf>,
    /// Binary aspects to weave into all sources.
    pub aspectpath: Vec<PathBuf>,
    /// Put output classes in this zip file.
    pub outjar: Option<PathBuf>,
    /// Generate META-INF/aop-ajc.xml for load-time weaving.
    pub outxml: bool,
    /// Generate the load-time weaving xml under a custom name.
    pub outxmlfile: Option<PathBuf>,
    /// Generate a build .ajsym file into the output directory.
    pub crossrefs: bool,
    /// Emit the compiler version.
    pub version: bool,

    pub classpath: Vec<PathBuf>,
    pub bootclasspath: Vec<PathBuf>,
    pub extdirs: Vec<PathBuf>,
    /// Where to place generated .class files (`-d`).
    pub destination_dir: Option<PathBuf>,

    pub source: Option<String>,
    pub target: Option<String>,

    /// Emit no warnings. Does not suppress `declare warning` or Xlint messages.
    pub nowarn: bool,
    pub warn: Vec<String>,
    /// Same as `-warn:deprecation`.
    pub deprecation: bool,
    /// Emit no errors for unresolved imports.
    pub no_import_error: bool,
    /// Keep compiling after error, dumping class files with problem methods.
    pub proceed_on_error: bool,
    /// Debug attribute levels (`-g:`).
    pub debug_info: Vec<String>,
    pub preserve_all_locals: bool,
    pub reference_info: bool,
    pub encoding: Option<String>,

    pub verbose: bool,
    /// Emit messages about weaving.
    pub show_weave_info: bool,
    /// Log file for compiler messages.
    pub log: Option<PathBuf>,
    /// Show progress (requires `log`).
    pub progress: bool,
    pub time: bool,

    pub x_terminate_after_compilation: bool,
    pub x_add_serial_version_uid: bool,
    pub x_no_inline: bool,
    pub x_serializable_aspects: bool,
    pub x_not_reweavable: bool,

    /// Source files, passed after all options.
    pub files: Vec<PathBuf>,
    pub files_policy: FilesPolicy,
}

impl AjcOptions {
    pub fn new(aspectj_classpath: Vec<PathBuf>) -> Self {
        Self {
            aspectj_classpath,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_warn(mut self, categories: impl IntoIterator<Item = WarnCategory>) -> Self {
        self.warn
            .extend(categories.into_iter().map(|c| c.as_str().to_string()));
        self
    }

    #[must_use]
    pub fn with_debug_info(mut self, levels: impl IntoIterator<Item = DebugInfo>) -> Self {
        self.debug_info
            .extend(levels.into_iter().map(|l| l.as_str().to_string()));
        self
    }

    #[must_use]
    pub fn with_files(mut self, files: impl IntoIterator<Item = PathBuf>) -> Self {
        self.files.extend(files);
        self
    }

    #[must_use]
    pub fn with_files_policy(mut self, policy: FilesPolicy) -> Self {
        self.files_policy = policy;
        self
    }
}

impl Tool for AjcOptions {
    fn kind(&self) -> ToolKind {
        ToolKind::AspectJ
    }

    fn main_class(&self) -> &str {
        AJC_MAIN_CLASS
    }

    fn tool_classpath(&self) -> &[PathBuf] {
        &self.aspectj_classpath
    }

    fn argfile_style(&self) -> ArgFileStyle {
        ArgFileStyle::Flag("-argfile")
    }

    fn options(&self) -> Vec<ToolOption<'_>> {
        vec![
            ToolOption::paths("-inpath", &self.inpath),
            ToolOption::paths("-aspectpath", &self.aspectpath),
            ToolOption::path("-outjar", self.outjar.as_deref()),
            ToolOption::flag("-outxml", self.outxml),
            ToolOption::path("-outxmlfile", self.outxmlfile.as_deref()),
            ToolOption::flag("-crossrefs", self.crossrefs),
            ToolOption::flag("-version", self.version),
            ToolOption::paths("-classpath", &self.classpath),
            ToolOption::paths("-bootclasspath", &self.bootclasspath),
            ToolOption::paths("-extdirs", &self.extdirs),
            ToolOption::path("-d", self.destination_dir.as_deref()),
            ToolOption::value("-source", self.source.as_deref()),
            ToolOption::value("-target", self.target.as_deref()),
            ToolOption::flag("-nowarn", self.nowarn),
            ToolOption::list("-warn", &self.warn),
            ToolOption::flag("-deprecation", self.deprecation),
            ToolOption::flag("-noImportError", self.no_import_error),
            ToolOption::flag("-proceedOnError", self.proceed_on_error),
            ToolOption::list("-g", &self.debug_info),
            ToolOption::flag("-preserveAllLocals", self.preserve_all_locals),
            ToolOption::flag("-referenceInfo", self.reference_info),
            ToolOption::value("-encoding", self.encoding.as_deref()),
            ToolOption::flag("-verbose", self.verbose),
            ToolOption::flag("-showWeaveInfo", self.show_weave_info),
            ToolOption::path("-log", self.log.as_deref()),
            ToolOption::flag("-progress", self.progress),
            ToolOption::flag("-time", self.time),
            ToolOption::flag(
                "-XterminateAfterCompilation",
                self.x_terminate_after_compilation,
            ),
            ToolOption::flag("-XaddSerialVersionUID", self.x_add_serial_version_uid),
            ToolOption::flag("-XnoInline", self.x_no_inline),
            ToolOption::flag("-XserializableAspects", self.x_serializable_aspects),
            ToolOption::flag("-XnotReweavable", self.x_not_reweavable),
        ]
    }

    fn files(&self) -> &[PathBuf] {
        &self.files
    }

    fn files_policy(&self) -> FilesPolicy {
        self.files_policy
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}
