use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use crate::argfile::ArgFile;
use crate::java::resolve_java;
use crate::launcher::{CommandSpec, Launcher, SystemLauncher};
use crate::option::ToolOption;
use crate::render::{PathSeparator, RenderContext, render, render_options};
use crate::{ArgFileStyle, Config, FilesPolicy, InvocationError, InvocationResult, Tool};

/// Renders a tool schema to an argument file and runs the tool on the JVM.
///
/// Each call to [`Runner::run`] writes its own uniquely named argument file and
/// spawns exactly one process, so one runner can serve independent invocations.
pub struct Runner {
    java: PathBuf,
    temp_dir: Option<PathBuf>,
    keep_argfile: bool,
    working_dir: Option<PathBuf>,
    separator: PathSeparator,
    launcher: Box<dyn Launcher>,
}

impl std::fmt::Debug for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner")
            .field("java", &self.java)
            .field("temp_dir", &self.temp_dir)
            .field("keep_argfile", &self.keep_argfile)
            .field("working_dir", &self.working_dir)
            .field("separator", &self.separator)
            .finish_non_exhaustive()
    }
}

impl Runner {
    pub fn new(java: impl Into<PathBuf>) -> Self {
        Self {
            java: java.into(),
            temp_dir: None,
            keep_argfile: false,
            working_dir: None,
            separator: PathSeparator::platform(),
            launcher: Box::new(SystemLauncher),
        }
    }

    /// Build a runner from the config file. `java_home` is the value of
    /// `JAVA_HOME`, used when the config does not name a launcher.
    pub fn from_config(config: &Config, java_home: Option<&OsStr>) -> Self {
        let mut runner = Self::new(resolve_java(config.java.as_deref(), java_home));
        runner.temp_dir = config.temp_dir.clone();
        runner.keep_argfile = config.keep_argfile;
        runner
    }

    /// Directory the child runs in; relative paths render against it.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: PathSeparator) -> Self {
        self.separator = separator;
        self
    }

    #[must_use]
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn keep_argfile(mut self, keep: bool) -> Self {
        self.keep_argfile = keep;
        self
    }

    #[must_use]
    pub fn with_launcher(mut self, launcher: impl Launcher + 'static) -> Self {
        self.launcher = Box::new(launcher);
        self
    }

    pub fn java(&self) -> &Path {
        &self.java
    }

    pub fn render_context(&self) -> RenderContext {
        RenderContext::new(self.separator, self.working_dir.clone())
    }

    /// The argument list the tool would receive.
    pub fn render(&self, tool: &dyn Tool) -> Vec<String> {
        render(tool, &self.render_context())
    }

    /// Check the tool can be run. Returns `false` when the invocation should
    /// be skipped.
    ///
    /// # Errors
    /// Returns [`InvocationError::MissingInput`] naming the empty field, or
    /// [`InvocationError::UnsupportedArgument`] for a value that would not
    /// survive the argument file.
    pub fn validate(&self, tool: &dyn Tool) -> Result<bool, InvocationError> {
        if tool.files().is_empty() {
            match tool.files_policy() {
                FilesPolicy::Required => {
                    return Err(InvocationError::MissingInput {
                        tool: tool.kind(),
                        field: tool.files_field(),
                    });
                }
                FilesPolicy::Skip => return Ok(false),
                FilesPolicy::Optional => {}
            }
        }
        if tool.tool_classpath().is_empty() {
            return Err(InvocationError::MissingInput {
                tool: tool.kind(),
                field: "toolClasspath",
            });
        }
        self.check_arguments(tool)?;
        Ok(true)
    }

    fn check_arguments(&self, tool: &dyn Tool) -> Result<(), InvocationError> {
        let unsupported = |value: String| InvocationError::UnsupportedArgument {
            tool: tool.kind(),
            value,
        };

        let options = tool.options();
        let paths = options
            .iter()
            .flat_map(ToolOption::path_values)
            .chain(tool.files().iter().map(PathBuf::as_path))
            .chain(tool.tool_classpath().iter().map(PathBuf::as_path));
        for path in paths {
            if path.to_str().is_none() {
                return Err(unsupported(path.display().to_string()));
            }
        }

        let mut tokens = self.launch_prelude(tool);
        tokens.extend(self.render(tool));
        match tokens.into_iter().find(|token| token.contains(['\n', '\r'])) {
            Some(token) => Err(unsupported(token)),
            None => Ok(()),
        }
    }

    /// `-cp <tool classpath> <main class>`
    fn launch_prelude(&self, tool: &dyn Tool) -> Vec<String> {
        let mut prelude = render_options(
            &[ToolOption::paths("-cp", tool.tool_classpath())],
            &self.render_context(),
        );
        prelude.push(tool.main_class().to_string());
        prelude
    }

    fn write_argfile(&self, tool: &dyn Tool, args: &[String]) -> std::io::Result<ArgFile> {
        let prefix = tool.kind().argfile_prefix();
        let temp_dir = self.temp_dir.as_deref();
        match tool.argfile_style() {
            ArgFileStyle::Flag(_) => ArgFile::write(prefix, args, temp_dir),
            ArgFileStyle::Launcher => {
                let mut contents = self.launch_prelude(tool);
                contents.extend_from_slice(args);
                ArgFile::write_for_launcher(prefix, &contents, temp_dir)
            }
        }
    }

    /// The JVM command line that reads its arguments from `argfile`.
    pub fn command_for(&self, tool: &dyn Tool, argfile: &Path) -> CommandSpec {
        let args = match tool.argfile_style() {
            ArgFileStyle::Flag(flag) => {
                let mut args = self.launch_prelude(tool);
                args.push(flag.to_string());
                args.push(argfile.to_string_lossy().into_owned());
                args
            }
            ArgFileStyle::Launcher => vec![format!("@{}", argfile.display())],
        };
        CommandSpec {
            program: self.java.clone(),
            args,
            working_dir: self.working_dir.clone(),
            stream_output: tool.verbose(),
        }
    }

    /// Validate, render, write the argument file, run the tool and wait for it.
    ///
    /// A non-zero exit is reported in the returned result, not as an error;
    /// call [`InvocationResult::ensure_success`] to fail on it.
    ///
    /// # Errors
    /// Returns error if validation fails, the argument file cannot be written
    /// or the process cannot be started.
    pub async fn run(&self, tool: &dyn Tool) -> Result<InvocationResult, InvocationError> {
        let kind = tool.kind();
        if !self.validate(tool)? {
            info!(tool = kind.config_key(), "no input files, skipping");
            return Ok(InvocationResult::Skipped { tool: kind });
        }

        let args = self.render(tool);
        debug!(tool = kind.config_key(), ?args, "rendered argument list");

        let argfile = self
            .write_argfile(tool, &args)
            .map_err(InvocationError::ArgFile)?;
        let command = self.command_for(tool, argfile.path());
        debug!(
            program = %command.program.display(),
            args = ?command.args,
            "spawning"
        );

        let start = Instant::now();
        let output = self
            .launcher
            .launch(&command)
            .await
            .map_err(|source| InvocationError::Spawn {
                program: command.program.clone(),
                source,
            })?;
        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            tool = kind.config_key(),
            exit_code = ?output.exit_code,
            duration_ms,
            "finished"
        );

        let argfile = if self.keep_argfile {
            let path = argfile.keep().map_err(InvocationError::ArgFile)?;
            debug!(path = %path.display(), "kept argument file");
            Some(path)
        } else {
            None
        };

        Ok(InvocationResult::Finished {
            tool: kind,
            exit_code: output.exit_code,
            stdout: output.stdout,
            stderr: output.stderr,
            duration_ms,
            argfile,
        })
    }
}
