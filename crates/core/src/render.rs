use std::path::{Path, PathBuf};

use crate::Tool;
use crate::option::{OptionValue, ToolOption};

/// Separator used to join path collections into one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSeparator {
    Colon,
    Semicolon,
}

impl PathSeparator {
    /// The separator of the platform this binary was built for.
    #[must_use]
    pub const fn platform() -> Self {
        if cfg!(windows) {
            Self::Semicolon
        } else {
            Self::Colon
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Colon => ":",
            Self::Semicolon => ";",
        }
    }
}

impl Default for PathSeparator {
    fn default() -> Self {
        Self::platform()
    }
}

/// Inputs to rendering that do not come from the tool schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub separator: PathSeparator,
    /// Relative paths are resolved against this directory. Without it they
    /// are emitted as given.
    pub base_dir: Option<PathBuf>,
}

impl RenderContext {
    pub fn new(separator: PathSeparator, base_dir: Option<PathBuf>) -> Self {
        Self {
            separator,
            base_dir,
        }
    }

    fn path_arg(&self, path: &Path) -> String {
        absolutize(self.base_dir.as_deref(), path)
            .to_string_lossy()
            .into_owned()
    }

    fn join_paths(&self, paths: &[PathBuf]) -> String {
        paths
            .iter()
            .map(|path| self.path_arg(path))
            .collect::<Vec<_>>()
            .join(self.separator.as_str())
    }
}

/// Resolve `path` against `base` without touching the filesystem.
#[must_use]
pub fn absolutize(base: Option<&Path>, path: &Path) -> PathBuf {
    match base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}

fn render_option(option: &ToolOption<'_>, ctx: &RenderContext, args: &mut Vec<String>) {
    match option.value {
        OptionValue::Flag(true) => args.push(option.flag.to_string()),
        OptionValue::Flag(false) => {}
        OptionValue::Value(Some(value)) => {
            args.push(option.flag.to_string());
            args.push(value.to_string());
        }
        OptionValue::Value(None) => {}
        OptionValue::List(values) if !values.is_empty() => {
            args.push(format!("{}:{}", option.flag, values.join(",")));
        }
        OptionValue::List(_) => {}
        OptionValue::Paths(paths) if !paths.is_empty() => {
            args.push(option.flag.to_string());
            args.push(ctx.join_paths(paths));
        }
        OptionValue::Paths(_) => {}
        OptionValue::Path(Some(path)) => {
            args.push(option.flag.to_string());
            args.push(ctx.path_arg(path));
        }
        OptionValue::Path(None) => {}
    }
}

/// Render a standalone option list, in order.
#[must_use]
pub fn render_options(options: &[ToolOption<'_>], ctx: &RenderContext) -> Vec<String> {
    let mut args = Vec::new();
    for option in options {
        render_option(option, ctx, &mut args);
    }
    args
}

/// Render a tool schema into its argument list.
///
/// Leading arguments come first, then every present option in declaration
/// order, then one entry per positional file.
#[must_use]
pub fn render(tool: &dyn Tool, ctx: &RenderContext) -> Vec<String> {
    let mut args: Vec<String> = tool.leading_args().iter().map(|a| a.to_string()).collect();
    for option in tool.options() {
        render_option(&option, ctx, &mut args);
    }
    args.extend(tool.files().iter().map(|file| ctx.path_arg(file)));
    args
}
