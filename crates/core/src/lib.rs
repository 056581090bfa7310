//! # argweave-core
//!
//! Renders a declared tool schema into an argument list, writes it to a
//! temporary argument file and runs the tool on the JVM.
//!
//! Tool crates implement [`Tool`]; [`Runner`] does the rest.

pub mod argfile;
pub mod config;
pub mod error;
pub mod java;
pub mod launcher;
pub mod option;
pub mod render;
pub mod result;
pub mod runner;
pub mod tool;

pub use argfile::ArgFile;
pub use config::{Config, ToolConfig};
pub use error::InvocationError;
pub use java::resolve_java;
pub use launcher::{CommandSpec, Launcher, ProcessOutput, SystemLauncher};
pub use option::{OptionValue, ToolOption};
pub use render::{PathSeparator, RenderContext, absolutize, render, render_options};
pub use result::InvocationResult;
pub use runner::Runner;
pub use tool::{ArgFileStyle, FilesPolicy, Tool, ToolKind};
