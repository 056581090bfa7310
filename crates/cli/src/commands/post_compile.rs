use std::path::PathBuf;

use anyhow::Result;
use argweave_core::{FilesPolicy, ToolKind};
use argweave_lombok::PostCompile;
use argweave_utils::expand_files;
use clap::Args;

use crate::{context::CommandContext, options::FormatOptions, run_tool::run_tool};

#[derive(Args, Debug)]
#[command(about = "Run Lombok post-compile handlers on class files")]
pub struct PostCompileArgs {
    /// Classpath holding lombok.jar (defaults to the config file)
    #[arg(long, value_delimiter = ',')]
    lombok_classpath: Vec<PathBuf>,

    /// Stream Lombok's output
    #[arg(short, long)]
    verbose: bool,

    /// Fail instead of skipping when no class files are given
    #[arg(long)]
    require_files: bool,

    /// Print the argument list without running Lombok
    #[arg(long)]
    dry_run: bool,

    #[arg(long, default_value = "stdout")]
    format: FormatOptions,

    /// Class files or glob patterns (e.g. 'build/classes/**/*.class')
    class_files: Vec<String>,
}

impl PostCompileArgs {
    fn to_task(&self, ctx: &CommandContext) -> Result<PostCompile> {
        let files_policy = if self.require_files {
            FilesPolicy::Required
        } else {
            ctx.config
                .tool(ToolKind::Lombok)
                .files_policy
                .unwrap_or(FilesPolicy::Skip)
        };
        Ok(PostCompile {
            lombok_classpath: ctx.tool_classpath(ToolKind::Lombok, self.lombok_classpath.clone()),
            class_files: expand_files(&ctx.current_dir, &self.class_files)?,
            verbose: self.verbose,
            files_policy,
        })
    }
}

/// Run Lombok post-compile
pub async fn handle_post_compile(args: &PostCompileArgs) -> Result<()> {
    let ctx = CommandContext::new().await?;
    let task = args.to_task(&ctx)?;
    run_tool(&ctx.runner(), &task, args.dry_run, &args.format).await
}
