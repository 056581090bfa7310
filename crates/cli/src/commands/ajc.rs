use std::path::PathBuf;

use anyhow::Result;
use argweave_aspectj::{AjcOptions, DebugInfo, WarnCategory};
use argweave_core::{FilesPolicy, ToolKind};
use argweave_utils::expand_files;
use clap::Args;

use crate::{
    context::CommandContext,
    options::{CliDebugInfo, CliWarn, FormatOptions},
    run_tool::run_tool,
};

#[derive(Args, Debug)]
#[command(about = "Compile and weave with the AspectJ compiler (ajc)")]
pub struct AjcArgs {
    /// Classpath holding aspectjtools.jar (defaults to the config file)
    #[arg(long, value_delimiter = ',')]
    aspectj_classpath: Vec<PathBuf>,

    /// Jars or directories whose .class files are woven as input
    #[arg(long, value_delimiter = ',')]
    inpath: Vec<PathBuf>,

    /// Jars or directories holding binary aspects to weave in
    #[arg(long, value_delimiter = ',')]
    aspectpath: Vec<PathBuf>,

    /// Put output classes in this jar
    #[arg(long)]
    outjar: Option<PathBuf>,

    /// Generate META-INF/aop-ajc.xml for load-time weaving
    #[arg(long)]
    outxml: bool,

    /// Generate the load-time weaving xml under a custom name
    #[arg(long)]
    outxmlfile: Option<PathBuf>,

    /// Generate a .ajsym file into the output directory
    #[arg(long)]
    crossrefs: bool,

    /// Ask ajc to print its version
    #[arg(long)]
    ajc_version: bool,

    #[arg(long, value_delimiter = ',')]
    classpath: Vec<PathBuf>,

    #[arg(long, value_delimiter = ',')]
    bootclasspath: Vec<PathBuf>,

    #[arg(long, value_delimiter = ',')]
    extdirs: Vec<PathBuf>,

    /// Where to place generated .class files
    #[arg(short = 'd', long)]
    destination_dir: Option<PathBuf>,

    #[arg(long)]
    source: Option<String>,

    #[arg(long)]
    target: Option<String>,

    /// Emit no warnings
    #[arg(long)]
    nowarn: bool,

    /// Warning categories, comma separated
    #[arg(long, value_delimiter = ',')]
    warn: Vec<CliWarn>,

    #[arg(long)]
    deprecation: bool,

    /// Emit no errors for unresolved imports
    #[arg(long)]
    no_import_error: bool,

    /// Keep compiling after error, dumping class files with problem methods
    #[arg(long)]
    proceed_on_error: bool,

    /// Debug attribute levels, comma separated
    #[arg(short = 'g', long, value_delimiter = ',')]
    debug_info: Vec<CliDebugInfo>,

    #[arg(long)]
    preserve_all_locals: bool,

    #[arg(long)]
    reference_info: bool,

    #[arg(long)]
    encoding: Option<String>,

    /// Pass -verbose to ajc and stream its output
    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    show_weave_info: bool,

    /// Log file for compiler messages
    #[arg(long)]
    log: Option<PathBuf>,

    /// Show progress (requires --log)
    #[arg(long)]
    progress: bool,

    #[arg(long)]
    time: bool,

    #[arg(long)]
    x_terminate_after_compilation: bool,

    #[arg(long)]
    x_add_serial_version_uid: bool,

    #[arg(long)]
    x_no_inline: bool,

    #[arg(long)]
    x_serializable_aspects: bool,

    #[arg(long)]
    x_not_reweavable: bool,

    /// Fail when no source files are given
    #[arg(long)]
    require_files: bool,

    /// Print the argument list without running ajc
    #[arg(long)]
    dry_run: bool,

    #[arg(long, default_value = "stdout")]
    format: FormatOptions,

    /// Source files or glob patterns
    files: Vec<String>,
}

impl AjcArgs {
    fn to_options(&self, ctx: &CommandContext) -> Result<AjcOptions> {
        let files_policy = if self.require_files {
            FilesPolicy::Required
        } else {
            ctx.config
                .tool(ToolKind::AspectJ)
                .files_policy
                .unwrap_or_default()
        };

        Ok(AjcOptions {
            aspectj_classpath: ctx
                .tool_classpath(ToolKind::AspectJ, self.aspectj_classpath.clone()),
            inpath: self.inpath.clone(),
            aspectpath: self.aspectpath.clone(),
            outjar: self.outjar.clone(),
            outxml: self.outxml,
            outxmlfile: self.outxmlfile.clone(),
            crossrefs: self.crossrefs,
            version: self.ajc_version,
            classpath: self.classpath.clone(),
            bootclasspath: self.bootclasspath.clone(),
            extdirs: self.extdirs.clone(),
            destination_dir: self.destination_dir.clone(),
            source: self.source.clone(),
            target: self.target.clone(),
            nowarn: self.nowarn,
            warn: Vec::new(),
            deprecation: self.deprecation,
            no_import_error: self.no_import_error,
            proceed_on_error: self.proceed_on_error,
            debug_info: Vec::new(),
            preserve_all_locals: self.preserve_all_locals,
            reference_info: self.reference_info,
            encoding: self.encoding.clone(),
            verbose: self.verbose,
            show_weave_info: self.show_weave_info,
            log: self.log.clone(),
            progress: self.progress,
            time: self.time,
            x_terminate_after_compilation: self.x_terminate_after_compilation,
            x_add_serial_version_uid: self.x_add_serial_version_uid,
            x_no_inline: self.x_no_inline,
            x_serializable_aspects: self.x_serializable_aspects,
            x_not_reweavable: self.x_not_reweavable,
            files: expand_files(&ctx.current_dir, &self.files)?,
            files_policy,
        }
        .with_warn(self.warn.iter().map(|w| WarnCategory::from(*w)))
        .with_debug_info(self.debug_info.iter().map(|g| DebugInfo::from(*g))))
    }
}

/// Run ajc with the given options
pub async fn handle_ajc(args: &AjcArgs) -> Result<()> {
    let ctx = CommandContext::new().await?;
    let options = args.to_options(&ctx)?;
    run_tool(&ctx.runner(), &options, args.dry_run, &args.format).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use argweave_core::{Config, ToolConfig};
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        ajc: AjcArgs,
    }

    fn context(config: Config) -> CommandContext {
        CommandContext {
            current_dir: PathBuf::from("/repo"),
            project_root: PathBuf::from("/repo"),
            config,
        }
    }

    #[test]
    fn test_ajc_args_to_options() {
        let cli = TestCli::parse_from([
            "test",
            "--aspectj-classpath",
            "aspectjtools.jar",
            "--classpath",
            "a.jar,b.jar",
            "--source",
            "11",
            "--target",
            "11",
            "--warn",
            "unusedLocals,deprecation",
            "-g",
            "lines,vars",
            "-d",
            "out",
            "--x-no-inline",
            "--ajc-version",
            "A.java",
            "B.java",
        ]);
        let options = cli.ajc.to_options(&context(Config::default())).unwrap();

        assert_eq!(options.aspectj_classpath, vec![PathBuf::from("aspectjtools.jar")]);
        assert_eq!(
            options.classpath,
            vec![PathBuf::from("a.jar"), PathBuf::from("b.jar")]
        );
        assert_eq!(options.source.as_deref(), Some("11"));
        assert_eq!(options.target.as_deref(), Some("11"));
        assert_eq!(options.warn, vec!["unusedLocals", "deprecation"]);
        assert_eq!(options.debug_info, vec!["lines", "vars"]);
        assert_eq!(options.destination_dir, Some(PathBuf::from("out")));
        assert!(options.x_no_inline);
        assert!(options.version);
        assert_eq!(
            options.files,
            vec![PathBuf::from("A.java"), PathBuf::from("B.java")]
        );
        assert_eq!(options.files_policy, FilesPolicy::Optional);
    }

    #[test]
    fn test_ajc_args_files_policy() {
        let config = Config {
            aspectj: ToolConfig {
                classpath: vec![PathBuf::from("tools/aspectjtools.jar")],
                files_policy: Some(FilesPolicy::Skip),
            },
            ..Default::default()
        };

        let cli = TestCli::parse_from(["test"]);
        let options = cli.ajc.to_options(&context(config.clone())).unwrap();
        assert_eq!(options.files_policy, FilesPolicy::Skip);
        assert_eq!(
            options.aspectj_classpath,
            vec![PathBuf::from("/repo/tools/aspectjtools.jar")]
        );

        let cli = TestCli::parse_from(["test", "--require-files"]);
        let options = cli.ajc.to_options(&context(config)).unwrap();
        assert_eq!(options.files_policy, FilesPolicy::Required);
    }

    #[test]
    fn test_ajc_args_rejects_unknown_warning() {
        assert!(TestCli::try_parse_from(["test", "--warn", "everything"]).is_err());
    }
}
