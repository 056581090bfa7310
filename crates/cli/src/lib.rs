use anyhow::Result;

use clap::{Parser, Subcommand};
use tracing::Level;

use crate::commands::{
    AjcArgs, CiArgs, ConfigArgs, InitArgs, PostCompileArgs, handle_ajc, handle_ci, handle_config,
    handle_init, handle_post_compile,
};
pub mod commands;
mod context;
pub mod options;
mod run_tool;
mod telemetry;

pub use telemetry::init_tracing;

#[derive(Parser, Debug)]
#[command(
    name = "argweave",
    author,
    version,
    about = "Render JVM build tool options into argument files and run the tools",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log rendered arguments and launched commands to stderr
    #[arg(long, global = true, default_value = "false")]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Ajc(AjcArgs),
    PostCompile(PostCompileArgs),
    Ci(CiArgs),
    Config(ConfigArgs),
    Init(InitArgs),
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    init_tracing(if cli.debug { Level::DEBUG } else { Level::WARN });
    match cli.command {
        Commands::Ajc(args) => handle_ajc(&args).await?,
        Commands::PostCompile(args) => handle_post_compile(&args).await?,
        Commands::Ci(args) => handle_ci(&args).await?,
        Commands::Config(args) => handle_config(&args).await?,
        Commands::Init(args) => handle_init(&args).await?,
    }
    Ok(())
}
