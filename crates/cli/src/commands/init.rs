use tokio::fs::{create_dir_all, write};

use anyhow::Result;
use argweave_core::Config;
use argweave_utils::get_argweave_dir;
use clap::Args;

#[derive(Args, Debug)]
#[command(about = "Create .argweave/config.json with default settings")]
pub struct InitArgs {
    /// If true, do not make any filesystem changes.
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

/// Initialize argweave configuration
pub async fn handle_init(args: &InitArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let argweave_dir = get_argweave_dir(&current_dir);
    let config_file = argweave_dir.join("config.json");
    if config_file.exists() {
        return Err(anyhow::anyhow!("argweave already initialized"));
    }
    if !args.dry_run {
        create_dir_all(&argweave_dir).await?;
        write(&config_file, serde_json::to_string_pretty(&Config::default())?).await?;
    }

    println!("argweave initialized in {}", argweave_dir.display());
    Ok(())
}
