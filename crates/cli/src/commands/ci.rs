use anyhow::Result;
use argweave_utils::{detect_ci, env_var, get_project_root, get_ref, get_sha};
use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::options::FormatOptions;

#[derive(Args, Debug)]
#[command(about = "Show the detected CI system and the commit being built")]
pub struct CiArgs {
    #[arg(long, default_value = "stdout")]
    format: FormatOptions,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CiInfo {
    ci: Option<String>,
    sha: String,
    git_ref: Option<String>,
}

/// Print CI system, commit SHA and ref
pub async fn handle_ci(args: &CiArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let project_root = get_project_root(&current_dir);

    let ci = detect_ci(env_var);
    let sha = get_sha(&project_root, env_var).await?;
    // detached HEAD has no symbolic ref
    let git_ref = match get_ref(&project_root, env_var).await {
        Ok(git_ref) => Some(git_ref),
        Err(e) => {
            debug!(error = %e, "could not resolve ref");
            None
        }
    };

    let info = CiInfo {
        ci: ci.map(|ci| ci.to_string()),
        sha,
        git_ref,
    };
    args.format.print(
        &format!(
            "CI: {}\nSHA: {}\nRef: {}",
            info.ci.as_deref().unwrap_or("none"),
            info.sha,
            info.git_ref.as_deref().unwrap_or("(detached)")
        ),
        &serde_json::to_string_pretty(&info)?,
    );
    Ok(())
}
