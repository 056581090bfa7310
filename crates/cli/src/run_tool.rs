use std::path::PathBuf;

use anyhow::Result;
use argweave_core::{InvocationResult, Runner, Tool};
use colored::Colorize;
use serde::Serialize;

use crate::options::FormatOptions;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct DryRunReport<'a> {
    tool: &'static str,
    skipped: bool,
    java: PathBuf,
    args: &'a [String],
}

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct InvocationReport {
    tool: &'static str,
    skipped: bool,
    success: bool,
    exit_code: Option<i32>,
    duration_ms: Option<u64>,
    argfile: Option<PathBuf>,
}

impl From<&InvocationResult> for InvocationReport {
    fn from(result: &InvocationResult) -> Self {
        let (duration_ms, argfile) = match result {
            InvocationResult::Skipped { .. } => (None, None),
            InvocationResult::Finished {
                duration_ms,
                argfile,
                ..
            } => (Some(*duration_ms), argfile.clone()),
        };
        Self {
            tool: result.tool().config_key(),
            skipped: result.is_skipped(),
            success: result.success(),
            exit_code: result.exit_code(),
            duration_ms,
            argfile,
        }
    }
}

/// Render and run `tool`, reporting in `format`. A failed tool run is
/// returned as an error after the report is printed.
pub(crate) async fn run_tool(
    runner: &Runner,
    tool: &dyn Tool,
    dry_run: bool,
    format: &FormatOptions,
) -> Result<()> {
    let kind = tool.kind();

    if dry_run {
        let runnable = runner.validate(tool)?;
        let args = if runnable {
            runner.render(tool)
        } else {
            Vec::new()
        };
        match format {
            FormatOptions::Stdout if !runnable => {
                println!("{} skipped, no input files (dry run)", kind);
            }
            FormatOptions::Stdout => {
                println!("{} arguments (dry run, nothing will be executed):", kind);
                for arg in &args {
                    println!("  {arg}");
                }
            }
            FormatOptions::Json => {
                let report = DryRunReport {
                    tool: kind.config_key(),
                    skipped: !runnable,
                    java: runner.java().to_path_buf(),
                    args: &args,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        return Ok(());
    }

    if let FormatOptions::Stdout = format {
        println!("Running {}...", kind);
    }
    let result = runner.run(tool).await?;

    match format {
        FormatOptions::Stdout => match &result {
            InvocationResult::Skipped { .. } => {
                println!("{} skipped, no input files", kind);
            }
            InvocationResult::Finished {
                duration_ms,
                argfile,
                ..
            } if result.success() => {
                println!(
                    "{} {}",
                    format!("{} finished", kind).bright_green(),
                    format!("({duration_ms} ms)").bright_black()
                );
                if let Some(argfile) = argfile {
                    println!("Argument file kept at {}", argfile.display());
                }
            }
            InvocationResult::Finished { .. } => {}
        },
        FormatOptions::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&InvocationReport::from(&result))?
            );
        }
    }

    result.ensure_success()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use argweave_core::ToolKind;

    #[test]
    fn test_invocation_report_from_finished() {
        let result = InvocationResult::Finished {
            tool: ToolKind::AspectJ,
            exit_code: Some(2),
            stdout: String::new(),
            stderr: String::new(),
            duration_ms: 12,
            argfile: Some(PathBuf::from("/tmp/ajc-x.options")),
        };
        assert_eq!(
            InvocationReport::from(&result),
            InvocationReport {
                tool: "aspectj",
                skipped: false,
                success: false,
                exit_code: Some(2),
                duration_ms: Some(12),
                argfile: Some(PathBuf::from("/tmp/ajc-x.options")),
            }
        );
    }

    #[test]
    fn test_invocation_report_json_fields() {
        let result = InvocationResult::Skipped {
            tool: ToolKind::Lombok,
        };
        let json = serde_json::to_value(InvocationReport::from(&result)).unwrap();
        assert_eq!(json["tool"], "lombok");
        assert_eq!(json["skipped"], true);
        assert_eq!(json["success"], true);
        assert!(json["exitCode"].is_null());
        assert!(json["durationMs"].is_null());
    }
}
