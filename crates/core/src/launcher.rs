use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

/// A fully resolved child process command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    /// Inherit stdout/stderr instead of capturing them.
    pub stream_output: bool,
}

/// What came back from the child. Streams that were inherited are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Spawns a command and waits for it to exit.
///
/// Lets the runner be exercised without a JVM. Production code uses
/// `SystemLauncher`.
#[async_trait]
pub trait Launcher: Send + Sync {
    /// # Errors
    /// Returns error if the process cannot be spawned or waited on.
    async fn launch(&self, command: &CommandSpec) -> std::io::Result<ProcessOutput>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

#[async_trait]
impl Launcher for SystemLauncher {
    async fn launch(&self, command: &CommandSpec) -> std::io::Result<ProcessOutput> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args).stdin(Stdio::null());
        if let Some(dir) = &command.working_dir {
            cmd.current_dir(dir);
        }

        if command.stream_output {
            let status = cmd
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .await?;
            return Ok(ProcessOutput {
                exit_code: status.code(),
                ..Default::default()
            });
        }

        let output = cmd
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;
        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell(script: &str, stream_output: bool) -> CommandSpec {
        if cfg!(target_os = "windows") {
            CommandSpec {
                program: PathBuf::from("cmd"),
                args: vec!["/C".to_string(), script.to_string()],
                working_dir: Some(std::env::temp_dir()),
                stream_output,
            }
        } else {
            CommandSpec {
                program: PathBuf::from("sh"),
                args: vec!["-c".to_string(), script.to_string()],
                working_dir: Some(std::env::temp_dir()),
                stream_output,
            }
        }
    }

    #[tokio::test]
    async fn test_system_launcher_captures_output() {
        let output = SystemLauncher.launch(&shell("echo woven", false)).await.unwrap();
        assert!(output.success());
        assert!(output.stdout.contains("woven"));
    }

    #[tokio::test]
    async fn test_system_launcher_propagates_exit_code() {
        let output = SystemLauncher.launch(&shell("exit 7", false)).await.unwrap();
        assert!(!output.success());
        assert_eq!(output.exit_code, Some(7));
    }

    #[tokio::test]
    async fn test_system_launcher_streaming_leaves_output_empty() {
        let output = SystemLauncher.launch(&shell("echo streamed", true)).await.unwrap();
        assert!(output.success());
        assert!(output.stdout.is_empty());
    }

    #[tokio::test]
    async fn test_system_launcher_missing_program() {
        let command = CommandSpec {
            program: PathBuf::from("argweave-definitely-missing-program"),
            args: vec![],
            working_dir: None,
            stream_output: false,
        };
        assert!(SystemLauncher.launch(&command).await.is_err());
    }
}
