use std::path::PathBuf;

use crate::{InvocationError, ToolKind};

/// Outcome of one invocation. Whether a non-zero exit fails the build is up
/// to the caller, usually via [`InvocationResult::ensure_success`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationResult {
    /// The positional file set was empty and the tool asked to be skipped.
    Skipped { tool: ToolKind },
    Finished {
        tool: ToolKind,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration_ms: u64,
        /// Set when the argument file was kept on disk.
        argfile: Option<PathBuf>,
    },
}

impl InvocationResult {
    #[must_use]
    pub fn tool(&self) -> ToolKind {
        match self {
            Self::Skipped { tool } | Self::Finished { tool, .. } => *tool,
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Skipped { .. } => None,
            Self::Finished { exit_code, .. } => *exit_code,
        }
    }

    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }

    /// A skipped invocation counts as a success.
    #[must_use]
    pub fn success(&self) -> bool {
        match self {
            Self::Skipped { .. } => true,
            Self::Finished { exit_code, .. } => *exit_code == Some(0),
        }
    }

    /// Turn a non-zero exit into [`InvocationError::Failed`].
    ///
    /// # Errors
    /// Returns error carrying the exit code and captured output on failure.
    pub fn ensure_success(self) -> Result<Self, InvocationError> {
        if self.success() {
            return Ok(self);
        }
        match self {
            Self::Finished {
                tool,
                exit_code,
                stdout,
                stderr,
                ..
            } => {
                let output = [stdout.trim_end(), stderr.trim_end()]
                    .into_iter()
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join("\n");
                Err(InvocationError::Failed {
                    tool,
                    code: exit_code,
                    output,
                })
            }
            Self::Skipped { .. } => Ok(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(exit_code: Option<i32>) -> InvocationResult {
        InvocationResult::Finished {
            tool: ToolKind::AspectJ,
            exit_code,
            stdout: "out".to_string(),
            stderr: "err".to_string(),
            duration_ms: 5,
            argfile: None,
        }
    }

    #[test]
    fn test_success_result() {
        let result = finished(Some(0));
        assert!(result.success());
        assert_eq!(result.exit_code(), Some(0));
        assert!(result.ensure_success().is_ok());
    }

    #[test]
    fn test_failed_result_keeps_exact_code() {
        let err = finished(Some(42)).ensure_success().unwrap_err();
        assert_eq!(err.exit_code(), Some(42));
        match err {
            InvocationError::Failed { output, .. } => assert_eq!(output, "out\nerr"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_signal_terminated_is_failure() {
        assert!(!finished(None).success());
        assert!(finished(None).ensure_success().is_err());
    }

    #[test]
    fn test_skipped_result() {
        let result = InvocationResult::Skipped {
            tool: ToolKind::Lombok,
        };
        assert!(result.is_skipped());
        assert!(result.success());
        assert_eq!(result.exit_code(), None);
        assert_eq!(result.tool(), ToolKind::Lombok);
        assert!(result.ensure_success().is_ok());
    }
}
