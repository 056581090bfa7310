use std::path::PathBuf;

use thiserror::Error;

use crate::ToolKind;

/// Everything that can stop an invocation. None of these are retried.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("{tool} requires at least one entry in `{field}`")]
    MissingInput { tool: ToolKind, field: &'static str },

    /// A line break or a non-UTF-8 path, neither of which survives a
    /// one-token-per-line argument file.
    #[error("{tool} argument {value:?} cannot be written to an argument file")]
    UnsupportedArgument { tool: ToolKind, value: String },

    #[error("failed to write argument file: {0}")]
    ArgFile(#[source] std::io::Error),

    #[error("failed to start {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} failed with {}{}", describe_code(*code), format_output(output))]
    Failed {
        tool: ToolKind,
        code: Option<i32>,
        output: String,
    },
}

impl InvocationError {
    /// Exit code of the failed process, if it exited normally.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Failed { code, .. } => *code,
            _ => None,
        }
    }
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn format_output(output: &str) -> String {
    let trimmed = output.trim_end();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(":\n{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_display_includes_code_and_output() {
        let err = InvocationError::Failed {
            tool: ToolKind::AspectJ,
            code: Some(3),
            output: "error at A.java:1\n".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("exit code 3"));
        assert!(message.ends_with("error at A.java:1"));
        assert_eq!(err.exit_code(), Some(3));
    }

    #[test]
    fn test_failed_display_without_output() {
        let err = InvocationError::Failed {
            tool: ToolKind::Lombok,
            code: None,
            output: String::new(),
        };
        assert!(err.to_string().ends_with("no exit code (terminated by signal)"));
        assert_eq!(err.exit_code(), None);
    }

    #[test]
    fn test_missing_input_names_field() {
        let err = InvocationError::MissingInput {
            tool: ToolKind::Lombok,
            field: "classFiles",
        };
        assert!(err.to_string().contains("`classFiles`"));
    }

    #[test]
    fn test_unsupported_argument_escapes_value() {
        let err = InvocationError::UnsupportedArgument {
            tool: ToolKind::AspectJ,
            value: "A.java\n-d".to_string(),
        };
        assert!(err.to_string().contains(r#""A.java\n-d""#));
    }
}
