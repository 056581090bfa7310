use anyhow::Result;
use argweave_core::{Config, Runner, ToolKind, absolutize};
use argweave_utils::{get_argweave_config, get_project_root};
use std::path::PathBuf;

pub struct CommandContext {
    pub current_dir: PathBuf,
    pub project_root: PathBuf,
    pub config: Config,
}

impl CommandContext {
    /// # Errors
    /// Returns error if the current directory is unavailable or the config file is invalid.
    pub async fn new() -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        let project_root = get_project_root(&current_dir);
        let config = get_argweave_config(&current_dir).await?;
        Ok(Self {
            current_dir,
            project_root,
            config,
        })
    }

    /// Runner for the current directory, configured from the config file.
    pub fn runner(&self) -> Runner {
        let java_home = std::env::var_os("JAVA_HOME");
        Runner::from_config(&self.config, java_home.as_deref()).with_working_dir(&self.current_dir)
    }

    /// Launcher classpath for `kind`: the command line value if given,
    /// otherwise the config value resolved against the project root.
    pub fn tool_classpath(&self, kind: ToolKind, from_cli: Vec<PathBuf>) -> Vec<PathBuf> {
        if !from_cli.is_empty() {
            return from_cli;
        }
        self.config
            .tool(kind)
            .classpath
            .iter()
            .map(|path| absolutize(Some(&self.project_root), path))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argweave_core::ToolConfig;

    fn context() -> CommandContext {
        CommandContext {
            current_dir: PathBuf::from("/repo/module"),
            project_root: PathBuf::from("/repo"),
            config: Config {
                aspectj: ToolConfig {
                    classpath: vec![
                        PathBuf::from("tools/aspectjtools.jar"),
                        PathBuf::from("/opt/aspectjrt.jar"),
                    ],
                    files_policy: None,
                },
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_tool_classpath_from_config() {
        assert_eq!(
            context().tool_classpath(ToolKind::AspectJ, vec![]),
            vec![
                PathBuf::from("/repo/tools/aspectjtools.jar"),
                PathBuf::from("/opt/aspectjrt.jar")
            ]
        );
    }

    #[test]
    fn test_tool_classpath_cli_wins() {
        assert_eq!(
            context().tool_classpath(ToolKind::AspectJ, vec![PathBuf::from("cli.jar")]),
            vec![PathBuf::from("cli.jar")]
        );
    }

    #[test]
    fn test_tool_classpath_missing() {
        assert!(context().tool_classpath(ToolKind::Lombok, vec![]).is_empty());
    }
}
