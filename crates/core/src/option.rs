use std::path::{Path, PathBuf};

/// The value of one declared option, tagged with its rendering rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValue<'a> {
    /// `-flag` when true.
    Flag(bool),
    /// `-flag`, `value` when set.
    Value(Option<&'a str>),
    /// `-flag:a,b,c` when non-empty.
    List(&'a [String]),
    /// `-flag`, `a<sep>b` when non-empty.
    Paths(&'a [PathBuf]),
    /// `-flag`, `path` when set.
    Path(Option<&'a Path>),
}

/// One entry of a tool schema. `flag` is the literal token written to the
/// argument list, dashes included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolOption<'a> {
    pub flag: &'static str,
    pub value: OptionValue<'a>,
}

impl<'a> ToolOption<'a> {
    pub const fn flag(flag: &'static str, enabled: bool) -> Self {
        Self {
            flag,
            value: OptionValue::Flag(enabled),
        }
    }

    pub fn value(flag: &'static str, value: Option<&'a str>) -> Self {
        Self {
            flag,
            value: OptionValue::Value(value),
        }
    }

    pub fn list(flag: &'static str, values: &'a [String]) -> Self {
        Self {
            flag,
            value: OptionValue::List(values),
        }
    }

    pub fn paths(flag: &'static str, paths: &'a [PathBuf]) -> Self {
        Self {
            flag,
            value: OptionValue::Paths(paths),
        }
    }

    pub fn path(flag: &'static str, path: Option<&'a Path>) -> Self {
        Self {
            flag,
            value: OptionValue::Path(path),
        }
    }

    /// Every path this option carries, in rendering order.
    #[must_use]
    pub fn path_values(&self) -> Vec<&'a Path> {
        match self.value {
            OptionValue::Paths(paths) => paths.iter().map(PathBuf::as_path).collect(),
            OptionValue::Path(Some(path)) => vec![path],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_values() {
        let jars = vec![PathBuf::from("a.jar"), PathBuf::from("b.jar")];
        let warn = vec!["deprecation".to_string()];

        assert_eq!(
            ToolOption::paths("-classpath", &jars).path_values(),
            vec![Path::new("a.jar"), Path::new("b.jar")]
        );
        assert_eq!(
            ToolOption::path("-d", Some(Path::new("out"))).path_values(),
            vec![Path::new("out")]
        );
        assert!(ToolOption::path("-d", None).path_values().is_empty());
        assert!(ToolOption::list("-warn", &warn).path_values().is_empty());
        assert!(ToolOption::flag("-time", true).path_values().is_empty());
    }
}
