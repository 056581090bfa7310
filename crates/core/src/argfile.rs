use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// A uniquely named temporary file holding one argument per line.
///
/// The file is removed when the value is dropped unless [`ArgFile::keep`] is
/// called.
#[derive(Debug)]
pub struct ArgFile {
    file: NamedTempFile,
}

impl ArgFile {
    /// Write `args` one per line. Tokens are written literally.
    ///
    /// # Errors
    /// Returns error if the temp file cannot be created or written.
    pub fn write(prefix: &str, args: &[String], temp_dir: Option<&Path>) -> io::Result<Self> {
        Self::write_lines(prefix, args.iter().map(String::as_str), temp_dir)
    }

    /// Write `args` in the JVM launcher's `@file` syntax, quoting tokens the
    /// launcher would otherwise split or interpret.
    ///
    /// # Errors
    /// Returns error if the temp file cannot be created or written.
    pub fn write_for_launcher(
        prefix: &str,
        args: &[String],
        temp_dir: Option<&Path>,
    ) -> io::Result<Self> {
        let quoted = args
            .iter()
            .map(|arg| quote_launcher_token(arg))
            .collect::<Vec<_>>();
        Self::write_lines(prefix, quoted.iter().map(String::as_str), temp_dir)
    }

    fn write_lines<'a>(
        prefix: &str,
        lines: impl Iterator<Item = &'a str>,
        temp_dir: Option<&Path>,
    ) -> io::Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(prefix).suffix(".options");
        let mut file = match temp_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        for line in lines {
            writeln!(file, "{line}")?;
        }
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Keep the file on disk and return its path.
    ///
    /// # Errors
    /// Returns error if the file cannot be persisted.
    pub fn keep(self) -> io::Result<PathBuf> {
        let (_, path) = self.file.keep().map_err(|e| e.error)?;
        Ok(path)
    }
}

fn quote_launcher_token(token: &str) -> String {
    let needs_quotes = token.is_empty()
        || token.starts_with('#')
        || token
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '\\'));
    if !needs_quotes {
        return token.to_string();
    }
    let mut quoted = String::with_capacity(token.len() + 2);
    quoted.push('"');
    for c in token.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
