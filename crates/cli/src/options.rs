mod format_options;
mod lint_options;

pub use format_options::FormatOptions;
pub use lint_options::{CliDebugInfo, CliWarn};
