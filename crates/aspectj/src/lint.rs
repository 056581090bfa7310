use std::fmt::Display;

/// Categories accepted by `-warn:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WarnCategory {
    /// method with constructor name
    ConstructorName,
    /// attempt to override package-default method
    PackageDefaultMethod,
    /// usage of deprecated type or member
    Deprecation,
    /// hidden catch block
    MaskedCatchBlocks,
    /// local variable never read
    UnusedLocals,
    /// method argument never read
    UnusedArguments,
    /// import statement not used by code in file
    UnusedImports,
    /// suppress all compiler warnings
    None,
}

impl WarnCategory {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ConstructorName => "constructorName",
            Self::PackageDefaultMethod => "packageDefaultMethod",
            Self::Deprecation => "deprecation",
            Self::MaskedCatchBlocks => "maskedCatchBlocks",
            Self::UnusedLocals => "unusedLocals",
            Self::UnusedArguments => "unusedArguments",
            Self::UnusedImports => "unusedImports",
            Self::None => "none",
        }
    }
}

impl Display for WarnCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Debug attribute levels accepted by `-g:`. `none` drops all debug info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DebugInfo {
    Lines,
    Vars,
    Source,
    None,
}

impl DebugInfo {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lines => "lines",
            Self::Vars => "vars",
            Self::Source => "source",
            Self::None => "none",
        }
    }
}

impl Display for DebugInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
