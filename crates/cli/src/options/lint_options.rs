use argweave_aspectj::{DebugInfo, WarnCategory};
use clap::ValueEnum;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliWarn {
    #[value(name = "constructorName")]
    ConstructorName,
    #[value(name = "packageDefaultMethod")]
    PackageDefaultMethod,
    #[value(name = "deprecation")]
    Deprecation,
    #[value(name = "maskedCatchBlocks")]
    MaskedCatchBlocks,
    #[value(name = "unusedLocals")]
    UnusedLocals,
    #[value(name = "unusedArguments")]
    UnusedArguments,
    #[value(name = "unusedImports")]
    UnusedImports,
    #[value(name = "none")]
    None,
}

impl From<CliWarn> for WarnCategory {
    fn from(value: CliWarn) -> Self {
        match value {
            CliWarn::ConstructorName => Self::ConstructorName,
            CliWarn::PackageDefaultMethod => Self::PackageDefaultMethod,
            CliWarn::Deprecation => Self::Deprecation,
            CliWarn::MaskedCatchBlocks => Self::MaskedCatchBlocks,
            CliWarn::UnusedLocals => Self::UnusedLocals,
            CliWarn::UnusedArguments => Self::UnusedArguments,
            CliWarn::UnusedImports => Self::UnusedImports,
            CliWarn::None => Self::None,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliDebugInfo {
    Lines,
    Vars,
    Source,
    None,
}

impl From<CliDebugInfo> for DebugInfo {
    fn from(value: CliDebugInfo) -> Self {
        match value {
            CliDebugInfo::Lines => Self::Lines,
            CliDebugInfo::Vars => Self::Vars,
            CliDebugInfo::Source => Self::Source,
            CliDebugInfo::None => Self::None,
        }
    }
}
