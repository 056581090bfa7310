//! # argweave-aspectj
//!
//! Option schema for the AspectJ compiler `ajc`.
//!
//! [`AjcOptions`] declares every supported `ajc` option in the order it is
//! written to the argument file. The compiler is launched through
//! `org.aspectj.tools.ajc.Main` and reads its options via `-argfile`.

pub mod lint;
pub mod options;

pub use lint::{DebugInfo, WarnCategory};
pub use options::{AJC_MAIN_CLASS, AjcOptions};
