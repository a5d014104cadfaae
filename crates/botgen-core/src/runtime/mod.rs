//! Runtime detection for the generated project's toolchain
//!
//! Generated bots are Maven projects, so this checks for a Java runtime and
//! Maven. The check is advisory: missing tools are reported, never fatal.

pub mod check;

pub use check::{check_java, check_maven, check_runtimes, missing_hints, RuntimeInfo};
