//! botgen core - Shared library for scaffolding Bot Builder Java projects
//!
//! This library turns three answers (bot name, package name, template) into a
//! buildable project skeleton copied from templates bundled with the tool.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Name derivation, template fetching, copying with substitution
//! - **Layer 2: Workflow Orchestration** - `AnswerSource` and `Materializer` for custom front-ends
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use botgen_core::{AnswerSource, HandlebarsCopier, Materializer, PresetAnswers, TemplateFetcher};
//!
//! let fetcher = TemplateFetcher::bundled();
//! let choices = fetcher.template_choices().await?;
//! let answers = PresetAnswers::default().collect(&choices)?;
//!
//! let report = Materializer::new(&fetcher, HandlebarsCopier::new())
//!     .materialize(&answers, &std::env::current_dir()?)
//!     .await?;
//! ```

pub mod answers;
pub mod config;
pub mod error;
pub mod materializer;
pub mod naming;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{AnswerSet, AnswerSource, PresetAnswers, TemplateChoice};
pub use config::GeneratorConfig;
pub use error::GeneratorError;
pub use materializer::{DestinationRoot, GenerationReport, Materializer};
pub use runtime::{check_runtimes, RuntimeInfo};
pub use templates::{
    HandlebarsCopier, RootManifest, Subtree, TemplateCopier, TemplateFetcher, TemplateFile,
    TemplateManifest, TemplateSource,
};

#[cfg(feature = "tui")]
pub use tui::run;

/// CLI version - used for template compatibility checking
/// Each binary should define its own version, but this provides a fallback
pub const DEFAULT_CLI_VERSION: &str = "0.1.0";
