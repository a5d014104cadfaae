//! Template fetching, parsing, and copying
//!
//! This module provides:
//! - Template manifest types (RootManifest, TemplateManifest)
//! - Template fetching from the bundled set or a local directory
//! - Template copying with placeholder substitution
//! - Version compatibility checking

pub mod copier;
pub mod fetcher;
pub mod manifest;
pub mod subtree;
pub mod version;

use anyhow::Result;
use colored::Colorize;

pub use copier::{HandlebarsCopier, Substitutions, TemplateCopier};
pub use fetcher::{TemplateFetcher, TemplateFile, TemplateSource};
pub use manifest::{RootManifest, TemplateManifest};
pub use subtree::Subtree;
pub use version::check_compatibility;

/// Print the templates available from a fetcher's source
pub async fn print_catalog(fetcher: &TemplateFetcher) -> Result<()> {
    let choices = fetcher.template_choices().await?;

    let origin = match fetcher.source() {
        TemplateSource::Bundled => "bundled".to_string(),
        TemplateSource::Local(path) => path.display().to_string(),
    };
    println!(
        "{}",
        format!("Available templates ({})", origin).cyan().bold()
    );
    println!();

    for choice in &choices {
        print!("  {} {}", "->".blue(), choice.key.bold());
        if choice.description.is_empty() {
            println!();
        } else {
            println!(" - {}", choice.description);
        }
    }

    println!();
    println!("{} {} template(s)", "Found".green().bold(), choices.len());

    Ok(())
}
