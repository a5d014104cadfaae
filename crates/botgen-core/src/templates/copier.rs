//! Template file copying with placeholder substitution

use super::fetcher::TemplateFile;
use super::subtree::join_slash_path;
use crate::error::GeneratorError;
use anyhow::{Context, Result};
use handlebars::Handlebars;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Placeholder name -> value, e.g. `packageName` -> `com.example.bot`
pub type Substitutions = BTreeMap<String, String>;

/// Copies a set of template files into a directory, substituting placeholders
/// in both file contents and relative paths.
///
/// Existing files are overwritten. A failure stops the copy; files already
/// written stay on disk.
#[allow(async_fn_in_trait)]
pub trait TemplateCopier {
    /// Returns the paths written, in the order of `files`
    async fn copy(
        &self,
        files: &[TemplateFile],
        target_dir: &Path,
        substitutions: &Substitutions,
    ) -> Result<Vec<PathBuf>>;
}

/// `TemplateCopier` rendering `{{name}}` placeholders with Handlebars
pub struct HandlebarsCopier {
    registry: Handlebars<'static>,
}

impl HandlebarsCopier {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        // Output is source code, not HTML
        registry.register_escape_fn(handlebars::no_escape);
        Self { registry }
    }

    fn render(&self, text: &str, substitutions: &Substitutions, path: &str) -> Result<String> {
        self.registry
            .render_template(text, substitutions)
            .map_err(|source| {
                GeneratorError::Render {
                    path: PathBuf::from(path),
                    source,
                }
                .into()
            })
    }

    /// Render placeholders in each component of a `/`-separated relative path
    fn render_path(&self, path: &str, substitutions: &Substitutions) -> Result<String> {
        let parts = path
            .split('/')
            .map(|part| self.render(part, substitutions, path))
            .collect::<Result<Vec<_>>>()?;
        Ok(parts.join("/"))
    }

    /// Render text files; anything that is not UTF-8 is copied as-is
    fn render_contents(
        &self,
        file: &TemplateFile,
        substitutions: &Substitutions,
    ) -> Result<Vec<u8>> {
        match std::str::from_utf8(&file.contents) {
            Ok(text) => Ok(self.render(text, substitutions, &file.path)?.into_bytes()),
            Err(_) => Ok(file.contents.clone()),
        }
    }
}

impl Default for HandlebarsCopier {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateCopier for HandlebarsCopier {
    async fn copy(
        &self,
        files: &[TemplateFile],
        target_dir: &Path,
        substitutions: &Substitutions,
    ) -> Result<Vec<PathBuf>> {
        // Ensure target directory exists
        fs::create_dir_all(target_dir)
            .await
            .with_context(|| format!("Failed to create directory: {}", target_dir.display()))?;

        let mut written = Vec::with_capacity(files.len());

        for file in files {
            let relative = self.render_path(&file.path, substitutions)?;
            let target_path = join_slash_path(target_dir, &relative);

            // Ensure parent directories exist
            if let Some(parent) = target_path.parent() {
                fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }

            let contents = self.render_contents(file, substitutions)?;
            fs::write(&target_path, &contents)
                .await
                .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

            written.push(target_path);
        }

        Ok(written)
    }
}
