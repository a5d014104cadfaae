//! Project materialization: answers in, populated directory tree out
//!
//! The flow is fixed:
//! 1. Resolve the template (unknown keys fail before anything is written)
//! 2. Resolve the destination root, creating a project-named subdirectory when
//!    the destination is not already named after the bot
//! 3. Copy the project tree, main sources and test sources with substitution

use crate::answers::AnswerSet;
use crate::error::GeneratorError;
use crate::templates::{
    Subtree, Substitutions, TemplateCopier, TemplateFetcher, TemplateFile, TemplateManifest,
};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Where generated files go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationRoot {
    pub path: PathBuf,
    /// True when `path` is a subdirectory created for the project
    pub retargeted: bool,
}

/// Outcome of a successful generation
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub root: PathBuf,
    pub retargeted: bool,
    pub template: TemplateManifest,
    /// Written files, relative to `root`
    pub files: Vec<PathBuf>,
}

/// Whether `destination` must be retargeted to a `directory_name` subdirectory
///
/// A bot name with no letters or digits derives an empty directory name; the
/// destination is then used as-is.
pub fn needs_retarget(destination: &Path, directory_name: &str) -> bool {
    if directory_name.is_empty() {
        return false;
    }
    destination
        .file_name()
        .map_or(true, |name| name != directory_name)
}

/// Step 1: settle on the directory generated files are written to
pub async fn resolve_destination_root(
    destination: &Path,
    directory_name: &str,
) -> Result<DestinationRoot> {
    if !needs_retarget(destination, directory_name) {
        return Ok(DestinationRoot {
            path: destination.to_path_buf(),
            retargeted: false,
        });
    }

    announce_retarget(&mut std::io::stdout(), directory_name)?;

    let path = destination.join(directory_name);
    fs::create_dir_all(&path)
        .await
        .with_context(|| format!("Failed to create directory: {}", path.display()))?;

    Ok(DestinationRoot {
        path,
        retargeted: true,
    })
}

fn announce_retarget(out: &mut impl Write, directory_name: &str) -> Result<()> {
    writeln!(
        out,
        "{} Your bot must be inside a folder named {}. I'll automatically create this folder.",
        "info".cyan(),
        directory_name.bold()
    )
    .context("Failed to write to stdout")
}

/// Values substituted into one subtree
///
/// Raw answers are used; only the destination path sees the lowercased package.
pub fn substitutions_for(subtree: Subtree, answers: &AnswerSet) -> Substitutions {
    let mut substitutions = Substitutions::new();
    if subtree.uses_bot_name() {
        substitutions.insert("botName".to_string(), answers.bot_name.clone());
    }
    substitutions.insert("packageName".to_string(), answers.package_name.clone());
    substitutions
}

/// Copies a template into a destination using a fetcher and a copier
pub struct Materializer<'a, C: TemplateCopier> {
    fetcher: &'a TemplateFetcher,
    copier: C,
}

impl<'a, C: TemplateCopier> Materializer<'a, C> {
    pub fn new(fetcher: &'a TemplateFetcher, copier: C) -> Self {
        Self { fetcher, copier }
    }

    /// Generate the project described by `answers` under `destination`
    pub async fn materialize(
        &self,
        answers: &AnswerSet,
        destination: &Path,
    ) -> Result<GenerationReport> {
        // Step 2 runs first so a bad template leaves the filesystem untouched
        let key = answers.template_key();
        let template = self.fetcher.resolve(&key).await?;

        let mut sources: Vec<(Subtree, Vec<TemplateFile>)> = Vec::with_capacity(3);
        for subtree in Subtree::ALL {
            let files = self.fetcher.subtree_files(&key, subtree).await?;
            sources.push((subtree, files));
        }
        if sources.iter().all(|(_, files)| files.is_empty()) {
            return Err(GeneratorError::EmptyTemplate { key }.into());
        }

        let root = resolve_destination_root(destination, &answers.directory_name()).await?;
        let package_path = answers.package_path();

        let mut files = Vec::new();
        for (subtree, template_files) in &sources {
            let target_dir = subtree.destination(&root.path, &package_path);
            let written = self
                .copier
                .copy(template_files, &target_dir, &substitutions_for(*subtree, answers))
                .await?;

            files.extend(written.into_iter().map(|path| match path.strip_prefix(&root.path) {
                Ok(relative) => relative.to_path_buf(),
                Err(_) => path,
            }));
        }

        Ok(GenerationReport {
            root: root.path,
            retargeted: root.retargeted,
            template,
            files,
        })
    }
}
