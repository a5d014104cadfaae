//! Template fetching from the bundled set or a local directory
//!
//! Templates are embedded into the binary at compile time. A local directory
//! with the same layout can be used instead while developing templates.

use super::manifest::{RootManifest, TemplateManifest};
use super::subtree::{join_slash_path, Subtree};
use crate::answers::TemplateChoice;
use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use anyhow::{Context, Result};
use rust_embed::RustEmbed;
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Templates shipped inside the binary
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../templates"]
struct BundledTemplates;

/// Template source - either the bundled set or a local directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Bundled,
    Local(PathBuf),
}

impl TemplateSource {
    /// Bundled templates, unless the config's env var points at a local directory
    pub fn from_config<C: GeneratorConfig>(config: &C) -> Self {
        match std::env::var_os(config.template_dir_env()) {
            Some(dir) if !dir.is_empty() => Self::Local(PathBuf::from(dir)),
            _ => Self::Bundled,
        }
    }

    /// Create a local template source from a path
    pub fn local(path: PathBuf) -> Self {
        Self::Local(path)
    }
}

/// A file read from a template subtree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the subtree root, `/`-separated, placeholders unrendered
    pub path: String,
    pub contents: Vec<u8>,
}

/// Template fetcher - reads manifests and files from a template source
pub struct TemplateFetcher {
    source: TemplateSource,
}

impl TemplateFetcher {
    pub fn new(source: TemplateSource) -> Self {
        Self { source }
    }

    /// Fetcher over the templates embedded in the binary
    pub fn bundled() -> Self {
        Self::new(TemplateSource::Bundled)
    }

    /// Create a fetcher from a generator config
    pub fn from_config<C: GeneratorConfig>(config: &C) -> Self {
        Self::new(TemplateSource::from_config(config))
    }

    /// Create a fetcher for local templates
    pub fn from_local(path: PathBuf) -> Self {
        Self::new(TemplateSource::local(path))
    }

    /// Get the template source
    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Read a file by its `/`-separated path relative to the templates root
    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        match &self.source {
            TemplateSource::Bundled => BundledTemplates::get(path)
                .map(|file| file.data.into_owned())
                .ok_or_else(|| anyhow::anyhow!("File '{}' not found in bundled templates", path)),
            TemplateSource::Local(root) => {
                let full_path = join_slash_path(root, path);
                fs::read(&full_path)
                    .await
                    .with_context(|| format!("Failed to read {}", full_path.display()))
            }
        }
    }

    /// List files under a `/`-separated directory, relative to it and sorted
    fn list(&self, dir: &str) -> Result<Vec<String>> {
        match &self.source {
            TemplateSource::Bundled => {
                let prefix = format!("{}/", dir.trim_end_matches('/'));
                let mut files: Vec<String> = BundledTemplates::iter()
                    .filter_map(|path| path.strip_prefix(&prefix).map(str::to_string))
                    .collect();
                files.sort();
                Ok(files)
            }
            TemplateSource::Local(root) => {
                let base = join_slash_path(root, dir);
                if !base.is_dir() {
                    return Ok(Vec::new());
                }

                let mut files = Vec::new();
                for entry in WalkDir::new(&base).sort_by_file_name() {
                    let entry = entry
                        .with_context(|| format!("Failed to list {}", base.display()))?;
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    let relative = entry.path().strip_prefix(&base).with_context(|| {
                        format!("{} is outside {}", entry.path().display(), base.display())
                    })?;
                    files.push(to_slash_path(relative));
                }
                Ok(files)
            }
        }
    }

    /// Fetch the root manifest listing available templates
    pub async fn fetch_root_manifest(&self) -> Result<RootManifest> {
        let content = self.read("template.yaml").await?;
        serde_yaml::from_slice(&content).context("Failed to parse root manifest")
    }

    /// Fetch a specific template's manifest
    pub async fn fetch_template_manifest(&self, key: &str) -> Result<TemplateManifest> {
        let content = self.read(&format!("{}/template.yaml", key)).await?;
        serde_yaml::from_slice(&content)
            .with_context(|| format!("Failed to parse template '{}' manifest", key))
    }

    /// Entries for the template selection prompt, in root manifest order
    pub async fn template_choices(&self) -> Result<Vec<TemplateChoice>> {
        let root = self.fetch_root_manifest().await?;
        let mut choices = Vec::with_capacity(root.templates.len());
        for key in &root.templates {
            let manifest = self.fetch_template_manifest(key).await?;
            choices.push(manifest.choice(key));
        }
        Ok(choices)
    }

    /// Look up a template by key, failing if the root manifest does not list it
    pub async fn resolve(&self, key: &str) -> Result<TemplateManifest> {
        let root = self.fetch_root_manifest().await?;
        if !root.contains(key) {
            return Err(GeneratorError::UnknownTemplate {
                key: key.to_string(),
                available: root.templates,
            }
            .into());
        }
        self.fetch_template_manifest(key).await
    }

    /// Read every file of one subtree of a template
    pub async fn subtree_files(&self, key: &str, subtree: Subtree) -> Result<Vec<TemplateFile>> {
        let dir = format!("{}/{}", key, subtree.source_dir());
        let mut files = Vec::new();
        for path in self.list(&dir)? {
            let contents = self.read(&format!("{}/{}", dir, path)).await?;
            files.push(TemplateFile { path, contents });
        }
        Ok(files)
    }
}

fn to_slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(files: &[TemplateFile]) -> Vec<&str> {
        files.iter().map(|f| f.path.as_str()).collect()
    }

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = join_slash_path(root, relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    #[tokio::test]
    async fn test_bundled_lists_echo() {
        let fetcher = TemplateFetcher::bundled();
        let root = fetcher.fetch_root_manifest().await.unwrap();
        assert!(root.contains("echo"));

        let choices = fetcher.template_choices().await.unwrap();
        assert_eq!(choices[0].key, "echo");
        assert!(choices[0].label().starts_with("echo - "));
    }

    #[tokio::test]
    async fn test_bundled_echo_subtrees() {
        let fetcher = TemplateFetcher::bundled();

        let tree = fetcher.subtree_files("echo", Subtree::Project).await.unwrap();
        let tree_paths = paths(&tree);
        assert!(tree_paths.contains(&"pom.xml"));
        assert!(tree_paths.contains(&"README.md"));
        assert!(tree_paths.contains(&"src/main/resources/application.properties"));

        let main = fetcher.subtree_files("echo", Subtree::MainSource).await.unwrap();
        assert_eq!(paths(&main), vec!["Application.java", "EchoBot.java"]);

        let test = fetcher.subtree_files("echo", Subtree::TestSource).await.unwrap();
        assert_eq!(paths(&test), vec!["ApplicationTest.java"]);
    }

    #[tokio::test]
    async fn test_resolve_unknown_template() {
        let err = TemplateFetcher::bundled().resolve("welcome").await.unwrap_err();
        match err.downcast_ref::<GeneratorError>() {
            Some(GeneratorError::UnknownTemplate { key, available }) => {
                assert_eq!(key, "welcome");
                assert!(available.contains(&"echo".to_string()));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_local_source() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "template.yaml", "templates:\n  - demo\n");
        write(
            dir.path(),
            "demo/template.yaml",
            "name: demo\ndescription: Demo bot\nversion: 0.1.0\n",
        );
        write(dir.path(), "demo/tree/b.txt", "b");
        write(dir.path(), "demo/tree/nested/a.txt", "a");
        write(dir.path(), "demo/src/main/java/Bot.java", "class Bot {}");

        let fetcher = TemplateFetcher::from_local(dir.path().to_path_buf());
        let manifest = fetcher.resolve("demo").await.unwrap();
        assert_eq!(manifest.description, "Demo bot");

        let tree = fetcher.subtree_files("demo", Subtree::Project).await.unwrap();
        assert_eq!(paths(&tree), vec!["b.txt", "nested/a.txt"]);
        assert_eq!(tree[1].contents, b"a");

        // Missing subtree directories are simply empty
        let tests = fetcher.subtree_files("demo", Subtree::TestSource).await.unwrap();
        assert!(tests.is_empty());
    }

    #[tokio::test]
    async fn test_local_source_missing_root_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = TemplateFetcher::from_local(dir.path().to_path_buf());
        assert!(fetcher.fetch_root_manifest().await.is_err());
    }
}
