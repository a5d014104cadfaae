//! The three subtrees every template is split into

use std::path::{Path, PathBuf};

/// Main sources follow the Maven `src/main/java` convention
const MAIN_JAVA: &str = "src/main/java";
const TEST_JAVA: &str = "src/test/java";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subtree {
    /// Supporting files (build config, README, ...) copied to the project root
    Project,
    /// Sources copied under `src/main/java/<package path>`
    MainSource,
    /// Tests copied under `src/test/java/<package path>`
    TestSource,
}

impl Subtree {
    pub const ALL: [Subtree; 3] = [Subtree::Project, Subtree::MainSource, Subtree::TestSource];

    /// Directory inside the template holding this subtree, `/`-separated
    pub fn source_dir(&self) -> &'static str {
        match self {
            Subtree::Project => "tree",
            Subtree::MainSource => MAIN_JAVA,
            Subtree::TestSource => TEST_JAVA,
        }
    }

    /// Directory the subtree is copied into
    pub fn destination(&self, root: &Path, package_path: &Path) -> PathBuf {
        match self {
            Subtree::Project => root.to_path_buf(),
            Subtree::MainSource => join_slash_path(root, MAIN_JAVA).join(package_path),
            Subtree::TestSource => join_slash_path(root, TEST_JAVA).join(package_path),
        }
    }

    /// Whether the bot name is substituted in this subtree (the package name always is)
    pub fn uses_bot_name(&self) -> bool {
        matches!(self, Subtree::Project)
    }
}

/// Join a `/`-separated relative path using the platform separator
pub(crate) fn join_slash_path(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|part| !part.is_empty())
        .fold(base.to_path_buf(), |acc, part| acc.join(part))
}
