//! Template manifest types and parsing

use crate::answers::TemplateChoice;
use serde::{Deserialize, Serialize};

/// Root template manifest (templates/template.yaml)
/// Lists the template directories bundled with the tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootManifest {
    /// List of template directory names
    pub templates: Vec<String>,
}

impl RootManifest {
    pub fn contains(&self, key: &str) -> bool {
        self.templates.iter().any(|t| t == key)
    }
}

/// Per-template manifest (templates/<key>/template.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Display name of the template
    pub name: String,

    /// Description of what the template provides
    #[serde(default)]
    pub description: String,

    /// Semver version for CLI compatibility checking
    pub version: String,
}

impl TemplateManifest {
    /// Selection entry for the template stored under `key`
    pub fn choice(&self, key: &str) -> TemplateChoice {
        TemplateChoice {
            key: key.to_string(),
            description: self.description.clone(),
        }
    }
}
