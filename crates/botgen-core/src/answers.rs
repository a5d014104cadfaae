//! Answer collection: the three values the generator needs from the user

use crate::naming;
use anyhow::Result;
use std::path::PathBuf;

pub const DEFAULT_BOT_NAME: &str = "echo";
pub const DEFAULT_PACKAGE_NAME: &str = "echo";

/// Answers collected once per invocation and read-only afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    /// Human-readable bot name, as typed
    pub bot_name: String,

    /// Dot-separated package identifier, as typed
    pub package_name: String,

    /// Selected template label; only its first token is significant
    pub template: String,
}

impl AnswerSet {
    /// Key of the bundled template to copy
    pub fn template_key(&self) -> String {
        template_key(&self.template)
    }

    pub fn directory_name(&self) -> String {
        naming::directory_name(&self.bot_name)
    }

    pub fn package_path(&self) -> PathBuf {
        naming::package_path(&self.package_name)
    }
}

/// A template offered in the selection prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateChoice {
    pub key: String,
    pub description: String,
}

impl TemplateChoice {
    /// Label shown to the user, e.g. `echo - Echo bot that repeats...`
    pub fn label(&self) -> String {
        if self.description.is_empty() {
            self.key.clone()
        } else {
            format!("{} - {}", self.key, self.description)
        }
    }
}

/// Something that can produce an `AnswerSet`: interactive prompts, CLI flags, tests
///
/// Returning `Err` aborts generation before anything is written.
pub trait AnswerSource {
    fn collect(&self, choices: &[TemplateChoice]) -> Result<AnswerSet>;
}

/// Answers given up front; any missing value takes its default
#[derive(Debug, Clone, Default)]
pub struct PresetAnswers {
    pub bot_name: Option<String>,
    pub package_name: Option<String>,
    pub template: Option<String>,
}

impl PresetAnswers {
    pub fn is_complete(&self) -> bool {
        self.bot_name.is_some() && self.package_name.is_some() && self.template.is_some()
    }
}

impl AnswerSource for PresetAnswers {
    fn collect(&self, choices: &[TemplateChoice]) -> Result<AnswerSet> {
        let template = match &self.template {
            Some(template) => template.clone(),
            None => choices
                .first()
                .map(TemplateChoice::label)
                .ok_or_else(|| anyhow::anyhow!("No templates found."))?,
        };

        Ok(AnswerSet {
            bot_name: or_default(self.bot_name.as_deref(), DEFAULT_BOT_NAME),
            package_name: or_default(self.package_name.as_deref(), DEFAULT_PACKAGE_NAME),
            template,
        })
    }
}

/// First whitespace-delimited token of a template selection, lowercased
pub fn template_key(selection: &str) -> String {
    selection
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Free-text answer, falling back to `default` when blank
pub(crate) fn or_default(input: Option<&str>, default: &str) -> String {
    match input.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}
