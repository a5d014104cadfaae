//! Errors callers may want to match on
//!
//! Everything else (I/O, manifest parsing) travels as `anyhow::Error` with
//! context naming the path involved.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The user aborted a prompt before all answers were collected
    #[error("Setup cancelled.")]
    Cancelled,

    /// No bundled template matches the selected key
    #[error("Template '{key}' not found. Available templates: {}", available.join(", "))]
    UnknownTemplate { key: String, available: Vec<String> },

    /// The template is listed but none of its subtrees contain files
    #[error("Template '{key}' does not contain any files")]
    EmptyTemplate { key: String },

    /// A placeholder in a file name or file body could not be rendered
    #[error("Failed to render template file {}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: handlebars::RenderError,
    },
}

impl GeneratorError {
    /// Map a prompt I/O error, treating an interrupted prompt as cancellation
    pub fn from_prompt(err: std::io::Error) -> anyhow::Error {
        if err.kind() == std::io::ErrorKind::Interrupted {
            GeneratorError::Cancelled.into()
        } else {
            anyhow::Error::new(err).context("Failed to read answer")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_template_lists_available() {
        let err = GeneratorError::UnknownTemplate {
            key: "welcome".to_string(),
            available: vec!["echo".to_string(), "core".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Template 'welcome' not found. Available templates: echo, core"
        );
    }

    #[test]
    fn test_interrupted_prompt_is_cancellation() {
        let err = GeneratorError::from_prompt(std::io::Error::from(
            std::io::ErrorKind::Interrupted,
        ));
        assert!(matches!(
            err.downcast_ref::<GeneratorError>(),
            Some(GeneratorError::Cancelled)
        ));
    }

    #[test]
    fn test_other_prompt_errors_stay_io() {
        let err = GeneratorError::from_prompt(std::io::Error::from(
            std::io::ErrorKind::BrokenPipe,
        ));
        assert!(err.downcast_ref::<GeneratorError>().is_none());
        assert!(err.root_cause().downcast_ref::<std::io::Error>().is_some());
    }
}
