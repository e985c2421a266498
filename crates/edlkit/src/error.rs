//! Error types for the designer, templates, configuration and launch.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use edlkit_core::{ErrorKind, LayoutError};

/// Errors raised while building, rendering or showing a screen.
#[derive(Error, Debug)]
pub enum DesignerError {
    /// A scene or layout operation failed.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// A widget names a template the renderer does not know.
    #[error("widget '{widget}' has non-existent template '{template}'")]
    TemplateNotFound { widget: String, template: String },

    /// A template failed to parse or render.
    #[error("template '{template}' failed: {source}")]
    Template {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// The configured template directory does not exist.
    #[error("no such template directory {}", .0.display())]
    TemplateDirMissing(PathBuf),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing rendered output to a stream failed.
    #[error("failed to write screen: {0}")]
    Write(#[source] io::Error),

    /// The configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The viewer process could not be started or waited on.
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl DesignerError {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The layout error kind, when this wraps a scene error.
    pub fn layout_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Layout(err) => Some(err.kind()),
            _ => None,
        }
    }

    /// The template error kind, when a template failed.
    pub fn template_kind(&self) -> Option<minijinja::ErrorKind> {
        match self {
            Self::Template { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

/// Result type for designer operations.
pub type Result<T> = std::result::Result<T, DesignerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use edlkit_core::NodeId;

    #[test]
    fn test_layout_errors_convert() {
        let err: DesignerError = LayoutError::NotALayout(NodeId::default()).into();
        assert_eq!(err.layout_kind(), Some(ErrorKind::Type));
    }

    #[test]
    fn test_messages() {
        let err = DesignerError::TemplateNotFound {
            widget: "gauge".into(),
            template: "dial.edl".into(),
        };
        assert_eq!(
            err.to_string(),
            "widget 'gauge' has non-existent template 'dial.edl'"
        );
        assert_eq!(err.layout_kind(), None);
        assert_eq!(err.template_kind(), None);

        let err = DesignerError::TemplateDirMissing(PathBuf::from("/nowhere"));
        assert!(err.to_string().contains("/nowhere"));
    }
}
