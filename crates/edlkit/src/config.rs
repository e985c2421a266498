//! Designer configuration.
//!
//! Configuration is read from TOML:
//!
//! ```toml
//! template_dir = "/opt/screens/templates"
//!
//! [screen]
//! width = 1024
//! height = 768
//!
//! [viewer]
//! program = "edm"
//! args = ["-x", "-eolc"]
//! ```
//!
//! Every key is optional. [`DesignerConfig::discover`] looks for
//! `config.toml` in the platform configuration directory and falls back to
//! the defaults when none exists.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use edlkit_core::logging::targets;

use crate::error::{DesignerError, Result};

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Top-level designer configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerConfig {
    /// Directory of `*.edl` templates overlaying the built-in ones.
    pub template_dir: Option<PathBuf>,
    /// Size of the background screen.
    pub screen: ScreenConfig,
    /// How previews are launched.
    pub viewer: ViewerConfig,
}

/// Size of the background screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// The external viewer used by [`Designer::show`](crate::Designer::show).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Program to run.
    pub program: String,
    /// Arguments placed before macros and the screen path.
    pub args: Vec<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            program: "edm".into(),
            args: vec!["-x".into(), "-eolc".into()],
        }
    }
}

impl DesignerConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read configuration from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| DesignerError::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::DESIGNER, path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// The platform location of the configuration file, if one can be
    /// determined.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "edlkit", "edlkit").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load the configuration file from the platform configuration
    /// directory, or the defaults when there is none.
    pub fn discover() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(path),
            _ => {
                tracing::debug!(target: targets::DESIGNER, "no configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DesignerConfig::default();
        assert_eq!(config.template_dir, None);
        assert_eq!(config.screen, ScreenConfig { width: 800, height: 600 });
        assert_eq!(config.viewer.program, "edm");
        assert_eq!(config.viewer.args, vec!["-x", "-eolc"]);
    }

    #[test]
    fn test_partial_toml() {
        let config = DesignerConfig::from_toml_str(
            r#"
            template_dir = "/tmp/templates"

            [screen]
            width = 1024
            "#,
        )
        .unwrap();

        assert_eq!(config.template_dir, Some(PathBuf::from("/tmp/templates")));
        assert_eq!(config.screen.width, 1024);
        assert_eq!(config.screen.height, 600);
        assert_eq!(config.viewer, ViewerConfig::default());
    }

    #[test]
    fn test_viewer_override() {
        let config = DesignerConfig::from_toml_str(
            r#"
            [viewer]
            program = "/usr/local/bin/edm"
            args = ["-x"]
            "#,
        )
        .unwrap();
        assert_eq!(config.viewer.program, "/usr/local/bin/edm");
        assert_eq!(config.viewer.args, vec!["-x"]);
    }

    #[test]
    fn test_invalid_toml() {
        let err = DesignerConfig::from_toml_str("screen = 3").unwrap_err();
        assert!(matches!(err, DesignerError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[screen]\nheight = 300\n").unwrap();

        let config = DesignerConfig::load(&path).unwrap();
        assert_eq!(config.screen.height, 300);

        let err = DesignerConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, DesignerError::Io { .. }));
    }
}
