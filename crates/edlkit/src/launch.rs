//! Launching the EDM viewer on a screen file.
//!
//! The viewer command line is assembled from the configured program and
//! arguments, an optional `-m` macro list and finally the screen path:
//!
//! ```text
//! edm -x -eolc -m "P=TST:,R=1" /tmp/screen.edl
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus};

use tempfile::NamedTempFile;

use edlkit_core::logging::{PerfSpan, span_names, targets};

use crate::config::ViewerConfig;
use crate::error::{DesignerError, Result};

/// Options for a single viewer launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Directory the viewer runs in.
    pub working_dir: Option<PathBuf>,
    /// Block until the viewer exits.
    pub wait: bool,
    /// Macro substitutions, passed sorted by name.
    pub macros: BTreeMap<String, String>,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            working_dir: None,
            wait: true,
            macros: BTreeMap::new(),
        }
    }
}

impl LaunchOptions {
    /// Blocking launch without macros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the viewer in `dir`.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Whether to block until the viewer exits.
    pub fn with_wait(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }

    /// Add a macro substitution.
    pub fn with_macro(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.macros.insert(name.into(), value.into());
        self
    }

    /// The `-m` argument value, or `None` without macros.
    pub fn macro_argument(&self) -> Option<String> {
        if self.macros.is_empty() {
            return None;
        }
        let pairs: Vec<String> = self
            .macros
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        Some(pairs.join(","))
    }
}

/// Build the viewer command for `path` without running it.
pub fn viewer_command(viewer: &ViewerConfig, path: &Path, options: &LaunchOptions) -> Command {
    let mut command = Command::new(&viewer.program);
    command.args(&viewer.args);
    if let Some(macros) = options.macro_argument() {
        command.arg("-m").arg(macros);
    }
    command.arg(path);
    if let Some(dir) = &options.working_dir {
        command.current_dir(dir);
    }
    command
}

/// A started viewer.
#[derive(Debug)]
pub enum Launched {
    /// The viewer ran to completion.
    Exited(ExitStatus),
    /// The viewer is still running.
    Running(Child),
}

/// Open an existing screen file in the viewer.
pub fn launch(viewer: &ViewerConfig, path: &Path, options: &LaunchOptions) -> Result<Launched> {
    let _span = PerfSpan::new(span_names::LAUNCH);
    let mut command = viewer_command(viewer, path, options);
    let launch_error = |source| DesignerError::Launch {
        program: viewer.program.clone(),
        source,
    };

    tracing::info!(
        target: targets::LAUNCH,
        program = %viewer.program,
        path = %path.display(),
        wait = options.wait,
        "launching viewer"
    );

    let mut child = command.spawn().map_err(launch_error)?;
    if options.wait {
        let status = child.wait().map_err(launch_error)?;
        tracing::debug!(target: targets::LAUNCH, %status, "viewer exited");
        Ok(Launched::Exited(status))
    } else {
        Ok(Launched::Running(child))
    }
}

/// A preview of a rendered screen.
///
/// The temporary screen file lives as long as a running preview does.
#[derive(Debug)]
pub enum Preview {
    /// The viewer was waited on and has exited; the file is gone.
    Finished(ExitStatus),
    /// The viewer is still open.
    Running {
        /// The viewer process.
        child: Child,
        /// The rendered screen, deleted on drop.
        screen: NamedTempFile,
    },
}

impl Preview {
    pub(crate) fn from_launch(launched: Launched, screen: NamedTempFile) -> Self {
        match launched {
            Launched::Exited(status) => Self::Finished(status),
            Launched::Running(child) => Self::Running { child, screen },
        }
    }

    /// Path of the temporary screen while the viewer runs.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Finished(_) => None,
            Self::Running { screen, .. } => Some(screen.path()),
        }
    }

    /// Block until the viewer exits, then remove the temporary file.
    pub fn wait(self) -> std::io::Result<ExitStatus> {
        match self {
            Self::Finished(status) => Ok(status),
            Self::Running { mut child, screen } => {
                let status = child.wait();
                drop(screen);
                status
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(command: &Command) -> Vec<String> {
        command
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_macro_argument_sorted() {
        let options = LaunchOptions::new()
            .with_macro("R", "1")
            .with_macro("P", "TST:");
        assert_eq!(options.macro_argument().as_deref(), Some("P=TST:,R=1"));
        assert_eq!(LaunchOptions::new().macro_argument(), None);
    }

    #[test]
    fn test_viewer_command_layout() {
        let viewer = ViewerConfig::default();
        let options = LaunchOptions::new()
            .with_macro("P", "TST:")
            .with_working_dir("/tmp");
        let command = viewer_command(&viewer, Path::new("/tmp/s.edl"), &options);

        assert_eq!(command.get_program(), "edm");
        assert_eq!(args(&command), vec!["-x", "-eolc", "-m", "P=TST:", "/tmp/s.edl"]);
        assert_eq!(command.get_current_dir(), Some(Path::new("/tmp")));
    }

    #[test]
    fn test_viewer_command_without_macros() {
        let viewer = ViewerConfig {
            program: "viewer".into(),
            args: vec![],
        };
        let command = viewer_command(&viewer, Path::new("s.edl"), &LaunchOptions::new());
        assert_eq!(args(&command), vec!["s.edl"]);
        assert_eq!(command.get_current_dir(), None);
    }

    #[test]
    fn test_missing_program_is_launch_error() {
        let viewer = ViewerConfig {
            program: "edlkit-test-no-such-viewer".into(),
            args: vec![],
        };
        let err = launch(&viewer, Path::new("s.edl"), &LaunchOptions::new()).unwrap_err();
        match err {
            DesignerError::Launch { program, .. } => assert_eq!(program, "edlkit-test-no-such-viewer"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_wait_returns_status() {
        let viewer = ViewerConfig {
            program: "true".into(),
            args: vec![],
        };
        let launched = launch(&viewer, Path::new("s.edl"), &LaunchOptions::new()).unwrap();
        match launched {
            Launched::Exited(status) => assert!(status.success()),
            Launched::Running(_) => panic!("expected the viewer to be waited on"),
        }
    }
}
