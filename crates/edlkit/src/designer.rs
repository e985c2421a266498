//! The designer: a background screen plus the top-level objects drawn on it.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::json;

use edlkit_core::logging::{PerfSpan, span_names, targets};
use edlkit_core::{LayoutError, NodeContent, NodeId, Scene, Widget};

use crate::config::{DesignerConfig, ViewerConfig};
use crate::error::{DesignerError, Result};
use crate::launch::{self, LaunchOptions, Preview};
use crate::template::{TEMPLATE_EXTENSION, TemplateRenderer, Templates};

/// Separator placed between rendered objects.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Root container for an EDM screen.
///
/// A designer owns the [`Scene`] holding every widget and layout, the
/// background screen widget, and the ordered list of top-level objects that
/// end up in the output file.
pub struct Designer {
    scene: Scene,
    screen: Widget,
    widgets: Vec<NodeId>,
    renderer: Box<dyn TemplateRenderer>,
    viewer: ViewerConfig,
}

impl Designer {
    /// A designer using the built-in templates and default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(&DesignerConfig::default())
    }

    /// A designer built from configuration.
    ///
    /// Fails when the configured template directory does not exist.
    pub fn with_config(config: &DesignerConfig) -> Result<Self> {
        let templates = match &config.template_dir {
            Some(dir) => Templates::from_dir(dir)?,
            None => Templates::builtin()?,
        };
        tracing::debug!(
            target: targets::DESIGNER,
            templates = ?templates.directory(),
            width = config.screen.width,
            height = config.screen.height,
            "creating designer"
        );

        Ok(Self {
            scene: Scene::new(),
            screen: Widget::screen(config.screen.width, config.screen.height),
            widgets: Vec::new(),
            renderer: Box::new(templates),
            viewer: config.viewer.clone(),
        })
    }

    /// Replace the template renderer.
    pub fn with_renderer(mut self, renderer: impl TemplateRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// The scene holding every widget and layout.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the scene.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The background screen widget.
    pub fn screen(&self) -> &Widget {
        &self.screen
    }

    /// Mutable access to the background screen widget.
    pub fn screen_mut(&mut self) -> &mut Widget {
        &mut self.screen
    }

    /// Viewer used by [`show`](Self::show).
    pub fn viewer(&self) -> &ViewerConfig {
        &self.viewer
    }

    /// Top-level objects in insertion order.
    pub fn widgets(&self) -> &[NodeId] {
        &self.widgets
    }

    /// Add a free-floating widget or layout to the screen.
    pub fn add_widget(&mut self, id: NodeId) -> Result<()> {
        if !self.scene.contains(id) {
            return Err(LayoutError::UnknownNode(id).into());
        }
        self.widgets.push(id);
        Ok(())
    }

    /// Every widget on the screen, including those inside layouts, in
    /// drawing order.
    pub fn all_widgets(&self) -> Vec<NodeId> {
        self.widgets
            .iter()
            .flat_map(|&id| self.scene.leaf_widgets(id))
            .collect()
    }

    /// Render one widget, or every widget inside a layout.
    pub fn render_object(&self, id: NodeId) -> Result<String> {
        match self.scene.content(id) {
            None => Err(LayoutError::UnknownNode(id).into()),
            Some(NodeContent::Widget(widget)) => self.render_widget(widget),
            Some(NodeContent::Layout(layout)) => {
                let mut blocks = Vec::with_capacity(layout.count());
                for &child in layout.children() {
                    if self.scene.is_layout(child) {
                        tracing::debug!(target: targets::DESIGNER, ?child, "rendering child layout");
                    }
                    let block = self.render_object(child)?;
                    if !block.is_empty() {
                        blocks.push(block);
                    }
                }
                Ok(blocks.join(BLOCK_SEPARATOR))
            }
        }
    }

    fn render_widget(&self, widget: &Widget) -> Result<String> {
        tracing::debug!(
            target: targets::DESIGNER,
            widget = widget.name(),
            template = widget.template(),
            "rendering widget"
        );
        if !self.renderer.contains(widget.template()) {
            return Err(DesignerError::TemplateNotFound {
                widget: widget.name().to_owned(),
                template: widget.template().to_owned(),
            });
        }
        self.renderer
            .render(widget.template(), &json!({ "widget": widget.context() }))
    }

    /// The complete screen: the background block followed by every
    /// top-level object.
    pub fn render(&self) -> Result<String> {
        let _span = PerfSpan::new(span_names::RENDER);
        let mut blocks = vec![self.render_widget(&self.screen)?];
        for &id in &self.widgets {
            let block = self.render_object(id)?;
            if !block.is_empty() {
                blocks.push(block);
            }
        }
        Ok(blocks.join(BLOCK_SEPARATOR))
    }

    /// Render the screen into `out`.
    pub fn write_to(&self, mut out: impl Write) -> Result<()> {
        let edl = self.render()?;
        out.write_all(edl.as_bytes()).map_err(DesignerError::Write)?;
        out.flush().map_err(DesignerError::Write)
    }

    /// Save the screen, appending `.edl` to the path when missing.
    ///
    /// Returns the path written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = with_edl_extension(path.as_ref());
        let edl = self.render()?;
        fs::write(&path, edl).map_err(|e| DesignerError::io(&path, e))?;
        tracing::info!(target: targets::DESIGNER, path = %path.display(), "saved screen");
        Ok(path)
    }

    /// Render to a temporary file and open it in the viewer.
    ///
    /// With [`LaunchOptions::wait`] set this blocks until the viewer exits.
    /// Otherwise the returned [`Preview`] keeps the file alive while the
    /// viewer runs.
    pub fn show(&self, options: &LaunchOptions) -> Result<Preview> {
        let edl = self.render()?;
        let mut screen = tempfile::Builder::new()
            .prefix("edlkit-")
            .suffix(&format!(".{TEMPLATE_EXTENSION}"))
            .tempfile()
            .map_err(|e| DesignerError::io(std::env::temp_dir(), e))?;
        screen
            .write_all(edl.as_bytes())
            .and_then(|()| screen.flush())
            .map_err(|e| DesignerError::io(screen.path(), e))?;

        let launched = launch::launch(&self.viewer, screen.path(), options)?;
        Ok(Preview::from_launch(launched, screen))
    }
}

impl fmt::Debug for Designer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Designer")
            .field("screen", &self.screen)
            .field("widgets", &self.widgets)
            .field("nodes", &self.scene.len())
            .field("viewer", &self.viewer)
            .finish_non_exhaustive()
    }
}

fn with_edl_extension(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == TEMPLATE_EXTENSION) {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".");
        name.push(TEMPLATE_EXTENSION);
        PathBuf::from(name)
    }
}
