//! Logging and debugging facilities for edlkit.
//!
//! This module provides:
//! - Target and span names for filtering `tracing` output by subsystem
//! - Debug visualization for scene trees
//! - A small guard for timing spans
//!
//! # Tracing Integration
//!
//! edlkit uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("edlkit_core::layout=debug")
//!         .init();
//! }
//! ```
//!
//! # Debug Visualization
//!
//! ```
//! use edlkit_core::logging::SceneTreeDebug;
//! use edlkit_core::{Scene, Widget};
//!
//! let mut scene = Scene::new();
//! let row = scene.create_hbox();
//! let w = scene.create_widget(Widget::rectangle("frame"));
//! scene.add_widget(row, w).unwrap();
//!
//! let output = SceneTreeDebug::new().format_subtree(&scene, row).unwrap();
//! assert!(output.contains("frame"));
//! ```

use std::fmt;

use crate::error::{LayoutError, LayoutResult};
use crate::layout::{GeometryAccess, Layout};
use crate::scene::{NodeContent, NodeId, Scene};

/// Span names used throughout edlkit for tracing.
pub mod span_names {
    /// Rendering a screen to EDL text.
    pub const RENDER: &str = "edlkit::render";
    /// Launching the viewer.
    pub const LAUNCH: &str = "edlkit::launch";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Scene arena target.
    pub const SCENE: &str = "edlkit_core::scene";
    /// Placement strategies and propagation.
    pub const LAYOUT: &str = "edlkit_core::layout";
    /// Font coercion target.
    pub const FONT: &str = "edlkit_core::font";
    /// Designer target.
    pub const DESIGNER: &str = "edlkit::designer";
    /// Template loading and rendering.
    pub const TEMPLATE: &str = "edlkit::template";
    /// Viewer process launch.
    pub const LAUNCH: &str = "edlkit::launch";
}

/// Style options for scene tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact single-line representation.
    Compact,
}

/// Configuration for scene tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show node ids.
    pub show_ids: bool,
    /// Whether to show the layout kind or widget template.
    pub show_kinds: bool,
    /// Whether to show resolved geometry.
    pub show_geometry: bool,
    /// Whether to list widget attribute names.
    pub show_attributes: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_kinds: true,
            show_geometry: true,
            show_attributes: false,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_attributes: true,
            ..Default::default()
        }
    }

    /// Create options for minimal output.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_kinds: false,
            show_geometry: false,
            show_attributes: false,
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing a scene's layout tree.
#[derive(Debug, Clone, Default)]
pub struct SceneTreeDebug {
    options: TreeFormatOptions,
}

impl SceneTreeDebug {
    /// Create a new debug visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a debug visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format every tree in the scene, starting from nodes without a parent.
    pub fn format_all(&self, scene: &Scene) -> String {
        let roots = scene.roots();

        let mut output = format!("Scene Tree ({} total nodes):\n", scene.len());
        if roots.is_empty() {
            output.push_str("  (empty)\n");
        } else {
            for root in roots {
                self.format_subtree_into(scene, root, 0, true, &mut output);
            }
        }
        output
    }

    /// Format a subtree starting from a specific node.
    pub fn format_subtree(&self, scene: &Scene, root: NodeId) -> LayoutResult<String> {
        if !scene.contains(root) {
            return Err(LayoutError::UnknownNode(root));
        }
        let mut output = String::new();
        self.format_subtree_into(scene, root, 0, true, &mut output);
        Ok(output)
    }

    fn format_subtree_into(
        &self,
        scene: &Scene,
        id: NodeId,
        depth: usize,
        is_last: bool,
        output: &mut String,
    ) {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return;
        }
        let Some(content) = scene.content(id) else {
            return;
        };

        output.push_str(&self.build_prefix(depth, is_last));

        match content {
            NodeContent::Widget(widget) => {
                output.push_str(if widget.name().is_empty() {
                    "(unnamed)"
                } else {
                    widget.name()
                });
            }
            NodeContent::Layout(layout) => {
                output.push_str(&format!("{} children", layout.count()));
            }
        }

        if self.options.show_ids {
            output.push_str(&format!(" [{:?}]", id));
        }

        if self.options.show_kinds {
            let kind = match content {
                NodeContent::Widget(widget) => widget.template(),
                NodeContent::Layout(layout) => layout.kind().name(),
            };
            output.push_str(&format!(" ({})", kind));
        }

        if self.options.show_geometry {
            let rect = scene.geometry(id);
            output.push_str(&format!(" @ {},{} {}x{}", rect.x, rect.y, rect.w, rect.h));
        }

        output.push('\n');

        if let (true, NodeContent::Widget(widget)) = (self.options.show_attributes, content) {
            let prefix = self.build_property_prefix(depth);
            for key in widget.attributes().keys() {
                output.push_str(&format!("{}  .{}\n", prefix, key));
            }
        }

        let children = scene.children(id);
        let child_count = children.len();
        for (i, &child) in children.iter().enumerate() {
            let child_is_last = i == child_count - 1;
            self.format_subtree_into(scene, child, depth + 1, child_is_last, output);
        }
    }

    fn build_prefix(&self, depth: usize, is_last: bool) -> String {
        if depth == 0 {
            return String::new();
        }

        let (branch, tee, corner) = match self.options.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            TreeStyle::Compact => ("", "-", "-"),
        };

        let mut prefix = String::new();
        for _ in 0..(depth - 1) {
            prefix.push_str(branch);
            prefix.push_str(&" ".repeat(self.options.indent_size));
        }
        prefix.push_str(if is_last { corner } else { tee });
        prefix.push(' ');
        prefix
    }

    fn build_property_prefix(&self, depth: usize) -> String {
        let branch = match self.options.style {
            TreeStyle::Ascii => "|",
            TreeStyle::Unicode => "\u{2502}",
            TreeStyle::Compact => "",
        };

        let mut prefix = String::new();
        for _ in 0..depth {
            prefix.push_str(branch);
            prefix.push_str(&" ".repeat(self.options.indent_size));
        }
        prefix
    }
}

/// Formats the scene tree using the default options.
pub struct DisplayScene<'a> {
    scene: &'a Scene,
    debug: SceneTreeDebug,
}

impl<'a> DisplayScene<'a> {
    /// Wrap a scene for display.
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            debug: SceneTreeDebug::new(),
        }
    }
}

impl fmt::Display for DisplayScene<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug.format_all(self.scene))
    }
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "edlkit::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
