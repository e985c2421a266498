//! Build EDM screen files from Rust.
//!
//! edlkit describes a screen as widgets arranged by layouts, then renders it
//! to EDM's `.edl` format through templates and optionally opens it in the
//! viewer.
//!
//! - [`Designer`]: the screen, its top-level objects, rendering and preview
//! - [`template`]: the built-in templates and the [`TemplateRenderer`] seam
//! - [`config`]: TOML configuration for templates, screen size and viewer
//! - [`launch`]: viewer command lines and preview handles
//!
//! Widgets, layouts and geometry come from [`edlkit_core`], re-exported here.
//!
//! # Example
//!
//! ```
//! use edlkit::prelude::*;
//!
//! let mut designer = Designer::new()?;
//! let scene = designer.scene_mut();
//!
//! let row = scene.create_hbox();
//! let frame = scene.create_widget(Widget::rectangle("frame"));
//! let label = scene.create_widget(Widget::text("label", "Vacuum"));
//! scene.add_widget(row, frame)?;
//! scene.add_widget(row, label)?;
//!
//! designer.add_widget(row)?;
//! let edl = designer.render()?;
//! assert!(edl.contains("activeRectangleClass"));
//! assert!(edl.contains("activeXTextClass"));
//! # Ok::<(), edlkit::DesignerError>(())
//! ```

pub mod config;
pub mod designer;
pub mod error;
pub mod launch;
pub mod prelude;
pub mod template;

pub use edlkit_core;
pub use edlkit_core::{
    Alignment, AlignmentSet, Font, FontChoice, LayoutError, NodeId, Rect, Scene, Visibility,
    Widget,
};

pub use config::DesignerConfig;
pub use designer::Designer;
pub use error::{DesignerError, Result};
pub use launch::{LaunchOptions, Preview};
pub use template::{TemplateRenderer, Templates};
