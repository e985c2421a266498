//! Core systems for edlkit.
//!
//! This crate provides the building blocks for describing EDM display
//! screens in code:
//!
//! - **Geometry**: integer rectangles with edge and centre helpers
//! - **Widgets**: named, templated drawables carrying free-form attributes
//! - **Fonts**: EDM font tags and the loose coercion rules for font values
//! - **Scene**: an arena of widgets and layouts addressed by [`NodeId`]
//! - **Layouts**: horizontal, vertical and stacked placement strategies
//!
//! Layout is eager. Every mutation of a layout re-arranges its children and
//! then every ancestor, so positions are final as soon as a call returns.
//!
//! # Example
//!
//! ```
//! use edlkit_core::layout::GeometryAccess;
//! use edlkit_core::{Alignment, Scene, Widget};
//!
//! let mut scene = Scene::new();
//! let row = scene.create_hbox();
//! scene.set_alignment(row, Alignment::Center).unwrap();
//!
//! let frame = scene.create_widget(Widget::rectangle("frame").with_size(40, 40));
//! let label = scene.create_widget(Widget::text("label", "PUMP 1"));
//! scene.add_widget(row, frame).unwrap();
//! scene.add_widget(row, label).unwrap();
//!
//! assert_eq!(scene.geometry(label).x, 45);
//! assert_eq!(scene.geometry(label).center().y, scene.geometry(frame).center().y);
//! ```

pub mod alignment;
pub mod error;
pub mod font;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod scene;
pub mod widget;

pub use alignment::{Alignment, AlignmentSet, Axis};
pub use error::{ErrorKind, LayoutError, LayoutResult};
pub use font::{DEFAULT_FONT_SIZE, FONT_SIZES, Font, FontChoice};
pub use geometry::{Point, Rect};
pub use layout::{
    BoxLayout, DEFAULT_SPACING, GeometryAccess, HBoxLayout, Layout, LayoutKind, Orientation,
    StackedLayout, VBoxLayout,
};
pub use logging::{SceneTreeDebug, TreeFormatOptions, TreeStyle};
pub use scene::{LayoutNode, NodeContent, NodeId, Scene};
pub use widget::{AttributeValue, Attributes, ColorIndex, Visibility, Widget};
