//! Layout system for automatic widget positioning.
//!
//! This module provides:
//!
//! - [`Layout`] trait: the placement strategy every layout implements
//! - [`GeometryAccess`] trait: how a strategy reads and moves nodes
//! - [`LayoutKind`]: an enum over the concrete strategies, stored in the scene
//!
//! # Built-in Layouts
//!
//! - [`HBoxLayout`] / [`VBoxLayout`] - Horizontal and vertical box layouts
//! - [`StackedLayout`] - Overlapping children with per-axis alignment
//!
//! # Layout Algorithm
//!
//! Placement is a single pass with no size negotiation. A layout has no
//! position of its own: its geometry is the bounding box of its children.
//! Every mutation of a layout re-arranges all of its children from scratch
//! and then re-arranges each ancestor in turn, so geometry is always
//! resolved when a mutating call returns.
//!
//! # Example
//!
//! ```
//! use edlkit_core::layout::GeometryAccess;
//! use edlkit_core::{Alignment, Scene, Widget};
//!
//! let mut scene = Scene::new();
//! let column = scene.create_vbox();
//! scene.set_alignment(column, Alignment::Center).unwrap();
//!
//! let title = scene.create_widget(Widget::text("title", "Vacuum").with_size(80, 20));
//! let gauge = scene.create_widget(Widget::circle("gauge").with_size(40, 40));
//! scene.add_widget(column, title).unwrap();
//! scene.add_widget(column, gauge).unwrap();
//!
//! assert_eq!(scene.geometry(gauge).center().x, scene.geometry(title).center().x);
//! ```

mod box_layout;
mod stacked_layout;
mod traits;

pub use box_layout::{BoxLayout, HBoxLayout, Orientation, VBoxLayout};
pub use stacked_layout::StackedLayout;
pub use traits::{GeometryAccess, Layout};

use crate::alignment::{Alignment, AlignmentSet};
use crate::error::LayoutResult;
use crate::scene::NodeId;

/// Default spacing between children of a box layout.
pub const DEFAULT_SPACING: i32 = 5;

/// An enum wrapping all concrete layout types.
///
/// Since the [`Layout`] trait is not dyn-safe (`arrange` is generic over the
/// storage), this enum is how the scene stores any layout and dispatches to
/// the underlying strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutKind {
    /// Box layout (horizontal or vertical).
    Box(BoxLayout),
    /// Stacked layout.
    Stacked(StackedLayout),
}

impl LayoutKind {
    /// Create a horizontal box layout.
    pub fn hbox() -> Self {
        Self::Box(BoxLayout::horizontal())
    }

    /// Create a vertical box layout.
    pub fn vbox() -> Self {
        Self::Box(BoxLayout::vertical())
    }

    /// Create a stacked layout.
    pub fn stacked() -> Self {
        Self::Stacked(StackedLayout::new())
    }

    /// Set a single alignment value.
    ///
    /// Box layouts always report a change so that every write re-arranges.
    /// Stacked layouts wrap the value in a set and report whether it
    /// differs from the stored one.
    pub fn set_alignment(&mut self, alignment: Alignment) -> bool {
        match self {
            Self::Box(l) => {
                l.set_alignment(alignment);
                true
            }
            Self::Stacked(l) => l.set_alignment(AlignmentSet::from(alignment)),
        }
    }

    /// The box layout, if this is one.
    pub fn as_box(&self) -> Option<&BoxLayout> {
        match self {
            Self::Box(l) => Some(l),
            Self::Stacked(_) => None,
        }
    }

    /// The stacked layout, if this is one.
    pub fn as_stacked(&self) -> Option<&StackedLayout> {
        match self {
            Self::Stacked(l) => Some(l),
            Self::Box(_) => None,
        }
    }

    /// Mutable access to the stacked layout, if this is one.
    pub fn as_stacked_mut(&mut self) -> Option<&mut StackedLayout> {
        match self {
            Self::Stacked(l) => Some(l),
            Self::Box(_) => None,
        }
    }
}

impl Layout for LayoutKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Box(l) => l.name(),
            Self::Stacked(l) => l.name(),
        }
    }

    fn spacing(&self) -> Option<i32> {
        match self {
            Self::Box(l) => l.spacing(),
            Self::Stacked(l) => l.spacing(),
        }
    }

    fn set_spacing(&mut self, spacing: i32) -> LayoutResult<()> {
        match self {
            Self::Box(l) => l.set_spacing(spacing),
            Self::Stacked(l) => l.set_spacing(spacing),
        }
    }

    fn arrange<S: GeometryAccess + ?Sized>(&self, children: &[NodeId], storage: &mut S) {
        match self {
            Self::Box(l) => l.arrange(children, storage),
            Self::Stacked(l) => l.arrange(children, storage),
        }
    }
}

impl From<BoxLayout> for LayoutKind {
    fn from(layout: BoxLayout) -> Self {
        Self::Box(layout)
    }
}

impl From<StackedLayout> for LayoutKind {
    fn from(layout: StackedLayout) -> Self {
        Self::Stacked(layout)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::geometry::Rect;

    /// Flat geometry storage for exercising strategies without a scene.
    pub(crate) struct MockStorage {
        rects: HashMap<NodeId, Rect>,
    }

    impl MockStorage {
        pub(crate) fn new() -> Self {
            Self {
                rects: HashMap::new(),
            }
        }

        pub(crate) fn insert(&mut self, id: NodeId, rect: Rect) {
            self.rects.insert(id, rect);
        }

        pub(crate) fn rect(&self, id: NodeId) -> Rect {
            self.rects[&id]
        }
    }

    impl GeometryAccess for MockStorage {
        fn geometry(&self, id: NodeId) -> Rect {
            self.rects.get(&id).copied().unwrap_or(Rect::ZERO)
        }

        fn set_x(&mut self, id: NodeId, x: i32) {
            if let Some(rect) = self.rects.get_mut(&id) {
                rect.x = x;
            }
        }

        fn set_y(&mut self, id: NodeId, y: i32) {
            if let Some(rect) = self.rects.get_mut(&id) {
                rect.y = y;
            }
        }
    }

    // Helper to create test NodeIds using SlotMap
    pub(crate) fn create_test_ids(count: usize) -> Vec<NodeId> {
        use slotmap::SlotMap;
        let mut map: SlotMap<NodeId, ()> = SlotMap::with_key();
        (0..count).map(|_| map.insert(())).collect()
    }

    #[test]
    fn test_layout_kind_names() {
        assert_eq!(LayoutKind::hbox().name(), "HBoxLayout");
        assert_eq!(LayoutKind::vbox().name(), "VBoxLayout");
        assert_eq!(LayoutKind::stacked().name(), "StackedLayout");
    }

    #[test]
    fn test_layout_kind_set_alignment_reports_change() {
        let mut hbox = LayoutKind::hbox();
        assert!(hbox.set_alignment(Alignment::Top));

        let mut stacked = LayoutKind::stacked();
        assert!(!stacked.set_alignment(Alignment::Center));
        assert!(stacked.set_alignment(Alignment::Bottom));
    }

    #[test]
    fn test_layout_kind_spacing_dispatch() {
        let mut hbox = LayoutKind::hbox();
        hbox.set_spacing(12).unwrap();
        assert_eq!(hbox.spacing(), Some(12));

        let mut stacked = LayoutKind::stacked();
        assert!(stacked.set_spacing(3).is_err());
        assert_eq!(stacked.spacing(), None);
    }

    #[test]
    fn test_geometry_access_defaults() {
        let mut storage = MockStorage::new();
        let ids = create_test_ids(1);
        storage.insert(ids[0], Rect::new(0, 0, 20, 10));

        storage.place_right(ids[0], 100);
        storage.place_bottom(ids[0], 50);
        assert_eq!(storage.rect(ids[0]), Rect::new(80, 40, 20, 10));

        storage.recenter(ids[0], Some(0), None);
        assert_eq!(storage.rect(ids[0]), Rect::new(-10, 40, 20, 10));

        storage.move_to(ids[0], 1, 2);
        assert_eq!(storage.rect(ids[0]), Rect::new(1, 2, 20, 10));
    }
}
