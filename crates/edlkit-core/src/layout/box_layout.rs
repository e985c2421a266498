//! Box layout for arranging children in a row or column.
//!
//! Children are laid out one after another along the main axis, starting at
//! the layout's current position, with a fixed gap after each child. On the
//! cross axis every child is aligned against the first child.
//!
//! # Example
//!
//! ```
//! use edlkit_core::layout::GeometryAccess;
//! use edlkit_core::{Scene, Widget};
//!
//! let mut scene = Scene::new();
//! let row = scene.create_hbox();
//! scene.set_spacing(row, 10).unwrap();
//!
//! let a = scene.create_widget(Widget::rectangle("a").with_size(20, 20));
//! let b = scene.create_widget(Widget::rectangle("b").with_size(30, 20));
//! scene.add_widget(row, a).unwrap();
//! scene.add_widget(row, b).unwrap();
//!
//! assert_eq!(scene.geometry(b).x, 30);
//! ```

use crate::alignment::{Alignment, Axis};
use crate::error::LayoutResult;
use crate::geometry::Rect;
use crate::logging::targets;
use crate::scene::NodeId;

use super::DEFAULT_SPACING;
use super::traits::{GeometryAccess, Layout};

/// Main axis of a box layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Children are arranged left to right.
    #[default]
    Horizontal,
    /// Children are arranged top to bottom.
    Vertical,
}

impl Orientation {
    /// Get the cross (perpendicular) orientation.
    #[inline]
    pub fn cross(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// The axis children are stacked along.
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Orientation::Horizontal => Axis::Horizontal,
            Orientation::Vertical => Axis::Vertical,
        }
    }
}

/// A layout that arranges children horizontally or vertically.
///
/// `BoxLayout` is the strategy behind both [`HBoxLayout`] and
/// [`VBoxLayout`].
///
/// # Cross-axis alignment
///
/// | orientation | alignment | placement |
/// |-------------|-----------|-----------|
/// | horizontal | `Top` | top edge at the layout's top |
/// | horizontal | `Bottom` | bottom edge on the first child's bottom |
/// | horizontal | `Center` | centred on the first child's centre line |
/// | vertical | `Left` | left edge at the layout's left |
/// | vertical | `Right` | right edge on the first child's right |
/// | vertical | `Center` | centred on the first child's centre line |
///
/// Any other combination is accepted but only logged; children then keep
/// their cross-axis coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxLayout {
    orientation: Orientation,
    alignment: Alignment,
    spacing: i32,
}

impl BoxLayout {
    /// Create a new box layout with the specified orientation.
    ///
    /// Horizontal layouts align to the top, vertical ones to the left.
    pub fn new(orientation: Orientation) -> Self {
        let alignment = match orientation {
            Orientation::Horizontal => Alignment::Top,
            Orientation::Vertical => Alignment::Left,
        };
        Self {
            orientation,
            alignment,
            spacing: DEFAULT_SPACING,
        }
    }

    /// Create a horizontal box layout.
    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Create a vertical box layout.
    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Get the layout orientation.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Get the cross-axis alignment.
    #[inline]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Set the cross-axis alignment.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    /// Builder-style alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Builder-style spacing.
    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Whether `alignment` places children on this layout's cross axis.
    pub fn supports(&self, alignment: Alignment) -> bool {
        match alignment.axis() {
            None => true,
            Some(axis) => axis == self.orientation.cross().axis(),
        }
    }

    fn align_cross<S: GeometryAccess + ?Sized>(
        &self,
        child: NodeId,
        bounds: Rect,
        reference: Rect,
        storage: &mut S,
    ) {
        match (self.orientation, self.alignment) {
            (Orientation::Horizontal, Alignment::Top) => storage.set_y(child, bounds.y),
            (Orientation::Horizontal, Alignment::Bottom) => {
                storage.place_bottom(child, reference.bottom())
            }
            (Orientation::Horizontal, Alignment::Center) => {
                storage.recenter(child, None, Some(reference.center().y))
            }
            (Orientation::Vertical, Alignment::Left) => storage.set_x(child, bounds.x),
            (Orientation::Vertical, Alignment::Right) => {
                storage.place_right(child, reference.right())
            }
            (Orientation::Vertical, Alignment::Center) => {
                storage.recenter(child, Some(reference.center().x), None)
            }
            _ => {}
        }
    }
}

impl Layout for BoxLayout {
    fn name(&self) -> &'static str {
        match self.orientation {
            Orientation::Horizontal => "HBoxLayout",
            Orientation::Vertical => "VBoxLayout",
        }
    }

    fn spacing(&self) -> Option<i32> {
        Some(self.spacing)
    }

    fn set_spacing(&mut self, spacing: i32) -> LayoutResult<()> {
        self.spacing = spacing;
        Ok(())
    }

    fn arrange<S: GeometryAccess + ?Sized>(&self, children: &[NodeId], storage: &mut S) {
        let Some(&first) = children.first() else {
            return;
        };

        if !self.supports(self.alignment) {
            tracing::warn!(
                target: targets::LAYOUT,
                alignment = %self.alignment,
                layout = self.name(),
                "unsupported alignment"
            );
        }

        let bounds = Rect::bounding(children.iter().map(|&child| storage.geometry(child)));
        let reference = storage.geometry(first);

        let mut cursor = match self.orientation {
            Orientation::Horizontal => bounds.x,
            Orientation::Vertical => bounds.y,
        };

        for &child in children {
            self.align_cross(child, bounds, reference, storage);

            let size = storage.geometry(child);
            match self.orientation {
                Orientation::Horizontal => {
                    storage.set_x(child, cursor);
                    cursor += size.w + self.spacing;
                }
                Orientation::Vertical => {
                    storage.set_y(child, cursor);
                    cursor += size.h + self.spacing;
                }
            }
        }
    }
}

impl Default for BoxLayout {
    fn default() -> Self {
        Self::horizontal()
    }
}

// =============================================================================
// Type Aliases for Convenience
// =============================================================================

/// Horizontal box layout.
///
/// Children are arranged left to right.
pub type HBoxLayout = BoxLayout;

/// Vertical box layout.
///
/// Children are arranged top to bottom.
pub type VBoxLayout = BoxLayout;

impl BoxLayout {
    /// Create a new HBoxLayout (alias for `BoxLayout::horizontal()`).
    pub fn hbox() -> Self {
        Self::horizontal()
    }

    /// Create a new VBoxLayout (alias for `BoxLayout::vertical()`).
    pub fn vbox() -> Self {
        Self::vertical()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tests::{MockStorage, create_test_ids};

    fn row(storage: &mut MockStorage, sizes: &[(i32, i32)]) -> Vec<NodeId> {
        let ids = create_test_ids(sizes.len());
        for (id, &(w, h)) in ids.iter().zip(sizes) {
            storage.insert(*id, Rect::new(0, 0, w, h));
        }
        ids
    }

    #[test]
    fn test_box_layout_creation() {
        let hbox = BoxLayout::horizontal();
        assert_eq!(hbox.orientation(), Orientation::Horizontal);
        assert_eq!(hbox.alignment(), Alignment::Top);
        assert_eq!(hbox.spacing(), Some(DEFAULT_SPACING));

        let vbox = BoxLayout::vertical();
        assert_eq!(vbox.orientation(), Orientation::Vertical);
        assert_eq!(vbox.alignment(), Alignment::Left);
    }

    #[test]
    fn test_orientation_cross() {
        assert_eq!(Orientation::Horizontal.cross(), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.cross(), Orientation::Horizontal);
    }

    #[test]
    fn test_hbox_places_along_x() {
        let mut storage = MockStorage::new();
        let ids = row(&mut storage, &[(10, 5), (20, 5), (30, 5)]);

        BoxLayout::hbox().with_spacing(5).arrange(&ids, &mut storage);

        let xs: Vec<i32> = ids.iter().map(|&id| storage.rect(id).x).collect();
        assert_eq!(xs, vec![0, 15, 40]);
    }

    #[test]
    fn test_vbox_places_along_y() {
        let mut storage = MockStorage::new();
        let ids = row(&mut storage, &[(5, 10), (5, 20), (5, 30)]);

        BoxLayout::vbox().with_spacing(5).arrange(&ids, &mut storage);

        let ys: Vec<i32> = ids.iter().map(|&id| storage.rect(id).y).collect();
        assert_eq!(ys, vec![0, 15, 40]);
    }

    #[test]
    fn test_hbox_starts_at_leftmost_child() {
        let mut storage = MockStorage::new();
        let ids = create_test_ids(2);
        storage.insert(ids[0], Rect::new(40, 0, 10, 10));
        storage.insert(ids[1], Rect::new(25, 0, 10, 10));

        BoxLayout::hbox().with_spacing(0).arrange(&ids, &mut storage);

        assert_eq!(storage.rect(ids[0]).x, 25);
        assert_eq!(storage.rect(ids[1]).x, 35);
    }

    #[test]
    fn test_hbox_top_alignment() {
        let mut storage = MockStorage::new();
        let ids = create_test_ids(2);
        storage.insert(ids[0], Rect::new(0, 30, 10, 10));
        storage.insert(ids[1], Rect::new(0, 12, 10, 40));

        BoxLayout::hbox().arrange(&ids, &mut storage);

        assert_eq!(storage.rect(ids[0]).y, 12);
        assert_eq!(storage.rect(ids[1]).y, 12);
    }

    #[test]
    fn test_hbox_bottom_alignment() {
        let mut storage = MockStorage::new();
        let ids = create_test_ids(2);
        storage.insert(ids[0], Rect::new(0, 30, 10, 10));
        storage.insert(ids[1], Rect::new(0, 0, 10, 25));

        BoxLayout::hbox()
            .with_alignment(Alignment::Bottom)
            .arrange(&ids, &mut storage);

        assert_eq!(storage.rect(ids[0]).bottom(), 40);
        assert_eq!(storage.rect(ids[1]).bottom(), 40);
        assert_eq!(storage.rect(ids[1]).y, 15);
    }

    #[test]
    fn test_hbox_center_alignment() {
        let mut storage = MockStorage::new();
        let ids = create_test_ids(2);
        storage.insert(ids[0], Rect::new(0, 10, 10, 40));
        storage.insert(ids[1], Rect::new(0, 0, 10, 10));

        BoxLayout::hbox()
            .with_alignment(Alignment::Center)
            .arrange(&ids, &mut storage);

        assert_eq!(storage.rect(ids[0]).center().y, 30);
        assert_eq!(storage.rect(ids[1]).center().y, 30);
    }

    #[test]
    fn test_vbox_right_alignment() {
        let mut storage = MockStorage::new();
        let ids = create_test_ids(2);
        storage.insert(ids[0], Rect::new(10, 0, 50, 10));
        storage.insert(ids[1], Rect::new(0, 0, 20, 10));

        BoxLayout::vbox()
            .with_alignment(Alignment::Right)
            .arrange(&ids, &mut storage);

        assert_eq!(storage.rect(ids[0]).right(), 60);
        assert_eq!(storage.rect(ids[1]).right(), 60);
    }

    #[test]
    fn test_vbox_center_alignment() {
        let mut storage = MockStorage::new();
        let ids = create_test_ids(2);
        storage.insert(ids[0], Rect::new(0, 0, 40, 10));
        storage.insert(ids[1], Rect::new(100, 0, 10, 10));

        BoxLayout::vbox()
            .with_alignment(Alignment::Center)
            .arrange(&ids, &mut storage);

        assert_eq!(storage.rect(ids[1]).center().x, storage.rect(ids[0]).center().x);
    }

    #[test]
    fn test_unsupported_alignment_skips_cross_axis() {
        let mut storage = MockStorage::new();
        let ids = create_test_ids(2);
        storage.insert(ids[0], Rect::new(0, 3, 10, 10));
        storage.insert(ids[1], Rect::new(0, 17, 10, 10));

        let layout = BoxLayout::hbox().with_alignment(Alignment::Left).with_spacing(0);
        assert!(!layout.supports(Alignment::Left));
        layout.arrange(&ids, &mut storage);

        assert_eq!(storage.rect(ids[0]).y, 3);
        assert_eq!(storage.rect(ids[1]).y, 17);
        assert_eq!(storage.rect(ids[1]).x, 10);
    }

    #[test]
    fn test_empty_arrange_is_noop() {
        let mut storage = MockStorage::new();
        BoxLayout::hbox().arrange(&[], &mut storage);
    }
}
