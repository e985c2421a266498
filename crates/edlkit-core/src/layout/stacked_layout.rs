//! Stacked layout for children drawn on top of each other.
//!
//! EDM screens frequently overlay widgets: a label on a rectangle, an
//! indicator over a symbol. `StackedLayout` aligns every child against the
//! first one, independently on each axis.
//!
//! # Example
//!
//! ```
//! use edlkit_core::{Alignment, AlignmentSet, Scene, Widget};
//!
//! let mut scene = Scene::new();
//! let stack = scene.create_stacked();
//!
//! // Top-right corner
//! let corner = AlignmentSet::try_from([Alignment::Top, Alignment::Right]).unwrap();
//! scene.set_stack_alignment(stack, corner).unwrap();
//! ```

use crate::alignment::{Alignment, AlignmentSet};
use crate::error::{LayoutError, LayoutResult};
use crate::scene::NodeId;

use super::traits::{GeometryAccess, Layout};

/// A layout whose children overlap.
///
/// The alignment is a set holding at most one value per axis; an axis
/// without a value is centred. Stacked layouts have no spacing: only `0` is
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StackedLayout {
    alignment: AlignmentSet,
    spacing: Option<i32>,
}

impl StackedLayout {
    /// Create a stacked layout centred on both axes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style alignment.
    pub fn with_alignment(mut self, alignment: impl Into<AlignmentSet>) -> Self {
        self.alignment = alignment.into();
        self
    }

    /// Current alignment set.
    #[inline]
    pub fn alignment(&self) -> &AlignmentSet {
        &self.alignment
    }

    /// Replace the alignment set.
    ///
    /// Returns `false` without touching anything when the set is unchanged.
    pub fn set_alignment(&mut self, alignment: AlignmentSet) -> bool {
        if self.alignment == alignment {
            return false;
        }
        self.alignment = alignment;
        true
    }
}

impl Layout for StackedLayout {
    fn name(&self) -> &'static str {
        "StackedLayout"
    }

    fn spacing(&self) -> Option<i32> {
        self.spacing
    }

    fn set_spacing(&mut self, spacing: i32) -> LayoutResult<()> {
        if spacing != 0 {
            return Err(LayoutError::StackedSpacing(spacing));
        }
        self.spacing = Some(spacing);
        Ok(())
    }

    fn arrange<S: GeometryAccess + ?Sized>(&self, children: &[NodeId], storage: &mut S) {
        let Some(&first) = children.first() else {
            return;
        };
        let reference = storage.geometry(first);
        let center = reference.center();

        for &child in children {
            if self.alignment.contains(Alignment::Left) {
                storage.set_x(child, reference.x);
            } else if self.alignment.contains(Alignment::Right) {
                storage.place_right(child, reference.right());
            } else {
                storage.recenter(child, Some(center.x), None);
            }

            if self.alignment.contains(Alignment::Top) {
                storage.set_y(child, reference.y);
            } else if self.alignment.contains(Alignment::Bottom) {
                storage.place_bottom(child, reference.bottom());
            } else {
                storage.recenter(child, None, Some(center.y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::geometry::Rect;
    use crate::layout::tests::{MockStorage, create_test_ids};

    fn pair(storage: &mut MockStorage, first: Rect, second: Rect) -> Vec<NodeId> {
        let ids = create_test_ids(2);
        storage.insert(ids[0], first);
        storage.insert(ids[1], second);
        ids
    }

    #[test]
    fn test_stacked_layout_creation() {
        let layout = StackedLayout::new();
        assert_eq!(layout.alignment().values(), &[Alignment::Center]);
        assert_eq!(layout.spacing(), None);
    }

    #[test]
    fn test_centers_coincide() {
        let mut storage = MockStorage::new();
        let ids = pair(&mut storage, Rect::new(10, 10, 100, 40), Rect::new(0, 0, 33, 7));

        let alignment = AlignmentSet::try_from([Alignment::Center, Alignment::Center]).unwrap();
        StackedLayout::new()
            .with_alignment(alignment)
            .arrange(&ids, &mut storage);

        assert_eq!(storage.rect(ids[0]), Rect::new(10, 10, 100, 40));
        assert_eq!(storage.rect(ids[1]).center(), storage.rect(ids[0]).center());
    }

    #[test]
    fn test_top_right_corner() {
        let mut storage = MockStorage::new();
        let ids = pair(&mut storage, Rect::new(10, 20, 100, 40), Rect::new(0, 0, 10, 10));

        let alignment = AlignmentSet::try_from([Alignment::Top, Alignment::Right]).unwrap();
        StackedLayout::new()
            .with_alignment(alignment)
            .arrange(&ids, &mut storage);

        assert_eq!(storage.rect(ids[1]), Rect::new(100, 20, 10, 10));
    }

    #[test]
    fn test_left_only_centres_vertically() {
        let mut storage = MockStorage::new();
        let ids = pair(&mut storage, Rect::new(10, 20, 100, 40), Rect::new(0, 0, 10, 10));

        StackedLayout::new()
            .with_alignment(Alignment::Left)
            .arrange(&ids, &mut storage);

        let placed = storage.rect(ids[1]);
        assert_eq!(placed.x, 10);
        assert_eq!(placed.center().y, 40);
    }

    #[test]
    fn test_bottom_left() {
        let mut storage = MockStorage::new();
        let ids = pair(&mut storage, Rect::new(10, 20, 100, 40), Rect::new(0, 0, 10, 10));

        let alignment = AlignmentSet::try_from([Alignment::Bottom, Alignment::Left]).unwrap();
        StackedLayout::new()
            .with_alignment(alignment)
            .arrange(&ids, &mut storage);

        assert_eq!(storage.rect(ids[1]), Rect::new(10, 50, 10, 10));
    }

    #[test]
    fn test_spacing_rejected() {
        let mut layout = StackedLayout::new();
        let err = layout.set_spacing(4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(layout.spacing(), None);

        layout.set_spacing(0).unwrap();
        assert_eq!(layout.spacing(), Some(0));
    }

    #[test]
    fn test_set_alignment_short_circuits() {
        let mut layout = StackedLayout::new();
        assert!(!layout.set_alignment(AlignmentSet::from(Alignment::Center)));
        assert!(layout.set_alignment(AlignmentSet::from(Alignment::Top)));
        assert!(!layout.set_alignment(AlignmentSet::from(Alignment::Top)));
    }
}
