//! Core layout traits.
//!
//! A layout never owns widget geometry. It reads and writes positions through
//! a [`GeometryAccess`] storage, which lets the same placement code run
//! against the scene arena or a test double.

use crate::error::LayoutResult;
use crate::geometry::Rect;
use crate::scene::NodeId;

/// Read and write node geometry by id.
///
/// `geometry` of a container is derived from its children, and moving a
/// container moves every child with it. Implementations return
/// [`Rect::ZERO`] for ids they do not know.
pub trait GeometryAccess {
    /// Current geometry of a node.
    fn geometry(&self, id: NodeId) -> Rect;

    /// Move a node horizontally so its left edge is `x`.
    fn set_x(&mut self, id: NodeId, x: i32);

    /// Move a node vertically so its top edge is `y`.
    fn set_y(&mut self, id: NodeId, y: i32);

    /// Move a node so its anchor is `(x, y)`.
    fn move_to(&mut self, id: NodeId, x: i32, y: i32) {
        self.set_x(id, x);
        self.set_y(id, y);
    }

    /// Move a node so its right edge is `edge`, keeping its size.
    fn place_right(&mut self, id: NodeId, edge: i32) {
        let mut rect = self.geometry(id);
        rect.place_right(edge);
        self.set_x(id, rect.x);
    }

    /// Move a node so its bottom edge is `edge`, keeping its size.
    fn place_bottom(&mut self, id: NodeId, edge: i32) {
        let mut rect = self.geometry(id);
        rect.place_bottom(edge);
        self.set_y(id, rect.y);
    }

    /// Move a node so its centre matches the supplied coordinates.
    fn recenter(&mut self, id: NodeId, x: Option<i32>, y: Option<i32>) {
        let mut rect = self.geometry(id);
        rect.recenter(x, y);
        if x.is_some() {
            self.set_x(id, rect.x);
        }
        if y.is_some() {
            self.set_y(id, rect.y);
        }
    }
}

/// A placement strategy for the children of a layout node.
///
/// `arrange` recomputes every child's position from scratch; there is no
/// diffing and no cached state. Propagation to ancestor layouts is handled
/// by the scene, not by the strategy.
pub trait Layout {
    /// Display name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Gap between consecutive children, if the strategy has one.
    fn spacing(&self) -> Option<i32>;

    /// Store a new gap.
    ///
    /// Fails without changing anything when the strategy cannot honour it.
    fn set_spacing(&mut self, spacing: i32) -> LayoutResult<()>;

    /// Place `children` (in insertion order) through `storage`.
    fn arrange<S: GeometryAccess + ?Sized>(&self, children: &[NodeId], storage: &mut S);
}
