//! The scene arena: widgets and layouts addressed by [`NodeId`].
//!
//! Every node lives in a single [`SlotMap`] owned by the [`Scene`]. A node is
//! either a [`Widget`] or a layout; layouts own an ordered list of child ids
//! and every node keeps a non-owning handle to its parent. Nothing holds a
//! reference into the arena, so parent links can never form an ownership
//! cycle.
//!
//! All mutating operations validate their arguments before touching the
//! arena. A call that returns an error leaves the scene exactly as it was.
//!
//! # Example
//!
//! ```
//! use edlkit_core::layout::GeometryAccess;
//! use edlkit_core::{Scene, Widget};
//!
//! let mut scene = Scene::new();
//! let column = scene.create_vbox();
//! let row = scene.create_hbox();
//!
//! let a = scene.create_widget(Widget::rectangle("a").with_size(10, 10));
//! let b = scene.create_widget(Widget::rectangle("b").with_size(10, 10));
//! scene.add_widget(row, a).unwrap();
//! scene.add_widget(row, b).unwrap();
//! scene.add_layout(column, row).unwrap();
//!
//! // Moving a layout moves everything inside it.
//! scene.move_to(column, 100, 50);
//! assert_eq!(scene.geometry(b).x, 115);
//! assert_eq!(scene.geometry(column).y, 50);
//! ```

use slotmap::{SlotMap, new_key_type};

use crate::alignment::{Alignment, AlignmentSet};
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::Rect;
use crate::layout::{GeometryAccess, Layout, LayoutKind};
use crate::logging::targets;
use crate::widget::Widget;

new_key_type! {
    /// Handle to a node in a [`Scene`].
    pub struct NodeId;
}

/// A layout node: a placement strategy plus its ordered children.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    kind: LayoutKind,
    children: Vec<NodeId>,
}

impl LayoutNode {
    fn new(kind: LayoutKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// The placement strategy.
    #[inline]
    pub fn kind(&self) -> &LayoutKind {
        &self.kind
    }

    /// Children in insertion order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Number of direct children.
    #[inline]
    pub fn count(&self) -> usize {
        self.children.len()
    }

    /// Whether the layout has no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// What a node holds.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeContent {
    /// A drawable widget.
    Widget(Widget),
    /// A layout of other nodes.
    Layout(LayoutNode),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    content: NodeContent,
}

/// Arena of widgets and layouts.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: SlotMap<NodeId, Node>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Creation
    // =========================================================================

    /// Add a widget to the arena. It starts without a parent.
    pub fn create_widget(&mut self, widget: Widget) -> NodeId {
        let id = self.nodes.insert(Node {
            parent: None,
            content: NodeContent::Widget(widget),
        });
        tracing::trace!(target: targets::SCENE, ?id, "created widget");
        id
    }

    /// Add an empty layout with the given strategy.
    pub fn create_layout(&mut self, kind: impl Into<LayoutKind>) -> NodeId {
        let kind = kind.into();
        let name = kind.name();
        let id = self.nodes.insert(Node {
            parent: None,
            content: NodeContent::Layout(LayoutNode::new(kind)),
        });
        tracing::trace!(target: targets::SCENE, ?id, layout = name, "created layout");
        id
    }

    /// Add an empty horizontal box layout.
    pub fn create_hbox(&mut self) -> NodeId {
        self.create_layout(LayoutKind::hbox())
    }

    /// Add an empty vertical box layout.
    pub fn create_vbox(&mut self) -> NodeId {
        self.create_layout(LayoutKind::vbox())
    }

    /// Add an empty stacked layout.
    pub fn create_stacked(&mut self) -> NodeId {
        self.create_layout(LayoutKind::stacked())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes without a parent.
    pub fn roots(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(id, _)| id)
            .collect()
    }

    /// Whether `id` refers to a node in this scene.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// The content of a node.
    pub fn content(&self, id: NodeId) -> Option<&NodeContent> {
        self.nodes.get(id).map(|node| &node.content)
    }

    /// The widget stored at `id`, if it is one.
    pub fn widget(&self, id: NodeId) -> Option<&Widget> {
        match self.content(id)? {
            NodeContent::Widget(widget) => Some(widget),
            NodeContent::Layout(_) => None,
        }
    }

    /// The layout stored at `id`, if it is one.
    pub fn layout(&self, id: NodeId) -> Option<&LayoutNode> {
        match self.content(id)? {
            NodeContent::Layout(layout) => Some(layout),
            NodeContent::Widget(_) => None,
        }
    }

    /// Whether `id` is a layout.
    pub fn is_layout(&self, id: NodeId) -> bool {
        self.layout(id).is_some()
    }

    /// The parent layout of a node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id)?.parent
    }

    /// Children of a layout; empty for widgets and unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.layout(id).map(LayoutNode::children).unwrap_or(&[])
    }

    /// Number of direct children of a layout.
    pub fn count(&self, id: NodeId) -> usize {
        self.children(id).len()
    }

    /// Current spacing of a layout.
    pub fn spacing(&self, layout: NodeId) -> LayoutResult<Option<i32>> {
        Ok(self.layout_node(layout)?.kind.spacing())
    }

    /// Every widget reachable from `id`, depth first in child order.
    ///
    /// A widget id yields itself.
    pub fn leaf_widgets(&self, id: NodeId) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            match self.content(current) {
                Some(NodeContent::Widget(_)) => leaves.push(current),
                Some(NodeContent::Layout(layout)) => {
                    stack.extend(layout.children.iter().rev().copied());
                }
                None => {}
            }
        }
        leaves
    }

    /// Whether `ancestor` appears on the parent chain of `id` (or is `id`).
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        let mut steps = 0;
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            steps += 1;
            if steps > self.nodes.len() {
                break;
            }
            current = self.parent(node);
        }
        false
    }

    // =========================================================================
    // Tree mutation
    // =========================================================================

    /// Insert a widget into `layout` at `index`.
    ///
    /// The index is clamped to the number of children. A widget that already
    /// belongs to a layout is moved; a nested layout it leaves empty is
    /// detached from its own parent.
    pub fn insert_widget(&mut self, layout: NodeId, index: usize, widget: NodeId) -> LayoutResult<()> {
        self.layout_node(layout)?;
        match self.node(widget)?.content {
            NodeContent::Widget(_) => {}
            NodeContent::Layout(_) => return Err(LayoutError::NotAWidget(widget)),
        }
        self.attach(layout, index, widget)
    }

    /// Insert a nested layout into `layout` at `index`.
    ///
    /// The child must be a non-empty layout and must not be `layout` or one
    /// of its ancestors.
    pub fn insert_layout(&mut self, layout: NodeId, index: usize, child: NodeId) -> LayoutResult<()> {
        self.layout_node(layout)?;
        let nested = self.layout_node(child)?;
        if self.is_ancestor_or_self(child, layout) {
            return Err(LayoutError::CircularParentage {
                parent: layout,
                child,
            });
        }
        if nested.is_empty() {
            return Err(LayoutError::EmptyLayout(child));
        }
        self.attach(layout, index, child)
    }

    /// Append a widget to `layout`.
    pub fn add_widget(&mut self, layout: NodeId, widget: NodeId) -> LayoutResult<()> {
        let index = self.layout_node(layout)?.count();
        self.insert_widget(layout, index, widget)
    }

    /// Append a nested layout to `layout`.
    pub fn add_layout(&mut self, layout: NodeId, child: NodeId) -> LayoutResult<()> {
        let index = self.layout_node(layout)?.count();
        self.insert_layout(layout, index, child)
    }

    // Arguments are validated by the callers.
    fn attach(&mut self, layout: NodeId, index: usize, child: NodeId) -> LayoutResult<()> {
        let previous = self
            .detach(child)
            .map(|parent| self.release_emptied(parent, layout));

        let node = self.layout_node_mut(layout)?;
        let index = index.min(node.children.len());
        node.children.insert(index, child);
        if let Some(child_node) = self.nodes.get_mut(child) {
            child_node.parent = Some(layout);
        }

        tracing::debug!(
            target: targets::SCENE,
            ?layout,
            ?child,
            index,
            "inserted child"
        );

        if let Some(previous) = previous.filter(|&p| p != layout) {
            self.shuffle(previous)?;
        }
        self.shuffle(layout)
    }

    // Nested layouts are never empty: a layout left without children is
    // detached in turn. Returns the nearest layout that still needs arranging.
    fn release_emptied(&mut self, mut layout: NodeId, keep: NodeId) -> NodeId {
        while layout != keep && self.layout(layout).is_some_and(LayoutNode::is_empty) {
            let Some(parent) = self.detach(layout) else {
                break;
            };
            tracing::debug!(target: targets::SCENE, ?layout, from = ?parent, "released empty layout");
            layout = parent;
        }
        layout
    }

    fn detach(&mut self, child: NodeId) -> Option<NodeId> {
        let parent = self.nodes.get_mut(child)?.parent.take()?;
        if let Some(Node {
            content: NodeContent::Layout(layout),
            ..
        }) = self.nodes.get_mut(parent)
        {
            layout.children.retain(|&c| c != child);
            tracing::debug!(target: targets::SCENE, ?child, from = ?parent, "detached child");
        }
        Some(parent)
    }

    // =========================================================================
    // Layout settings
    // =========================================================================

    /// Re-arrange `layout` and every ancestor above it.
    pub fn shuffle(&mut self, layout: NodeId) -> LayoutResult<()> {
        self.layout_node(layout)?;

        let limit = self.nodes.len();
        let mut current = layout;
        let mut depth = 0;
        loop {
            self.arrange(current, depth)?;
            let Some(parent) = self.parent(current) else {
                break;
            };
            depth += 1;
            if depth > limit {
                tracing::warn!(
                    target: targets::LAYOUT,
                    ?layout,
                    "parent chain longer than the scene, stopping propagation"
                );
                break;
            }
            current = parent;
        }
        Ok(())
    }

    fn arrange(&mut self, id: NodeId, depth: usize) -> LayoutResult<()> {
        let node = self.layout_node(id)?;
        let kind = node.kind.clone();
        let children = node.children.clone();

        if depth == 0 {
            tracing::debug!(
                target: targets::LAYOUT,
                layout = kind.name(),
                ?id,
                children = children.len(),
                "arranging"
            );
        } else {
            tracing::trace!(
                target: targets::LAYOUT,
                layout = kind.name(),
                ?id,
                depth,
                "propagating to ancestor"
            );
        }

        kind.arrange(&children, self);
        Ok(())
    }

    /// Set the spacing of a layout and re-arrange it.
    ///
    /// Stacked layouts only accept `0`; anything else fails and leaves the
    /// layout untouched.
    pub fn set_spacing(&mut self, layout: NodeId, spacing: i32) -> LayoutResult<()> {
        self.layout_node_mut(layout)?.kind.set_spacing(spacing)?;
        self.shuffle(layout)
    }

    /// Set the alignment of a layout and re-arrange it.
    ///
    /// For a stacked layout the value becomes a one-element set.
    pub fn set_alignment(&mut self, layout: NodeId, alignment: Alignment) -> LayoutResult<()> {
        if self.layout_node_mut(layout)?.kind.set_alignment(alignment) {
            self.shuffle(layout)?;
        }
        Ok(())
    }

    /// Set the alignment set of a stacked layout.
    ///
    /// Nothing happens when the set is unchanged.
    pub fn set_stack_alignment(
        &mut self,
        layout: NodeId,
        alignment: impl Into<AlignmentSet>,
    ) -> LayoutResult<()> {
        let stacked = self
            .layout_node_mut(layout)?
            .kind
            .as_stacked_mut()
            .ok_or(LayoutError::NotStacked(layout))?;
        if stacked.set_alignment(alignment.into()) {
            self.shuffle(layout)?;
        }
        Ok(())
    }

    // =========================================================================
    // Widgets
    // =========================================================================

    /// Edit a widget in place.
    ///
    /// When the edit changes the widget's size, its parent layout is
    /// re-arranged.
    pub fn update_widget<R>(&mut self, id: NodeId, f: impl FnOnce(&mut Widget) -> R) -> LayoutResult<R> {
        let node = self.node_mut(id)?;
        let parent = node.parent;
        let NodeContent::Widget(widget) = &mut node.content else {
            return Err(LayoutError::NotAWidget(id));
        };

        let before = (widget.w(), widget.h());
        let result = f(widget);
        let resized = before != (widget.w(), widget.h());

        if let Some(parent) = parent.filter(|_| resized) {
            self.shuffle(parent)?;
        }
        Ok(result)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn node(&self, id: NodeId) -> LayoutResult<&Node> {
        self.nodes.get(id).ok_or(LayoutError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> LayoutResult<&mut Node> {
        self.nodes.get_mut(id).ok_or(LayoutError::UnknownNode(id))
    }

    fn layout_node(&self, id: NodeId) -> LayoutResult<&LayoutNode> {
        match &self.node(id)?.content {
            NodeContent::Layout(layout) => Ok(layout),
            NodeContent::Widget(_) => Err(LayoutError::NotALayout(id)),
        }
    }

    fn layout_node_mut(&mut self, id: NodeId) -> LayoutResult<&mut LayoutNode> {
        match &mut self.node_mut(id)?.content {
            NodeContent::Layout(layout) => Ok(layout),
            NodeContent::Widget(_) => Err(LayoutError::NotALayout(id)),
        }
    }

    fn translate(&mut self, id: NodeId, dx: i32, dy: i32) {
        if dx == 0 && dy == 0 {
            return;
        }
        for leaf in self.leaf_widgets(id) {
            if let Some(widget) = self.widget_mut(leaf) {
                widget.set_x(widget.x() + dx);
                widget.set_y(widget.y() + dy);
            }
        }
    }

    fn widget_mut(&mut self, id: NodeId) -> Option<&mut Widget> {
        match &mut self.nodes.get_mut(id)?.content {
            NodeContent::Widget(widget) => Some(widget),
            NodeContent::Layout(_) => None,
        }
    }
}

impl GeometryAccess for Scene {
    /// A layout's geometry is the bounding box of the widgets inside it.
    fn geometry(&self, id: NodeId) -> Rect {
        match self.content(id) {
            Some(NodeContent::Widget(widget)) => widget.rect(),
            Some(NodeContent::Layout(_)) => Rect::bounding(
                self.leaf_widgets(id)
                    .into_iter()
                    .filter_map(|leaf| self.widget(leaf).map(Widget::rect)),
            ),
            None => Rect::ZERO,
        }
    }

    fn set_x(&mut self, id: NodeId, x: i32) {
        if self.is_layout(id) {
            let dx = x - self.geometry(id).x;
            self.translate(id, dx, 0);
        } else if let Some(widget) = self.widget_mut(id) {
            widget.set_x(x);
        }
    }

    fn set_y(&mut self, id: NodeId, y: i32) {
        if self.is_layout(id) {
            let dy = y - self.geometry(id).y;
            self.translate(id, 0, dy);
        } else if let Some(widget) = self.widget_mut(id) {
            widget.set_y(y);
        }
    }
}
