//! Error types for edlkit-core.

use thiserror::Error;

use crate::scene::NodeId;

/// Broad category of a [`LayoutError`].
///
/// Type errors mean the wrong kind of node was passed to an operation and the
/// call itself has to change. Value errors mean the node kind was right but
/// a value was rejected. Lookup errors mean a handle no longer refers to a
/// node in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong node category for the operation.
    Type,
    /// Rejected value.
    Value,
    /// Unknown or destroyed node handle.
    Lookup,
}

/// Errors raised by scene and layout operations.
///
/// Every error is raised synchronously by the offending call; a call that
/// fails leaves the scene unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The node is not in the scene.
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),

    /// The node was expected to be a layout.
    #[error("node {0:?} is not a layout")]
    NotALayout(NodeId),

    /// The node was expected to be a widget.
    #[error("node {0:?} is not a widget")]
    NotAWidget(NodeId),

    /// The operation only applies to stacked layouts.
    #[error("layout {0:?} is not a stacked layout")]
    NotStacked(NodeId),

    /// A layout without children has no geometry and cannot be nested.
    #[error("cannot add an empty layout {0:?}")]
    EmptyLayout(NodeId),

    /// Stacked layouts overlap their children and have no spacing.
    #[error("stacked layout can not have non-zero spacing (got {0})")]
    StackedSpacing(i32),

    /// The alignment name is not recognised.
    #[error("invalid alignment '{0}'")]
    InvalidAlignment(String),

    /// Two alignment values constrain the same axis.
    #[error("alignments {first} and {second} both constrain the {axis} axis")]
    ConflictingAlignment {
        first: String,
        second: String,
        axis: String,
    },

    /// Stacked layouts take at most one alignment per axis.
    #[error("at most two alignment values are allowed, got {0}")]
    TooManyAlignments(usize),

    /// Nesting would make a layout its own descendant.
    #[error("cannot nest layout {child:?} inside its own descendant {parent:?}")]
    CircularParentage { parent: NodeId, child: NodeId },

    /// Widths and heights are never negative.
    #[error("invalid size {w}x{h}: dimensions must not be negative")]
    NegativeSize { w: i32, h: i32 },

    /// The value could not be interpreted as a font.
    #[error("invalid font specification: {0}")]
    InvalidFont(String),
}

impl LayoutError {
    /// The broad category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownNode(_) => ErrorKind::Lookup,
            Self::NotALayout(_) | Self::NotAWidget(_) | Self::NotStacked(_) => ErrorKind::Type,
            Self::EmptyLayout(_)
            | Self::StackedSpacing(_)
            | Self::InvalidAlignment(_)
            | Self::ConflictingAlignment { .. }
            | Self::TooManyAlignments(_)
            | Self::CircularParentage { .. }
            | Self::NegativeSize { .. }
            | Self::InvalidFont(_) => ErrorKind::Value,
        }
    }
}

/// Result type for scene and layout operations.
pub type LayoutResult<T> = std::result::Result<T, LayoutError>;
