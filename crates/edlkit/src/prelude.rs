//! Prelude module for edlkit.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use edlkit::prelude::*;
//! ```
//!
//! This provides access to:
//! - The designer and its configuration (`Designer`, `DesignerConfig`)
//! - The scene and its geometry helpers (`Scene`, `GeometryAccess`)
//! - Widgets and their attributes (`Widget`, `Font`, `Visibility`)
//! - Alignment values (`Alignment`, `AlignmentSet`)

// ============================================================================
// Designer
// ============================================================================

pub use crate::config::DesignerConfig;
pub use crate::designer::Designer;
pub use crate::error::{DesignerError, Result};
pub use crate::launch::{LaunchOptions, Preview};
pub use crate::template::{TemplateRenderer, Templates};

// ============================================================================
// Scene and Layouts
// ============================================================================

pub use edlkit_core::layout::{GeometryAccess, Layout};
pub use edlkit_core::{NodeId, Scene};

// ============================================================================
// Widgets
// ============================================================================

pub use edlkit_core::{AttributeValue, Font, FontChoice, Visibility, Widget};

// ============================================================================
// Geometry and Alignment
// ============================================================================

pub use edlkit_core::{Alignment, AlignmentSet, Point, Rect};
