// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state kept separate from the widgets that render it.

pub mod drag;
pub mod scroll_lock;
pub mod zoom;

// Re-export commonly used types for convenience
pub use drag::DragState;
pub use scroll_lock::ScrollLock;
pub use zoom::ZoomLevel;
