// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning a zoomed image.

use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Position where the drag started
    pub start_position: Option<Point>,

    /// Image pan offset when the drag started
    pub start_offset: Option<Vector>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Point, offset: Vector) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.start_offset = Some(offset);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.start_offset = None;
    }

    /// Calculates the new pan offset based on cursor movement during drag.
    ///
    /// The image follows the cursor directly: dragging right moves the image
    /// right. The offset is unbounded, so the image can be pushed past the
    /// frame edges at high zoom.
    #[must_use]
    pub fn calculate_offset(&self, current_position: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }

        let start_pos = self.start_position?;
        let start_offset = self.start_offset?;

        Some(Vector {
            x: start_offset.x + (current_position.x - start_pos.x),
            y: start_offset.y + (current_position.y - start_pos.y),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging);
        assert!(state.start_position.is_none());
        assert!(state.start_offset.is_none());
    }

    #[test]
    fn start_drag_sets_state() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), Vector::new(20.0, 10.0));

        assert!(state.is_dragging);
        assert_eq!(state.start_position, Some(Point::new(100.0, 50.0)));
        assert_eq!(state.start_offset, Some(Vector::new(20.0, 10.0)));
    }

    #[test]
    fn stop_drag_clears_state() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), Vector::new(20.0, 10.0));
        state.stop();

        assert!(!state.is_dragging);
        assert!(state.start_position.is_none());
        assert!(state.start_offset.is_none());
    }

    #[test]
    fn calculate_offset_returns_none_when_not_dragging() {
        let state = DragState::default();
        let result = state.calculate_offset(Point::new(100.0, 50.0));
        assert!(result.is_none());
    }

    #[test]
    fn calculate_offset_follows_cursor() {
        let mut state = DragState::default();
        state.start(Point::new(200.0, 150.0), Vector::new(50.0, 30.0));

        // Cursor moved right/down by 25 pixels, so the image follows.
        let new_offset = state.calculate_offset(Point::new(225.0, 175.0));
        assert_eq!(new_offset, Some(Vector::new(75.0, 55.0)));
    }

    #[test]
    fn calculate_offset_can_go_negative() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 100.0), Vector::new(0.0, 0.0));

        let new_offset = state.calculate_offset(Point::new(40.0, 70.0));
        assert_eq!(new_offset, Some(Vector::new(-60.0, -30.0)));
    }
}
