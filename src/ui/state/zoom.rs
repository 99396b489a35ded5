// SPDX-License-Identifier: MPL-2.0
//! Zoom state for the lightbox image preview.

pub use crate::config::{
    BUTTON_ZOOM_STEP, DEFAULT_ZOOM_LEVEL, MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL, WHEEL_ZOOM_STEP,
};

/// Zoom factor, guaranteed to be within the valid range (1x to 3x).
///
/// This type ensures that zoom values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLevel(f32);

impl ZoomLevel {
    /// Creates a new zoom level, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        Self(factor.clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL))
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn factor(self) -> f32 {
        self.0
    }

    /// Returns the zoom as a display percentage (1.0 → 100).
    #[must_use]
    pub fn as_percent(self) -> f32 {
        self.0 * 100.0
    }

    /// Returns whether the zoom is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_LEVEL
    }

    /// Returns whether the zoom is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_LEVEL
    }

    /// Increases zoom by the given step.
    #[must_use]
    pub fn zoom_in(self, step: f32) -> Self {
        Self::new(self.0 + step)
    }

    /// Decreases zoom by the given step.
    #[must_use]
    pub fn zoom_out(self, step: f32) -> Self {
        Self::new(self.0 - step)
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(ZoomLevel::new(0.2).factor(), MIN_ZOOM_LEVEL);
        assert_eq!(ZoomLevel::new(99.0).factor(), MAX_ZOOM_LEVEL);
        assert_eq!(ZoomLevel::new(2.0).factor(), 2.0);
    }

    #[test]
    fn default_is_unzoomed() {
        let zoom = ZoomLevel::default();
        assert!(zoom.is_min());
        assert!(!zoom.is_max());
        assert_eq!(zoom.as_percent(), 100.0);
    }

    #[test]
    fn zoom_in_out_step_symmetrically() {
        let zoom = ZoomLevel::default().zoom_in(BUTTON_ZOOM_STEP);
        assert_eq!(zoom.factor(), DEFAULT_ZOOM_LEVEL + BUTTON_ZOOM_STEP);
        assert_eq!(zoom.zoom_out(BUTTON_ZOOM_STEP), ZoomLevel::default());
    }

    #[test]
    fn repeated_zoom_in_saturates_at_max() {
        let mut zoom = ZoomLevel::default();
        for _ in 0..100 {
            zoom = zoom.zoom_in(BUTTON_ZOOM_STEP);
        }
        assert!(zoom.is_max());
        assert_eq!(zoom.factor(), MAX_ZOOM_LEVEL);
    }

    #[test]
    fn wheel_steps_are_finer_than_buttons() {
        let from_wheel = ZoomLevel::default().zoom_in(WHEEL_ZOOM_STEP);
        let from_button = ZoomLevel::default().zoom_in(BUTTON_ZOOM_STEP);
        assert!(from_wheel.factor() < from_button.factor());
    }
}
