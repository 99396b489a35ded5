// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for glyph icons.
//!
//! Icons are Unicode glyphs rendered as text rather than bitmap assets. This
//! keeps the binary free of image resources and lets every icon inherit the
//! theme's text color unless a call site overrides it.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//! use crate::ui::design_tokens::sizing;
//!
//! let close_button = button(icons::sized(icons::cross(), sizing::ICON_SM));
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the glyph's appearance,
//! not the action context (e.g., `cross` not `close_lightbox`).

use iced::widget::{text, Text};

/// Macro to define an icon function returning a text widget for a glyph.
macro_rules! define_glyph {
    ($name:ident, $glyph:literal, $doc:literal) => {
        #[doc = $doc]
        #[must_use]
        pub fn $name() -> Text<'static> {
            text($glyph)
        }
    };
}

// =============================================================================
// Navigation Glyphs
// =============================================================================

define_glyph!(
    chevron_left,
    "‹",
    "Single chevron left: previous slide or plan."
);
define_glyph!(
    chevron_right,
    "›",
    "Single chevron right: next slide or plan."
);

// =============================================================================
// Status & Feedback Glyphs
// =============================================================================

define_glyph!(checkmark, "✓", "Checkmark: success feedback.");
define_glyph!(info, "ℹ", "Info mark: informational feedback.");
define_glyph!(warning, "⚠", "Warning triangle: warnings and errors.");
define_glyph!(cross, "✕", "Cross: dismiss or close.");

// =============================================================================
// Zoom Glyphs
// =============================================================================

define_glyph!(plus, "+", "Plus sign: zoom in.");
define_glyph!(minus, "−", "Minus sign: zoom out.");

// =============================================================================
// Indicator Glyphs
// =============================================================================

define_glyph!(dot_filled, "●", "Filled dot: active carousel slide.");
define_glyph!(dot_hollow, "○", "Hollow dot: inactive carousel slide.");
define_glyph!(menu, "☰", "Trigram: compact navigation menu toggle.");

// =============================================================================
// Theme & Contact Glyphs
// =============================================================================

define_glyph!(sun, "☀", "Sun: switch to light theme.");
define_glyph!(moon, "☾", "Crescent moon: switch to dark theme.");
define_glyph!(envelope, "✉", "Envelope: email contact.");
define_glyph!(telephone, "☎", "Telephone: phone contact.");
define_glyph!(church, "⛪", "Church: organization identity mark.");

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates an icon with the specified glyph size.
#[must_use]
pub fn sized(icon: Text<'static>, size: f32) -> Text<'static> {
    icon.size(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_glyphs_construct() {
        let _ = chevron_left();
        let _ = chevron_right();
        let _ = checkmark();
        let _ = info();
        let _ = warning();
        let _ = cross();
        let _ = plus();
        let _ = minus();
        let _ = dot_filled();
        let _ = dot_hollow();
        let _ = sun();
        let _ = moon();
        let _ = envelope();
        let _ = telephone();
        let _ = church();
    }

    #[test]
    fn sized_helper_works() {
        let icon = sized(cross(), 24.0);
        let _ = icon;
    }
}
