// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the lightbox backdrop, toolbar, and position counter.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn container_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

fn container_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Near-opaque backdrop behind the lightbox.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Generic style for overlay indicators like the zoom readout and the
/// image counter.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(container_background())),
        text_color: Some(WHITE),
        border: Border {
            color: container_border(),
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_darker_than_indicator() {
        let backdrop_style = backdrop(&Theme::Dark);
        let indicator_style = indicator(4.0)(&Theme::Dark);

        let alpha = |style: &container::Style| match style.background {
            Some(Background::Color(c)) => c.a,
            _ => 0.0,
        };

        assert!(alpha(&backdrop_style) > alpha(&indicator_style));
    }
}
