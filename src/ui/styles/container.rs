// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{gradient, Background, Border, Color, Radians, Theme};

/// Generic panel surface used for the support form and toolbars.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Card surface for mission cards, building features, and plan thumbnails.
pub fn card(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        border: Border {
            color: if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        text_color: Some(base.text),
        ..Default::default()
    }
}

/// Scripture highlight panel closing the mission, building, and support
/// sections.
pub fn highlight(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);

    container::Style {
        background: Some(Background::Color(if is_light {
            palette::PRIMARY_100
        } else {
            palette::GRAY_700
        })),
        border: Border {
            color: palette::PRIMARY_500,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        text_color: Some(if is_light {
            palette::GRAY_900
        } else {
            palette::WHITE
        }),
        ..Default::default()
    }
}

/// Hero banner background: a deep amber gradient with light text.
pub fn hero(_theme: &Theme) -> container::Style {
    let fill = gradient::Linear::new(Radians(std::f32::consts::PI))
        .add_stop(0.0, palette::PRIMARY_800)
        .add_stop(1.0, palette::PRIMARY_600);

    container::Style {
        background: Some(Background::Gradient(fill.into())),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Footer background: dark surface with light text in both themes.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_text_is_light() {
        let style = footer(&Theme::Light);
        assert_eq!(style.text_color, Some(palette::WHITE));
    }
}
