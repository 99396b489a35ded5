// SPDX-License-Identifier: MPL-2.0
//! Progress bar style for the fundraising tracker.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::progress_bar;
use iced::{Background, Border, Theme};

/// Brand-colored bar over a neutral track.
pub fn fundraising(theme: &Theme) -> progress_bar::Style {
    let is_light = matches!(theme, Theme::Light);

    progress_bar::Style {
        background: Background::Color(if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        }),
        bar: Background::Color(palette::PRIMARY_500),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_uses_brand_color_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let style = fundraising(&theme);
            assert_eq!(style.bar, Background::Color(palette::PRIMARY_500));
            assert_ne!(style.bar, style.background);
        }
    }
}
