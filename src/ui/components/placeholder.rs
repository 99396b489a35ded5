// SPDX-License-Identifier: MPL-2.0
//! Placeholder tile shown where an embedded image is not shipped.

use crate::ui::design_tokens::{palette, typography};
use iced::widget::{canvas, container, text, Stack};
use iced::{mouse, Color, Element, Length, Rectangle, Theme};

const STRIPE_SPACING: f32 = 24.0;
const BACKGROUND: Color = palette::GRAY_100;
const STRIPE: Color = palette::GRAY_200;
const LABEL: Color = palette::GRAY_700;

/// Diagonal-striped backdrop widget.
#[derive(Debug, Clone, Copy, Default)]
struct StripedTile;

impl<Message> canvas::Program<Message> for StripedTile {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let backdrop = canvas::Path::rectangle(
            iced::Point::ORIGIN,
            iced::Size::new(bounds.width, bounds.height),
        );
        frame.fill(&backdrop, BACKGROUND);

        // Stripes run corner to corner; start off-canvas so the top-left
        // corner is covered too.
        let reach = bounds.width + bounds.height;
        let stripes = ((reach / STRIPE_SPACING).ceil() as i32).max(1);
        for i in 0..stripes {
            let start_x = i as f32 * STRIPE_SPACING;
            let path = canvas::Path::new(|p| {
                p.move_to(iced::Point::new(start_x, 0.0));
                p.line_to(iced::Point::new(start_x - bounds.height, bounds.height));
            });
            frame.stroke(&path, canvas::Stroke::default().with_width(1.0).with_color(STRIPE));
        }

        vec![frame.into_geometry()]
    }
}

/// A labeled tile standing in for a missing image asset.
pub fn view<'a, Message: 'a>(label: String) -> Element<'a, Message> {
    Stack::new()
        .push(
            canvas::Canvas::new(StripedTile)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(
            container(
                text(label)
                    .size(typography::BODY_SM)
                    .color(LABEL),
            )
            .center(Length::Fill),
        )
        .into()
}

const _: () = {
    assert!(STRIPE_SPACING > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stripe_contrasts_with_backdrop() {
        assert_ne!(BACKGROUND, STRIPE);
    }
}
