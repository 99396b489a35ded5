// SPDX-License-Identifier: MPL-2.0
//! Auto-advancing carousel showing the building renders.
//!
//! The carousel cycles through its slides on a timer and wraps at both ends.
//! Navigation indices are normalized, so stepping backwards from the first
//! slide lands on the last one.

use crate::content::{self, ImageEntry};
use crate::i18n::fluent::I18n;
use crate::ui::components::placeholder;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, tooltip, Container, Row, Stack};
use iced::{ContentFit, Element, Length};

/// Carousel state: which slide is showing.
#[derive(Debug, Clone)]
pub struct State {
    images: &'static [ImageEntry],
    current_index: usize,
}

/// Messages emitted by the carousel controls and the auto-advance timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Next,
    Previous,
    GoTo(usize),
    AutoAdvance,
}

impl State {
    #[must_use]
    pub fn new(images: &'static [ImageEntry]) -> Self {
        Self {
            images,
            current_index: 0,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Next => self.go_to(self.current_index as isize + 1),
            Message::Previous => self.go_to(self.current_index as isize - 1),
            Message::GoTo(index) => self.go_to(index as isize),
            Message::AutoAdvance => self.auto_advance(),
        }
    }

    /// Jumps to a slide, wrapping out-of-range indices into the valid range.
    fn go_to(&mut self, index: isize) {
        if self.images.is_empty() {
            return;
        }
        let len = self.images.len() as isize;
        let normalized = ((index % len) + len) % len;
        self.current_index = normalized as usize;
    }

    /// Advances to the next slide on the timer tick. A single slide (or no
    /// slides) stays put, matching [`should_auto_advance`].
    ///
    /// [`should_auto_advance`]: Self::should_auto_advance
    fn auto_advance(&mut self) {
        if self.images.len() <= 1 {
            return;
        }
        self.current_index = (self.current_index + 1) % self.images.len();
    }

    /// Whether the auto-advance timer should be running.
    #[must_use]
    pub fn should_auto_advance(&self) -> bool {
        self.images.len() > 1
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let Some(current) = self.images.get(self.current_index) else {
            return placeholder::view(i18n.tr("lightbox-missing-image"));
        };

        let slide: Element<'a, Message> = match content::image_handle(current.file) {
            Some(handle) => image(handle)
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .into(),
            None => placeholder::view(i18n.tr(current.label_key)),
        };

        let mut stack = Stack::new().push(
            Container::new(slide)
                .width(Length::Fill)
                .height(Length::Fill),
        );

        if self.images.len() > 1 {
            stack = stack
                .push(self.control(
                    icons::chevron_left(),
                    Message::Previous,
                    Horizontal::Left,
                    i18n.tr("carousel-previous"),
                ))
                .push(self.control(
                    icons::chevron_right(),
                    Message::Next,
                    Horizontal::Right,
                    i18n.tr("carousel-next"),
                ))
                .push(self.dots(i18n));
        }

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CAROUSEL_HEIGHT))
            .into()
    }

    fn control<'a>(
        &self,
        glyph: iced::widget::Text<'a>,
        message: Message,
        side: Horizontal,
        tip: String,
    ) -> Element<'a, Message> {
        let arrow = button(glyph.size(typography::TITLE_LG))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_SUBTLE,
                opacity::OVERLAY_MEDIUM,
            ))
            .on_press(message);

        Container::new(styles::tooltip::styled(arrow, tip, tooltip::Position::Top))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::SM)
            .align_x(side)
            .align_y(Vertical::Center)
            .into()
    }

    fn dots<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let mut row = Row::new().spacing(spacing::XS);
        for i in 0..self.images.len() {
            let glyph = if i == self.current_index {
                icons::dot_filled()
            } else {
                icons::dot_hollow()
            };
            let number = (i + 1).to_string();
            let dot = button(glyph.size(typography::BODY_SM))
                .padding(spacing::XXS)
                .style(styles::button::overlay(
                    palette::WHITE,
                    opacity::TRANSPARENT,
                    opacity::OVERLAY_MEDIUM,
                ))
                .on_press(Message::GoTo(i));
            row = row.push(styles::tooltip::styled(
                dot,
                i18n.tr_with_args("carousel-goto", &[("number", number.as_str())]),
                tooltip::Position::Top,
            ));
        }

        Container::new(row)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::SM)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .into()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(content::CHURCH_IMAGES)
    }
}
