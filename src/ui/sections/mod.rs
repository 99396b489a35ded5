// SPDX-License-Identifier: MPL-2.0
//! Page sections composing the single scrollable layout.
//!
//! Each submodule renders one region of the page as a free function over
//! shared state. Section-local interactions are reported through [`Message`]
//! and routed by the application.

pub mod building;
pub mod footer;
pub mod header;
pub mod hero;
pub mod project;

use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

use crate::content::{PageSection, Scripture};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::gallery::carousel;
use crate::ui::styles;

/// Messages emitted by the static page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A navigation link or call-to-action targeting a section was pressed.
    NavigateTo(PageSection),
    /// The header theme toggle was pressed.
    ThemeToggled,
    /// The compact navigation menu was opened or closed.
    MenuToggled,
    /// A carousel control inside the building section.
    Carousel(carousel::Message),
    /// The architectural plans strip was expanded or collapsed.
    PlansToggled,
    /// A plan thumbnail was pressed (index into the plan images).
    PlanPressed(usize),
}

/// Centered section heading with its scripture verse underneath.
pub fn section_header<'a, M: 'a>(
    i18n: &I18n,
    title_key: &str,
    scripture: &Scripture,
) -> Element<'a, M> {
    let title = Text::new(i18n.tr(title_key)).size(typography::TITLE_LG);

    let quote = Container::new(
        Text::new(i18n.tr(scripture.quote_key))
            .size(typography::BODY_LG)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center);

    let reference = Text::new(scripture_reference(i18n, scripture))
        .size(typography::CAPTION)
        .color(palette::PRIMARY_600);

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(title)
        .push(quote)
        .push(reference)
        .into()
}

/// A scripture verse set off in a highlighted panel.
pub fn scripture_highlight<'a, M: 'a>(i18n: &I18n, scripture: &Scripture) -> Element<'a, M> {
    let quote = Container::new(
        Text::new(i18n.tr(scripture.quote_key))
            .size(typography::BODY_LG)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center);

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(quote)
        .push(Text::new(scripture_reference(i18n, scripture)).size(typography::BODY_SM));

    Container::new(content)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::highlight)
        .into()
}

/// Verse references render as an attribution line under the quote.
fn scripture_reference(i18n: &I18n, scripture: &Scripture) -> String {
    format!("- {}", i18n.tr(scripture.reference_key))
}
