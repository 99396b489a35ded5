// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module composes the single-page layout: a fixed header above the
//! scrollable section stack, with the lightbox and toast notifications
//! layered on top.

use super::{App, Message};
use crate::ui::notifications::Toast;
use crate::ui::sections::{building, footer, header, hero, project};
use crate::ui::widgets::scroll_gate::scroll_gate;
use iced::widget::{Column, Id, Scrollable, Stack};
use iced::{Element, Length};

/// Identifier of the page scrollable so navigation can snap to sections.
pub const PAGE_SCROLL_ID: &str = "page-scroll";

/// Renders the whole application.
pub fn view(app: &App) -> Element<'_, Message> {
    let page = Column::new()
        .push(hero::view(&app.i18n, &app.config.campaign).map(Message::Sections))
        .push(project::view(&app.i18n, &app.config.campaign).map(Message::Sections))
        .push(
            building::view(&app.i18n, &app.carousel, app.plans_expanded).map(Message::Sections),
        )
        .push(app.support.view(&app.i18n).map(Message::Support))
        .push(footer::view(&app.i18n).map(Message::Sections));

    let page = Scrollable::new(page)
        .id(Id::new(PAGE_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill);

    // While the lightbox is up the page underneath must not react to the
    // wheel, or zooming would also scroll the sections behind the overlay.
    let gated = scroll_gate(page, app.lightbox.is_open());

    let base = Column::new()
        .push(header::view(&app.i18n, app.is_dark, app.menu_open).map(Message::Sections))
        .push(gated);

    let mut layers = Stack::new().push(base);

    if app.lightbox.is_open() {
        layers = layers.push(app.lightbox.view(&app.i18n).map(Message::Lightbox));
    }

    layers = layers.push(
        Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification),
    );

    layers.into()
}
