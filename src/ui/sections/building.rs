// SPDX-License-Identifier: MPL-2.0
//! Building design: image carousel, architectural plans, features, timeline.

use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{button, image, tooltip, Column, Container, Row, Text};
use iced::{ContentFit, Element, Font, Length};

use super::Message;
use crate::content::{
    self, BuildingFeature, PhaseStatus, TimelinePhase, BUILDING_FEATURES, BUILDING_HIGHLIGHT,
    BUILDING_SCRIPTURE, PLAN_IMAGES, PROJECT_TIMELINE,
};
use crate::i18n::fluent::I18n;
use crate::ui::components::placeholder;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::gallery::carousel;
use crate::ui::{icons, styles};

/// Render the building design section.
pub fn view<'a>(
    i18n: &'a I18n,
    carousel: &'a carousel::State,
    plans_expanded: bool,
) -> Element<'a, Message> {
    let toggle = button(Text::new(i18n.tr("plans-view-more")).size(typography::BODY))
        .style(styles::button::secondary)
        .padding([spacing::XS, spacing::LG])
        .on_press(Message::PlansToggled);

    let mut column = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .padding([spacing::XL, spacing::LG])
        .align_x(Horizontal::Center)
        .push(super::section_header(
            i18n,
            "building-title",
            &BUILDING_SCRIPTURE,
        ))
        .push(carousel.view(i18n).map(Message::Carousel))
        .push(toggle);

    if plans_expanded {
        column = column.push(plans_grid(i18n));
    }

    column
        .push(features_grid(i18n))
        .push(timeline(i18n))
        .push(super::scripture_highlight(i18n, &BUILDING_HIGHLIGHT))
        .into()
}

/// Thumbnails of the architectural plans, revealed by the toggle. Pressing
/// one opens the lightbox on that plan.
fn plans_grid<'a>(i18n: &I18n) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::MD);

    for (row_index, chunk) in PLAN_IMAGES.chunks(3).enumerate() {
        let mut row = Row::new().spacing(spacing::MD);
        for (col_index, entry) in chunk.iter().enumerate() {
            let plan_index = row_index * 3 + col_index;
            row = row.push(plan_thumb(i18n, plan_index, entry.file, entry.label_key));
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn plan_thumb<'a>(
    i18n: &I18n,
    plan_index: usize,
    file: &'static str,
    label_key: &'static str,
) -> Element<'a, Message> {
    let thumb: Element<'a, Message> = match content::image_handle(file) {
        Some(handle) => image(handle)
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        None => placeholder::view(i18n.tr(label_key)),
    };

    let thumb_button = button(
        Container::new(thumb)
            .width(Length::Fixed(sizing::PLAN_CARD_WIDTH))
            .height(Length::Fixed(sizing::PLAN_CARD_HEIGHT)),
    )
    .padding(0.0)
    .style(styles::button::unselected)
    .on_press(Message::PlanPressed(plan_index));

    let number = (plan_index + 1).to_string();
    styles::tooltip::styled(
        thumb_button,
        i18n.tr_with_args("plans-thumb-label", &[("number", number.as_str())]),
        tooltip::Position::Top,
    )
    .into()
}

fn features_grid<'a>(i18n: &I18n) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::LG);
    for chunk in BUILDING_FEATURES.chunks(3) {
        let mut row = Row::new().spacing(spacing::LG);
        for feature in chunk {
            row = row.push(feature_card(i18n, feature));
        }
        grid = grid.push(row);
    }

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(subheading(i18n.tr("features-title")))
        .push(grid)
        .into()
}

fn feature_card<'a>(i18n: &I18n, feature: &BuildingFeature) -> Element<'a, Message> {
    let title_row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::checkmark(), sizing::ICON_SM).color(palette::PRIMARY_600))
        .push(
            Text::new(i18n.tr(feature.title_key))
                .size(typography::BODY_LG)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                }),
        );

    let content = Column::new()
        .spacing(spacing::XS)
        .push(title_row)
        .push(Text::new(i18n.tr(feature.description_key)).size(typography::BODY));

    Container::new(content)
        .width(Length::FillPortion(1))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn timeline<'a>(i18n: &I18n) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::MD);
    for phase in PROJECT_TIMELINE {
        list = list.push(timeline_row(i18n, phase));
    }

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(subheading(i18n.tr("timeline-title")))
        .push(list)
        .into()
}

fn timeline_row<'a>(i18n: &I18n, phase: &TimelinePhase) -> Element<'a, Message> {
    let details = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(i18n.tr(phase.title_key))
                .size(typography::BODY_LG)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                }),
        )
        .push(Text::new(i18n.tr(phase.description_key)).size(typography::BODY))
        .push(
            Text::new(i18n.tr(phase.date_key))
                .size(typography::BODY_SM)
                .color(palette::PRIMARY_600),
        );

    Row::new()
        .spacing(spacing::MD)
        .push(status_marker(phase.status))
        .push(details)
        .into()
}

fn status_marker<'a>(status: PhaseStatus) -> Element<'a, Message> {
    let (glyph, color) = match status {
        PhaseStatus::Completed => (icons::checkmark(), palette::SUCCESS_500),
        PhaseStatus::Current => (icons::dot_filled(), palette::PRIMARY_500),
        PhaseStatus::Planned => (icons::dot_hollow(), palette::GRAY_400),
    };
    icons::sized(glyph, sizing::ICON_MD).color(color).into()
}

fn subheading<'a>(label: String) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::TITLE_MD)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        })
        .into()
}
