// SPDX-License-Identifier: MPL-2.0
//! Hero banner: campaign headline, calls to action, and fundraising stats.

use iced::alignment::Horizontal;
use iced::font::Weight;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Font, Length};

use super::Message;
use crate::config::CampaignConfig;
use crate::content::{PageSection, HERO_SCRIPTURE};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{format, styles};

/// Render the hero banner.
pub fn view<'a>(i18n: &I18n, campaign: &CampaignConfig) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("hero-title"))
        .size(typography::TITLE_XL)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let verse = Container::new(
        Text::new(i18n.tr(HERO_SCRIPTURE.quote_key))
            .size(typography::TITLE_SM)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center);

    let reference =
        Text::new(super::scripture_reference(i18n, &HERO_SCRIPTURE)).size(typography::BODY_SM);

    let description = Container::new(
        Text::new(i18n.tr("hero-description"))
            .size(typography::BODY_LG)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding([0.0, spacing::XXL])
    .align_x(Horizontal::Center);

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(i18n.tr("hero-support-button")).size(typography::BODY_LG))
                .style(styles::button::primary)
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::NavigateTo(PageSection::Support)),
        )
        .push(
            button(Text::new(i18n.tr("hero-learn-button")).size(typography::BODY_LG))
                .style(styles::button::secondary)
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::NavigateTo(PageSection::Project)),
        );

    let stats = Row::new()
        .spacing(spacing::XXL)
        .push(stat(
            i18n.tr("hero-stat-goal"),
            format::naira_compact(campaign.goal()),
        ))
        .push(stat(
            i18n.tr("hero-stat-raised"),
            format::naira_compact(campaign.raised()),
        ))
        .push(stat(
            i18n.tr("hero-stat-progress"),
            format::percent(campaign.progress()),
        ));

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(verse)
        .push(reference)
        .push(description)
        .push(actions)
        .push(stats);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::XL])
        .style(styles::container::hero)
        .into()
}

/// A single stat with the figure above its label.
fn stat<'a>(label: String, value: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(value).size(typography::TITLE_MD).font(Font {
            weight: Weight::Bold,
            ..Font::default()
        }))
        .push(Text::new(label).size(typography::BODY_SM))
        .into()
}
