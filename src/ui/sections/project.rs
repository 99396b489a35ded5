// SPDX-License-Identifier: MPL-2.0
//! Project overview: mission cards and the fundraising tracker.

use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{progress_bar, Column, Container, Row, Space, Text};
use iced::{Element, Font, Length};

use super::Message;
use crate::config::CampaignConfig;
use crate::content::{MissionCard, MISSION_CARDS, MISSION_HIGHLIGHT, MISSION_SCRIPTURE};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::{format, styles};

/// Render the project overview section.
pub fn view<'a>(i18n: &I18n, campaign: &CampaignConfig) -> Element<'a, Message> {
    let mut cards = Row::new().spacing(spacing::LG);
    for card in MISSION_CARDS {
        cards = cards.push(mission_card(i18n, card));
    }

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .padding([spacing::XL, spacing::LG])
        .align_x(Horizontal::Center)
        .push(super::section_header(
            i18n,
            "mission-title",
            &MISSION_SCRIPTURE,
        ))
        .push(cards)
        .push(fundraising_tracker(i18n, campaign))
        .push(super::scripture_highlight(i18n, &MISSION_HIGHLIGHT))
        .into()
}

fn mission_card<'a>(i18n: &I18n, card: &MissionCard) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(i18n.tr(card.title_key))
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                }),
        )
        .push(Text::new(i18n.tr(card.body_key)).size(typography::BODY));

    Container::new(content)
        .width(Length::FillPortion(1))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

/// Progress bar with the raised, goal, and remaining figures underneath.
fn fundraising_tracker<'a>(i18n: &I18n, campaign: &CampaignConfig) -> Element<'a, Message> {
    let goal = campaign.goal();
    let raised = campaign.raised();
    let remaining = goal.saturating_sub(raised);

    let title_row = Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new(i18n.tr("progress-title"))
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                }),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(format::percent(campaign.progress()))
                .size(typography::TITLE_SM)
                .color(palette::PRIMARY_600),
        );

    let bar = progress_bar(0.0..=1.0, campaign.progress()).style(styles::progress::fundraising);

    let figures = Row::new()
        .push(figure(i18n.tr("progress-raised"), format::naira(raised)))
        .push(figure(i18n.tr("progress-goal"), format::naira(goal)))
        .push(figure(i18n.tr("progress-remaining"), format::naira(remaining)));

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title_row)
        .push(bar)
        .push(figures);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn figure<'a>(label: String, value: String) -> Element<'a, Message> {
    Column::new()
        .width(Length::FillPortion(1))
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(value).size(typography::BODY_LG).font(Font {
            weight: Weight::Bold,
            ..Font::default()
        }))
        .push(Text::new(label).size(typography::BODY_SM))
        .into()
}
