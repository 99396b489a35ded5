// SPDX-License-Identifier: MPL-2.0
//! Footer: identity, quick links, contact details, support blurbs.

use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Font, Length};

use super::Message;
use crate::content::{PageSection, HERO_SCRIPTURE, OFFICE_ADDRESS, OFFICE_EMAIL, OFFICE_PHONE};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{icons, styles};

/// Render the footer.
pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let columns = Row::new()
        .spacing(spacing::XL)
        .push(identity(i18n))
        .push(quick_links(i18n))
        .push(contact_details(i18n))
        .push(support_blurbs(i18n));

    let verse = format!(
        "{} {}",
        i18n.tr(HERO_SCRIPTURE.quote_key),
        super::scripture_reference(i18n, &HERO_SCRIPTURE)
    );

    let bottom = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("footer-copyright")).size(typography::CAPTION))
        .push(
            Text::new(verse)
                .size(typography::CAPTION)
                .color(palette::PRIMARY_400),
        );

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .push(columns)
        .push(bottom);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XL, spacing::LG])
        .style(styles::container::footer)
        .into()
}

fn identity<'a>(i18n: &I18n) -> Element<'a, Message> {
    let name_row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::church(), sizing::ICON_MD))
        .push(
            Text::new(i18n.tr("app-name"))
                .size(typography::BODY_LG)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                }),
        );

    Column::new()
        .width(Length::FillPortion(2))
        .spacing(spacing::XS)
        .push(name_row)
        .push(Text::new(i18n.tr("app-tagline")).size(typography::BODY_SM))
        .push(
            Text::new(i18n.tr("footer-description"))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        )
        .into()
}

fn quick_links<'a>(i18n: &I18n) -> Element<'a, Message> {
    // Footer wording differs from the header for some targets
    let links: [(&str, PageSection); 5] = [
        ("nav-home", PageSection::Home),
        ("footer-link-project", PageSection::Project),
        ("footer-link-building", PageSection::Building),
        ("footer-link-support", PageSection::Support),
        ("nav-contact", PageSection::Contact),
    ];

    let mut column = Column::new()
        .width(Length::FillPortion(1))
        .spacing(spacing::XS)
        .push(column_title(i18n.tr("footer-links-title")));

    for (key, section) in links {
        column = column.push(
            button(Text::new(i18n.tr(key)).size(typography::BODY_SM))
                .style(styles::button::footer_link)
                .padding(0.0)
                .on_press(Message::NavigateTo(section)),
        );
    }

    column.into()
}

fn contact_details<'a>(i18n: &I18n) -> Element<'a, Message> {
    Column::new()
        .width(Length::FillPortion(1))
        .spacing(spacing::XS)
        .push(column_title(i18n.tr("footer-contact-title")))
        .push(detail_row(icons::telephone(), OFFICE_PHONE))
        .push(detail_row(icons::envelope(), OFFICE_EMAIL))
        .push(detail_row(icons::church(), OFFICE_ADDRESS))
        .into()
}

fn support_blurbs<'a>(i18n: &I18n) -> Element<'a, Message> {
    Column::new()
        .width(Length::FillPortion(1))
        .spacing(spacing::XS)
        .push(column_title(i18n.tr("footer-support-title")))
        .push(Text::new(i18n.tr("footer-support-donate")).size(typography::BODY_SM))
        .push(Text::new(i18n.tr("footer-support-monthly")).size(typography::BODY_SM))
        .push(Text::new(i18n.tr("footer-support-contact")).size(typography::BODY_SM))
        .into()
}

fn column_title<'a>(label: String) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::BODY_LG)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        })
        .into()
}

fn detail_row<'a>(glyph: Text<'static>, value: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(glyph, sizing::ICON_SM))
        .push(Text::new(value).size(typography::BODY_SM))
        .into()
}
