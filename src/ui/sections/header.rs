// SPDX-License-Identifier: MPL-2.0
//! Top bar with organization identity, section navigation, and theme toggle.
//!
//! At narrow widths the nav links collapse behind a menu toggle; the open
//! menu renders as a full-width link list under the bar.

use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, responsive, tooltip, Column, Container, Row, Space, Svg, Text};
use iced::{Element, Font, Length, Size};

use super::Message;
use crate::content::{self, PageSection};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{icons, styles};

/// Render the header bar.
pub fn view<'a>(i18n: &'a I18n, is_dark: bool, menu_open: bool) -> Element<'a, Message> {
    let bar = Container::new(responsive(move |size: Size| {
        build_bar(i18n, is_dark, size.width < sizing::NAV_COMPACT_BREAKPOINT)
    }))
    .width(Length::Fill)
    .height(Length::Fixed(sizing::HEADER_HEIGHT));

    let mut content = Column::new().push(bar);

    // The menu only ever opens from the compact bar's toggle; a NavigateTo
    // press closes it again.
    if menu_open {
        content = content.push(build_menu(i18n));
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn build_bar<'a>(i18n: &'a I18n, is_dark: bool, compact: bool) -> Element<'a, Message> {
    let mark: Element<'a, Message> = match content::logo_handle() {
        Some(handle) => Svg::new(handle)
            .width(Length::Fixed(sizing::ICON_LG))
            .height(Length::Fixed(sizing::ICON_LG))
            .into(),
        None => icons::sized(icons::church(), sizing::ICON_LG).into(),
    };

    let identity = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(mark)
        .push(
            Column::new()
                .push(
                    Text::new(i18n.tr("app-name"))
                        .size(typography::TITLE_SM)
                        .font(Font {
                            weight: Weight::Bold,
                            ..Font::default()
                        }),
                )
                .push(
                    Text::new(i18n.tr("app-tagline"))
                        .size(typography::CAPTION)
                        .color(palette::PRIMARY_600),
                ),
        );

    // The toggle shows the theme it switches to, not the current one
    let theme_icon = if is_dark { icons::sun() } else { icons::moon() };
    let theme_button = styles::tooltip::styled(
        button(icons::sized(theme_icon, sizing::ICON_SM))
            .style(styles::button::nav_link)
            .padding(spacing::XS)
            .on_press(Message::ThemeToggled),
        i18n.tr("theme-toggle"),
        tooltip::Position::Bottom,
    );

    let mut bar = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(identity)
        .push(Space::new().width(Length::Fill));

    if compact {
        let menu_button = button(icons::sized(icons::menu(), sizing::ICON_MD))
            .style(styles::button::nav_link)
            .padding(spacing::XS)
            .on_press(Message::MenuToggled);
        bar = bar.push(theme_button).push(menu_button);
    } else {
        let mut nav = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
        for &section in PageSection::ALL {
            nav = nav.push(nav_button(i18n, section));
        }
        bar = bar.push(nav).push(theme_button);
    }

    bar.into()
}

fn build_menu<'a>(i18n: &I18n) -> Element<'a, Message> {
    let mut menu = Column::new()
        .spacing(spacing::XXS)
        .padding([spacing::XS, spacing::LG])
        .width(Length::Fill);

    for &section in PageSection::ALL {
        menu = menu.push(nav_button(i18n, section).width(Length::Fill));
    }

    menu.into()
}

fn nav_button<'a>(i18n: &I18n, section: PageSection) -> iced::widget::Button<'a, Message> {
    button(Text::new(i18n.tr(section.label_key())).size(typography::BODY))
        .style(styles::button::nav_link)
        .padding([spacing::XS, spacing::SM])
        .on_press(Message::NavigateTo(section))
}
