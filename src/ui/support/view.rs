// SPDX-License-Identifier: MPL-2.0
//! Support section view: giving options, quick amounts, the two-tab form,
//! and committee contacts.

use iced::alignment::Vertical;
use iced::widget::{button, checkbox, container, text, text_input, Column, Row};
use iced::{Element, Length};

use crate::config::defaults::QUICK_AMOUNTS_NAIRA;
use crate::content::{COMMITTEE_CONTACTS, GIVING_OPTIONS, SUPPORT_HIGHLIGHT, SUPPORT_SCRIPTURE};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{format, icons, sections, styles};

use super::{Message, State, Tab};

impl State {
    /// Full support section: giving info, quick amounts, the form, committee
    /// contacts, closing scripture.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let info = Column::new()
            .spacing(spacing::LG)
            .width(Length::Fill)
            .push(giving_card(i18n))
            .push(quick_amounts(self, i18n));

        let content = Row::new()
            .spacing(spacing::LG)
            .push(info)
            .push(form_card(self, i18n));

        Column::new()
            .spacing(spacing::XL)
            .width(Length::Fill)
            .push(sections::section_header(i18n, "support-title", &SUPPORT_SCRIPTURE))
            .push(content)
            .push(contacts(i18n))
            .push(sections::scripture_highlight(i18n, &SUPPORT_HIGHLIGHT))
            .into()
    }
}

/// The "Ways to Give" card listing the giving options.
fn giving_card<'a>(i18n: &I18n) -> Element<'a, Message> {
    let mut options = Column::new().spacing(spacing::MD);
    for option in GIVING_OPTIONS {
        options = options.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(text(i18n.tr(option.title_key)).size(typography::TITLE_SM))
                .push(text(i18n.tr(option.description_key)).size(typography::BODY)),
        );
    }

    container(
        Column::new()
            .spacing(spacing::MD)
            .push(text(i18n.tr("giving-title")).size(typography::TITLE_MD))
            .push(options),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

/// Grid of preset amounts plus the custom option.
fn quick_amounts<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::XS);

    for presets in QUICK_AMOUNTS_NAIRA.chunks(3) {
        let mut row = Row::new().spacing(spacing::XS);
        for &preset in presets {
            let style = if state.is_preset_selected(preset) {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row = row.push(
                button(text(format::naira(preset)).size(typography::BODY))
                    .on_press(Message::QuickAmountPressed(preset))
                    .padding([spacing::XS, spacing::SM])
                    .width(Length::Fill)
                    .style(style),
            );
        }
        grid = grid.push(row);
    }

    let custom_style = if state.is_custom_selected() {
        styles::button::selected
    } else {
        styles::button::unselected
    };
    grid = grid.push(
        button(text(i18n.tr("quick-amount-custom")).size(typography::BODY))
            .on_press(Message::CustomAmountPressed)
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill)
            .style(custom_style),
    );

    container(
        Column::new()
            .spacing(spacing::MD)
            .push(text(i18n.tr("quick-amounts-title")).size(typography::TITLE_MD))
            .push(grid),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

/// The form card: tab switcher plus the active form, or the payment-pending
/// panel while a checkout is underway.
fn form_card<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let body: Element<'a, Message> = if state.is_payment_pending() {
        pending_panel(state, i18n)
    } else {
        let donation_style = if state.active_tab == Tab::Donation {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        let enquiry_style = if state.active_tab == Tab::Enquiry {
            styles::button::selected
        } else {
            styles::button::unselected
        };

        let tabs = Row::new()
            .spacing(spacing::XS)
            .push(
                button(text(i18n.tr("tab-donation")).size(typography::BODY))
                    .on_press(Message::TabSelected(Tab::Donation))
                    .padding(spacing::SM)
                    .width(Length::Fill)
                    .style(donation_style),
            )
            .push(
                button(text(i18n.tr("tab-enquiry")).size(typography::BODY))
                    .on_press(Message::TabSelected(Tab::Enquiry))
                    .padding(spacing::SM)
                    .width(Length::Fill)
                    .style(enquiry_style),
            );

        let form = match state.active_tab {
            Tab::Donation => donation_form(state, i18n),
            Tab::Enquiry => enquiry_form(state, i18n),
        };

        Column::new()
            .spacing(spacing::LG)
            .push(tabs)
            .push(form)
            .into()
    };

    container(body)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::FORM_MAX_WIDTH))
        .style(styles::container::panel)
        .into()
}

fn donation_form<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .push(labeled_input(
            i18n.tr("field-name"),
            i18n.tr("field-name-placeholder"),
            &state.name,
            Message::NameChanged,
        ))
        .push(labeled_input(
            i18n.tr("field-email"),
            i18n.tr("field-email-placeholder"),
            &state.email,
            Message::EmailChanged,
        ))
        .push(labeled_input(
            i18n.tr("field-phone"),
            i18n.tr("field-phone-placeholder"),
            &state.phone,
            Message::PhoneChanged,
        ))
        .push(labeled_input(
            i18n.tr("field-amount"),
            i18n.tr("field-amount-placeholder"),
            &state.amount,
            Message::AmountChanged,
        ))
        .push(labeled_input(
            i18n.tr("field-message-optional"),
            i18n.tr("field-message-placeholder"),
            &state.message,
            Message::MessageChanged,
        ))
        .push(
            checkbox(state.anonymous)
                .label(i18n.tr("anonymous-label"))
                .on_toggle(Message::AnonymousToggled)
                .text_size(typography::BODY),
        )
        .push(submit_button(state, i18n.tr("submit-donation"), i18n))
        .into()
}

fn enquiry_form<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .push(labeled_input(
            i18n.tr("field-name"),
            i18n.tr("field-name-placeholder"),
            &state.name,
            Message::NameChanged,
        ))
        .push(labeled_input(
            i18n.tr("field-email"),
            i18n.tr("field-email-placeholder"),
            &state.email,
            Message::EmailChanged,
        ))
        .push(labeled_input(
            i18n.tr("field-phone-required"),
            i18n.tr("field-phone-placeholder"),
            &state.phone,
            Message::PhoneChanged,
        ))
        .push(labeled_input(
            i18n.tr("field-enquiry"),
            i18n.tr("field-enquiry-placeholder"),
            &state.message,
            Message::MessageChanged,
        ))
        .push(submit_button(state, i18n.tr("submit-enquiry"), i18n))
        .into()
}

/// A label over a single-line input.
fn labeled_input<'a>(
    label: String,
    placeholder: String,
    value: &'a str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::BODY_SM))
        .push(
            text_input(&placeholder, value)
                .on_input(on_input)
                .padding(spacing::XS)
                .size(typography::BODY_LG)
                .width(Length::Fill),
        )
        .into()
}

/// Submit control; disabled and relabeled while a submission is in flight.
fn submit_button<'a>(state: &State, idle_label: String, i18n: &I18n) -> Element<'a, Message> {
    let label = if state.is_busy() {
        i18n.tr("submit-sending")
    } else {
        idle_label
    };

    let submit = button(text(label).size(typography::BODY_LG))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::button::primary);
    let submit = if state.is_busy() {
        submit
    } else {
        submit.on_press(Message::SubmitPressed)
    };

    submit.into()
}

/// Shown in place of the form while the hosted checkout is open.
fn pending_panel<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    let confirm_label = if state.is_verifying() {
        i18n.tr("submit-sending")
    } else {
        i18n.tr("payment-confirm-button")
    };

    let confirm = button(text(confirm_label).size(typography::BODY_LG))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::button::primary);
    let confirm = if state.is_verifying() {
        confirm
    } else {
        confirm.on_press(Message::PaymentConfirmPressed)
    };

    let cancel = button(text(i18n.tr("payment-cancel-button")).size(typography::BODY))
        .on_press(Message::PaymentCancelPressed)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::button::secondary);

    Column::new()
        .spacing(spacing::MD)
        .push(text(i18n.tr("payment-pending-title")).size(typography::TITLE_SM))
        .push(text(i18n.tr("payment-pending-body")).size(typography::BODY))
        .push(confirm)
        .push(cancel)
        .into()
}

/// Committee contact cards with direct phone lines.
fn contacts<'a>(i18n: &I18n) -> Element<'a, Message> {
    let mut grid = Row::new().spacing(spacing::LG);
    for contact in COMMITTEE_CONTACTS {
        grid = grid.push(
            container(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(text(i18n.tr(contact.role_key)).size(typography::TITLE_SM))
                    .push(text(contact.name).size(typography::BODY))
                    .push(
                        Row::new()
                            .spacing(spacing::XXS)
                            .align_y(Vertical::Center)
                            .push(icons::sized(icons::telephone(), sizing::ICON_SM))
                            .push(text(contact.phone).size(typography::BODY)),
                    ),
            )
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::card),
        );
    }

    Column::new()
        .spacing(spacing::MD)
        .push(text(i18n.tr("committee-title")).size(typography::TITLE_MD))
        .push(grid)
        .into()
}
