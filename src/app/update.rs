// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers that `App::update`
//! dispatches to. Component events that require side effects (payment calls,
//! email delivery, config persistence, opening the browser) are carried out
//! here so the components stay free of I/O.

use super::{App, Message};
use crate::config;
use crate::services::email::{self, EmailError};
use crate::services::payment::{self, CheckoutConfig};
use crate::ui::gallery::{carousel, lightbox};
use crate::ui::notifications::Notification;
use crate::ui::sections;
use crate::ui::support;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

/// Handles interactions coming from the page chrome and content sections.
pub fn handle_sections_message(app: &mut App, message: sections::Message) -> Task<Message> {
    match message {
        sections::Message::NavigateTo(section) => {
            app.menu_open = false;
            operation::snap_to(
                Id::new(super::view::PAGE_SCROLL_ID),
                RelativeOffset {
                    x: 0.0,
                    y: section.scroll_fraction(),
                },
            )
        }
        sections::Message::MenuToggled => {
            app.menu_open = !app.menu_open;
            Task::none()
        }
        sections::Message::ThemeToggled => {
            app.theme_mode = app.theme_mode.toggled();
            app.is_dark = app.theme_mode.is_dark();
            app.config.general.theme_mode = app.theme_mode;
            if let Err(error) = config::save(&app.config) {
                eprintln!("Failed to save config: {error}");
                app.notifications
                    .push(Notification::warning("notification-config-save-error"));
            }
            Task::none()
        }
        sections::Message::Carousel(message) => {
            app.carousel.update(message);
            Task::none()
        }
        sections::Message::PlansToggled => {
            app.plans_expanded = !app.plans_expanded;
            Task::none()
        }
        sections::Message::PlanPressed(plan_index) => {
            app.lightbox
                .open(crate::content::plan_lightbox_index(plan_index));
            app.scroll_lock.acquire();
            Task::none()
        }
    }
}

/// Handles support form messages and carries out the effects it requests.
pub fn handle_support_message(app: &mut App, message: support::Message) -> Task<Message> {
    let event = app.support.update(message);
    apply_support_event(app, event)
}

/// Carries out a single effect requested by the support form.
fn apply_support_event(app: &mut App, event: support::Event) -> Task<Message> {
    match event {
        support::Event::None => Task::none(),
        support::Event::Notify(notification) => {
            app.notifications.clear_support_notices();
            app.notifications.push(notification);
            Task::none()
        }
        support::Event::CheckoutRequested {
            seq,
            amount,
            customer,
        } => {
            let checkout = CheckoutConfig::for_donation(
                &app.config.services.payment_public_key,
                payment::generate_tx_ref(),
                amount,
                customer,
            );
            Task::perform(
                async move { payment::create_hosted_checkout(&checkout).await },
                move |result| Message::Support(support::Message::CheckoutCreated { seq, result }),
            )
        }
        support::Event::CheckoutReady { link } => {
            if let Err(error) = open::that_detached(&link) {
                eprintln!("Failed to open checkout link: {error}");
            }
            Task::none()
        }
        support::Event::VerificationRequested { seq, tx_ref } => {
            let public_key = app.config.services.payment_public_key.clone();
            Task::perform(
                async move { payment::verify_by_reference(&public_key, &tx_ref).await },
                move |result| Message::Support(support::Message::PaymentVerified { seq, result }),
            )
        }
        support::Event::DonationFailed { error } => {
            eprintln!("Donation failed: {error}");
            app.notifications.clear_support_notices();
            app.notifications.push(
                Notification::error("notification-support-donation-failed")
                    .with_arg("reason", app.i18n.tr(error.i18n_key())),
            );
            Task::none()
        }
        support::Event::DonationSucceeded {
            notification,
            receipt,
        } => {
            app.notifications.clear_support_notices();
            app.notifications.push(notification);

            // The thank-you receipt is best effort; the donation already went
            // through, so a missing email config just skips it.
            let credentials = app.config.services.email_credentials();
            if credentials.is_complete() {
                Task::perform(
                    async move { email::send_template(&credentials, &receipt).await },
                    Message::ReceiptSent,
                )
            } else {
                Task::none()
            }
        }
        support::Event::EnquiryRequested { seq, params } => {
            let credentials = app.config.services.email_credentials();
            Task::perform(
                async move { email::send_template(&credentials, &params).await },
                move |result| Message::Support(support::Message::EnquirySent { seq, result }),
            )
        }
        support::Event::EnquiryFailed { error } => {
            eprintln!("Enquiry failed: {error}");
            app.notifications.clear_support_notices();
            app.notifications
                .push(Notification::error("notification-support-enquiry-failed"));
            Task::none()
        }
    }
}

/// Handles lightbox messages and releases the page scroll when it closes.
pub fn handle_lightbox_message(app: &mut App, message: lightbox::Message) -> Task<Message> {
    match app.lightbox.update(message) {
        lightbox::Event::None => {}
        lightbox::Event::Closed => app.scroll_lock.release(),
    }
    Task::none()
}

/// Advances time-based state: notification expiry and the donation debounce.
pub fn handle_tick(app: &mut App, _now: Instant) -> Task<Message> {
    app.notifications.tick();

    if app.support.has_pending_debounce() {
        let event = app.support.update(support::Message::DebounceTick);
        return apply_support_event(app, event);
    }

    Task::none()
}

/// Records the outcome of the fire-and-forget donation receipt.
pub fn handle_receipt_sent(result: Result<(), EmailError>) -> Task<Message> {
    if let Err(error) = result {
        // The donor already saw the success toast; the receipt failure is
        // only worth a log line.
        eprintln!("Donation receipt email failed: {error}");
    }
    Task::none()
}
