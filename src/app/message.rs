// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::services::email::EmailError;
use crate::ui::gallery::lightbox;
use crate::ui::notifications;
use crate::ui::sections;
use crate::ui::support;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Page chrome and section interactions (navigation, theme, carousel).
    Sections(sections::Message),
    Support(support::Message),
    Lightbox(lightbox::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for notification expiry and the donation debounce.
    Tick(Instant),
    /// Outcome of the fire-and-forget donation receipt email.
    ReceiptSent(Result<(), EmailError>),
}

/// Launch-time options parsed from the command line in `main.rs`.
#[derive(Debug, Default)]
pub struct Flags {
    /// Override for the UI language, e.g. `en-US`.
    pub lang: Option<String>,
    /// Directory with Fluent files that replaces the embedded bundle.
    pub i18n_dir: Option<String>,
    /// Directory that replaces the platform config location.
    pub config_dir: Option<String>,
}
