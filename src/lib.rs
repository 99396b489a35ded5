// SPDX-License-Identifier: MPL-2.0
//! `cornerstone` is a single-page fundraising and information app for a
//! church building project, built with the Iced GUI framework.
//!
//! It presents the campaign sections (mission, building design, support,
//! contact) with a hosted donation checkout, and demonstrates
//! internationalization with Fluent, user preference management, and
//! modular UI design.

#![doc(html_root_url = "https://docs.rs/cornerstone/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod services;
pub mod ui;

#[cfg(test)]
mod tests {
    // This is where common library tests can go
}
