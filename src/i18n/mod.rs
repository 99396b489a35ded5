// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles locale resolution, translation catalog loading, and string formatting.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Embedded `.ftl` catalogs with an on-disk override directory
//! - Message interpolation for dynamic values (amounts, references)
//! - `MISSING:` markers instead of panics when a key is absent

pub mod fluent;
