// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Page
//!
//! - [`sections`] - Static page sections (header, hero, project, building, footer)
//! - [`support`] - Donation and enquiry form with its submission state machine
//! - [`gallery`] - Image carousel and fullscreen lightbox
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state management (zoom, drag, scroll lock)
//! - [`components`] - Reusable UI components (image placeholder)
//! - [`widgets`] - Custom Iced widgets (scroll gate)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`format`] - Naira, percentage, and zoom display formatting
//! - [`icons`] - Glyph icons (visual primitives)
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod design_tokens;
pub mod format;
pub mod gallery;
pub mod icons;
pub mod notifications;
pub mod sections;
pub mod state;
pub mod styles;
pub mod support;
pub mod theming;
pub mod widgets;
