// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple sections.
//!
//! # Components
//!
//! - [`placeholder`] - Labeled stand-in tile for image assets that are not
//!   shipped in the binary

pub mod placeholder;
