// SPDX-License-Identifier: MPL-2.0
//! Gallery widgets: the auto-advancing carousel and the full-screen lightbox.

pub mod carousel;
pub mod lightbox;
