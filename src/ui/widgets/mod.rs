// SPDX-License-Identifier: MPL-2.0
pub mod scroll_gate;

pub use scroll_gate::scroll_gate;
