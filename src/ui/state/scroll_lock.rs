// SPDX-License-Identifier: MPL-2.0
//! Page scroll lock, held while a modal overlay is on screen.

/// Tracks whether page scrolling is suspended.
///
/// The lightbox acquires the lock when it opens and releases it on every
/// close path, so the page scrollable only ignores input while an overlay
/// actually covers it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollLock {
    locked: bool,
}

impl ScrollLock {
    /// Suspends page scrolling.
    pub fn acquire(&mut self) {
        self.locked = true;
    }

    /// Resumes page scrolling.
    pub fn release(&mut self) {
        self.locked = false;
    }

    /// Returns whether page scrolling is currently suspended.
    #[must_use]
    pub fn is_locked(self) -> bool {
        self.locked
    }
}
