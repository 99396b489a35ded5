// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gallery**: carousel rotation and lightbox zoom bounds
//! - **Donation**: currency, checkout branding, quick amounts
//! - **Campaign**: fundraising figures shown on the page

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Period between automatic carousel advances.
pub const AUTO_ADVANCE_INTERVAL_MS: u64 = 4000;

/// Zoom level when an image first opens in the lightbox (1.0 = fit).
pub const DEFAULT_ZOOM_LEVEL: f32 = 1.0;

/// Minimum allowed lightbox zoom level.
pub const MIN_ZOOM_LEVEL: f32 = 1.0;

/// Maximum allowed lightbox zoom level.
pub const MAX_ZOOM_LEVEL: f32 = 3.0;

/// Zoom change applied per wheel event.
pub const WHEEL_ZOOM_STEP: f32 = 0.1;

/// Zoom change applied per zoom in/out button press.
pub const BUTTON_ZOOM_STEP: f32 = 0.2;

// ==========================================================================
// Donation Defaults
// ==========================================================================

/// Currency every donation is charged in.
pub const DONATION_CURRENCY: &str = "NGN";

/// Payment channels offered on the hosted checkout.
pub const PAYMENT_OPTIONS: &str = "card,ussd,banktransfer";

/// Checkout page title.
pub const CHECKOUT_TITLE: &str = "LP91 Headquarters Building Fund";

/// Checkout page description.
pub const CHECKOUT_DESCRIPTION: &str = "Donation toward the Provincial Headquarters building";

/// Logo shown on the hosted checkout page.
pub const CHECKOUT_LOGO_URL: &str = "https://provincialheadquarters.org/logo.png";

/// Delay between a valid donation submit and the checkout invocation.
/// A superseding action within this window cancels the invocation.
pub const PAYMENT_DEBOUNCE_MS: u64 = 400;

/// Preset donation amounts offered next to the form (naira).
pub const QUICK_AMOUNTS_NAIRA: &[u64] = &[5_000, 10_000, 50_000, 100_000, 200_000, 250_000];

// ==========================================================================
// Campaign Defaults
// ==========================================================================

/// Fundraising target (naira).
pub const FUNDRAISING_GOAL_NAIRA: u64 = 200_000_000;

/// Funds raised so far (naira). Updated by hand between releases;
/// overridable in the config file.
pub const FUNDS_RAISED_NAIRA: u64 = 500_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Gallery validation
    assert!(AUTO_ADVANCE_INTERVAL_MS > 0);
    assert!(MIN_ZOOM_LEVEL > 0.0);
    assert!(MAX_ZOOM_LEVEL > MIN_ZOOM_LEVEL);
    assert!(DEFAULT_ZOOM_LEVEL >= MIN_ZOOM_LEVEL);
    assert!(DEFAULT_ZOOM_LEVEL <= MAX_ZOOM_LEVEL);
    assert!(WHEEL_ZOOM_STEP > 0.0);
    assert!(BUTTON_ZOOM_STEP > WHEEL_ZOOM_STEP);
    assert!(BUTTON_ZOOM_STEP < MAX_ZOOM_LEVEL - MIN_ZOOM_LEVEL);

    // Donation validation
    assert!(PAYMENT_DEBOUNCE_MS > 0);
    assert!(PAYMENT_DEBOUNCE_MS < AUTO_ADVANCE_INTERVAL_MS);
    assert!(!QUICK_AMOUNTS_NAIRA.is_empty());

    // Quick amounts must be strictly ascending and below the goal
    let mut i = 0;
    while i < QUICK_AMOUNTS_NAIRA.len() {
        assert!(QUICK_AMOUNTS_NAIRA[i] > 0);
        assert!(QUICK_AMOUNTS_NAIRA[i] < FUNDRAISING_GOAL_NAIRA);
        if i > 0 {
            assert!(QUICK_AMOUNTS_NAIRA[i] > QUICK_AMOUNTS_NAIRA[i - 1]);
        }
        i += 1;
    }

    // Campaign validation
    assert!(FUNDRAISING_GOAL_NAIRA > 0);
    assert!(FUNDS_RAISED_NAIRA <= FUNDRAISING_GOAL_NAIRA);
};
