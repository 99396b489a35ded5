// SPDX-License-Identifier: MPL-2.0
//! Display formatting for naira amounts, percentages, and zoom readouts.

/// Formats a count with thousands separators and no currency mark,
/// e.g. `200,000,000`.
#[must_use]
pub fn grouped(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Formats a naira amount with thousands separators, e.g. `₦200,000,000`.
#[must_use]
pub fn naira(amount: u64) -> String {
    format!("₦{}", grouped(amount))
}

/// Formats a naira amount compactly for stat tiles, e.g. `₦200M` or `₦500K`.
#[must_use]
pub fn naira_compact(amount: u64) -> String {
    const MILLION: u64 = 1_000_000;
    const THOUSAND: u64 = 1_000;

    if amount >= MILLION {
        format!("₦{}M", scaled(amount, MILLION))
    } else if amount >= THOUSAND {
        format!("₦{}K", scaled(amount, THOUSAND))
    } else {
        format!("₦{amount}")
    }
}

/// Formats a completion fraction as a percentage, e.g. `34%` or `0.5%`.
#[must_use]
pub fn percent(fraction: f32) -> String {
    let value = fraction * 100.0;
    if value.fract().abs() < f32::EPSILON {
        #[allow(clippy::cast_possible_truncation)]
        let int_value = value as i64;
        format!("{int_value}%")
    } else {
        let formatted = format!("{value:.1}");
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        format!("{trimmed}%")
    }
}

/// Formats a zoom factor as a whole percentage, e.g. `130%`.
#[must_use]
pub fn zoom_percent(zoom: f32) -> String {
    format!("{:.0}%", zoom * 100.0)
}

/// Scales an amount down by `unit`, keeping one decimal when inexact.
fn scaled(amount: u64, unit: u64) -> String {
    let whole = amount / unit;
    let tenth = (amount % unit) * 10 / unit;
    if tenth == 0 {
        whole.to_string()
    } else {
        format!("{whole}.{tenth}")
    }
}
