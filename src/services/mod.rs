// SPDX-License-Identifier: MPL-2.0
//! Clients for the two hosted collaborators the campaign app talks to.
//!
//! Both services are consumed through narrow request/response contracts:
//! - [`payment`]: hosted checkout creation and verification by transaction
//!   reference against the payment gateway's REST surface.
//! - [`email`]: template-based enquiry delivery through the email service.
//!
//! The request builders and response interpretation are pure and unit-tested;
//! network calls are free `async fn`s driven from `Task::perform` so the UI
//! loop never blocks. No call here retries: every retry is a user-initiated
//! resubmission.

pub mod email;
pub mod payment;

/// User agent sent with every outbound service request.
pub const APP_USER_AGENT: &str = concat!("Cornerstone/", env!("CARGO_PKG_VERSION"));
