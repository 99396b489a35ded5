// SPDX-License-Identifier: MPL-2.0
//! Donation and enquiry form.
//!
//! Two mutually exclusive tabs share one set of fields: the donation tab
//! collects donor details plus an amount and hands off to the hosted payment
//! checkout; the enquiry tab collects a free-text message for the email
//! delivery service. Submission is single-flight: while any attempt is in
//! progress the submit control is disabled and further submits are ignored.
//!
//! A valid donation submit does not invoke the checkout immediately. It sits
//! in a short debounce window first, so an accidental double-activation never
//! creates two payment attempts; a superseding action inside the window
//! cancels the invocation. Every in-flight service call is tagged with a
//! submission sequence number, and a result whose tag no longer matches the
//! current sequence is dropped, which keeps cancelled or superseded attempts
//! from mutating the form afterwards.

mod view;

use std::time::{Duration, Instant};

use crate::config::defaults::{PAYMENT_DEBOUNCE_MS, QUICK_AMOUNTS_NAIRA};
use crate::services::email::{EmailError, TemplateParams};
use crate::services::payment::{
    CheckoutOutcome, CompletionDetails, Customer, HostedCheckout, PaymentError,
};
use crate::ui::format;
use crate::ui::notifications::Notification;

/// Customer name sent to the gateway in place of the donor's for
/// anonymous gifts. The receipt email still greets the donor by name.
const ANONYMOUS_DONOR: &str = "Anonymous Donor";

/// Which of the two forms is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Donation,
    Enquiry,
}

/// Where the current submission stands.
///
/// `Idle` is the only phase that accepts a new submit; every other phase
/// gates duplicate submission.
#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    /// Valid donation submit waiting out the invocation delay. The parsed
    /// snapshot here is what gets charged; field edits made inside the
    /// window do not alter the attempt.
    Debouncing {
        fire_at: Instant,
        amount: f64,
        customer: Customer,
    },
    /// Checkout creation request in flight.
    CreatingCheckout,
    /// Hosted checkout open in the donor's browser; waiting for them to
    /// report completion or give up.
    AwaitingPayment { tx_ref: String },
    /// Verification request in flight.
    Verifying,
    /// Enquiry delivery in flight.
    SendingEnquiry,
}

/// Messages emitted by the form widgets and by finished service calls.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    NameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    AmountChanged(String),
    MessageChanged(String),
    AnonymousToggled(bool),
    QuickAmountPressed(u64),
    CustomAmountPressed,
    SubmitPressed,
    /// Periodic poll while a debounce window is pending.
    DebounceTick,
    PaymentConfirmPressed,
    PaymentCancelPressed,
    CheckoutCreated {
        seq: u64,
        result: Result<HostedCheckout, PaymentError>,
    },
    PaymentVerified {
        seq: u64,
        result: Result<CompletionDetails, PaymentError>,
    },
    EnquirySent {
        seq: u64,
        result: Result<(), EmailError>,
    },
}

/// Effects the parent application must carry out.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Show a toast for a locally-decided outcome.
    Notify(Notification),
    /// Debounce elapsed on a valid donation; create the hosted checkout.
    CheckoutRequested {
        seq: u64,
        amount: f64,
        customer: Customer,
    },
    /// Checkout link ready; open it in the donor's browser.
    CheckoutReady { link: String },
    /// Donor reports the payment done; verify the transaction.
    VerificationRequested { seq: u64, tx_ref: String },
    /// The gateway or transport failed; fields were kept for a retry.
    DonationFailed { error: PaymentError },
    /// Verified successful donation: toast plus a best-effort receipt.
    DonationSucceeded {
        notification: Notification,
        receipt: TemplateParams,
    },
    /// Valid enquiry; deliver the message.
    EnquiryRequested { seq: u64, params: TemplateParams },
    /// Delivery failed; fields were kept for a retry.
    EnquiryFailed { error: EmailError },
}

/// Form state for the support section.
#[derive(Debug, Clone)]
pub struct State {
    active_tab: Tab,
    name: String,
    email: String,
    phone: String,
    amount: String,
    message: String,
    anonymous: bool,
    phase: Phase,
    /// Bumped when a submission starts or is cancelled. Service results
    /// carry the value they were issued under and are dropped on mismatch.
    submission_seq: u64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            active_tab: Tab::default(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            amount: String::new(),
            message: String::new(),
            anonymous: false,
            phase: Phase::Idle,
            submission_seq: 0,
        }
    }
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TabSelected(tab) => self.select_tab(tab),
            Message::NameChanged(value) => {
                self.name = value;
                Event::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Event::None
            }
            Message::PhoneChanged(value) => {
                self.phone = value;
                Event::None
            }
            Message::AmountChanged(value) => {
                self.amount = value;
                Event::None
            }
            Message::MessageChanged(value) => {
                self.message = value;
                Event::None
            }
            Message::AnonymousToggled(value) => {
                self.anonymous = value;
                Event::None
            }
            Message::QuickAmountPressed(amount) => {
                self.amount = amount.to_string();
                Event::None
            }
            Message::CustomAmountPressed => {
                self.amount.clear();
                Event::None
            }
            Message::SubmitPressed => self.submit(),
            Message::DebounceTick => self.poll_debounce(Instant::now()),
            Message::PaymentConfirmPressed => self.confirm_payment(),
            Message::PaymentCancelPressed => self.apply_outcome(CheckoutOutcome::Dismissed),
            Message::CheckoutCreated { seq, result } => self.on_checkout_created(seq, result),
            Message::PaymentVerified { seq, result } => self.on_payment_verified(seq, result),
            Message::EnquirySent { seq, result } => self.on_enquiry_sent(seq, result),
        }
    }

    /// True while any submission work is pending; the submit control is
    /// disabled for the duration.
    pub fn is_busy(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// True while a submit is waiting out its debounce window; the app
    /// keeps ticking [`Message::DebounceTick`] for the duration.
    pub fn has_pending_debounce(&self) -> bool {
        matches!(self.phase, Phase::Debouncing { .. })
    }

    fn is_payment_pending(&self) -> bool {
        matches!(
            self.phase,
            Phase::AwaitingPayment { .. } | Phase::Verifying
        )
    }

    fn is_verifying(&self) -> bool {
        matches!(self.phase, Phase::Verifying)
    }

    fn select_tab(&mut self, tab: Tab) -> Event {
        if tab == self.active_tab {
            return Event::None;
        }
        match self.phase {
            Phase::Idle => {}
            // Switching away supersedes a pending donation submit.
            Phase::Debouncing { .. } => {
                self.phase = Phase::Idle;
                self.submission_seq += 1;
            }
            // A service call is in flight; the form is not editable.
            _ => return Event::None,
        }
        self.active_tab = tab;
        Event::None
    }

    fn submit(&mut self) -> Event {
        if self.is_busy() {
            return Event::None;
        }
        match self.active_tab {
            Tab::Donation => self.submit_donation(),
            Tab::Enquiry => self.submit_enquiry(),
        }
    }

    fn submit_donation(&mut self) -> Event {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Event::Notify(Notification::warning("notification-support-incomplete"));
        }
        let Some(amount) = parse_amount(&self.amount) else {
            return Event::Notify(Notification::warning(
                "notification-support-invalid-amount",
            ));
        };

        let customer = Customer {
            email: self.email.trim().to_string(),
            phone_number: self.phone.trim().to_string(),
            name: self.donor_name(),
        };

        self.submission_seq += 1;
        self.phase = Phase::Debouncing {
            fire_at: Instant::now() + Duration::from_millis(PAYMENT_DEBOUNCE_MS),
            amount,
            customer,
        };
        Event::None
    }

    fn submit_enquiry(&mut self) -> Event {
        let required = [&self.name, &self.email, &self.phone, &self.message];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Event::Notify(Notification::warning("notification-support-incomplete"));
        }

        self.submission_seq += 1;
        self.phase = Phase::SendingEnquiry;
        Event::EnquiryRequested {
            seq: self.submission_seq,
            params: self.template_params(),
        }
    }

    /// Fires the delayed checkout invocation once its window has elapsed.
    /// A no-op in every other phase.
    fn poll_debounce(&mut self, now: Instant) -> Event {
        let Phase::Debouncing {
            fire_at,
            amount,
            customer,
        } = &self.phase
        else {
            return Event::None;
        };
        if now < *fire_at {
            return Event::None;
        }

        let (amount, customer) = (*amount, customer.clone());
        self.phase = Phase::CreatingCheckout;
        Event::CheckoutRequested {
            seq: self.submission_seq,
            amount,
            customer,
        }
    }

    fn confirm_payment(&mut self) -> Event {
        let Phase::AwaitingPayment { tx_ref } = &self.phase else {
            return Event::None;
        };
        let tx_ref = tx_ref.clone();
        self.phase = Phase::Verifying;
        Event::VerificationRequested {
            seq: self.submission_seq,
            tx_ref,
        }
    }

    fn on_checkout_created(
        &mut self,
        seq: u64,
        result: Result<HostedCheckout, PaymentError>,
    ) -> Event {
        if seq != self.submission_seq || !matches!(self.phase, Phase::CreatingCheckout) {
            return Event::None;
        }
        match result {
            Ok(checkout) => {
                self.phase = Phase::AwaitingPayment {
                    tx_ref: checkout.tx_ref,
                };
                Event::CheckoutReady {
                    link: checkout.link,
                }
            }
            Err(error) => {
                self.phase = Phase::Idle;
                Event::DonationFailed { error }
            }
        }
    }

    fn on_payment_verified(
        &mut self,
        seq: u64,
        result: Result<CompletionDetails, PaymentError>,
    ) -> Event {
        if seq != self.submission_seq || !matches!(self.phase, Phase::Verifying) {
            return Event::None;
        }
        match result {
            Ok(details) => self.apply_outcome(CheckoutOutcome::Completed(details)),
            Err(error) => {
                self.phase = Phase::Idle;
                Event::DonationFailed { error }
            }
        }
    }

    fn on_enquiry_sent(&mut self, seq: u64, result: Result<(), EmailError>) -> Event {
        if seq != self.submission_seq || !matches!(self.phase, Phase::SendingEnquiry) {
            return Event::None;
        }
        self.phase = Phase::Idle;
        match result {
            Ok(()) => {
                self.clear_fields();
                Event::Notify(Notification::success(
                    "notification-support-enquiry-success",
                ))
            }
            Err(error) => Event::EnquiryFailed { error },
        }
    }

    /// Applies a terminal checkout outcome reported from the donor's side.
    ///
    /// Success clears the form; anything else keeps it intact for a manual
    /// retry. Either way the sequence advances so a straggling verification
    /// result cannot land afterwards.
    fn apply_outcome(&mut self, outcome: CheckoutOutcome) -> Event {
        if !self.is_payment_pending() {
            return Event::None;
        }
        self.submission_seq += 1;
        self.phase = Phase::Idle;

        match outcome {
            CheckoutOutcome::Completed(details) if details.is_successful() => {
                let receipt = self.template_params();
                let notification =
                    Notification::success("notification-support-donation-success")
                        .with_arg("amount", display_amount(&self.amount));
                self.clear_fields();
                Event::DonationSucceeded {
                    notification,
                    receipt,
                }
            }
            CheckoutOutcome::Completed(details) => Event::DonationFailed {
                error: PaymentError::Rejected(details.status),
            },
            CheckoutOutcome::Dismissed => Event::Notify(Notification::info(
                "notification-support-donation-dismissed",
            )),
        }
    }

    /// Name sent to the payment gateway; masked for anonymous donations.
    fn donor_name(&self) -> String {
        if self.anonymous {
            ANONYMOUS_DONOR.to_string()
        } else {
            self.name.trim().to_string()
        }
    }

    /// Template parameters filled from the current fields.
    fn template_params(&self) -> TemplateParams {
        TemplateParams {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            amount: self.amount.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.amount.clear();
        self.message.clear();
        self.anonymous = false;
    }

    /// True when the amount field holds exactly this preset.
    fn is_preset_selected(&self, preset: u64) -> bool {
        self.amount.trim() == preset.to_string()
    }

    /// True when a custom (non-preset) amount has been entered.
    fn is_custom_selected(&self) -> bool {
        let trimmed = self.amount.trim();
        !trimmed.is_empty()
            && QUICK_AMOUNTS_NAIRA
                .iter()
                .all(|preset| preset.to_string() != trimmed)
    }
}

/// Parses a positive, finite naira amount from the free-text field.
fn parse_amount(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Amount text for the success toast: grouped when whole, raw otherwise.
fn display_amount(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.parse::<u64>() {
        Ok(value) => format::grouped(value),
        Err(_) => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_donation() -> State {
        let mut state = State::new();
        state.update(Message::NameChanged("Ada Donor".to_string()));
        state.update(Message::EmailChanged("ada@example.org".to_string()));
        state.update(Message::PhoneChanged("08012345678".to_string()));
        state.update(Message::AmountChanged("5000".to_string()));
        state
    }

    fn filled_enquiry() -> State {
        let mut state = filled_donation();
        state.update(Message::TabSelected(Tab::Enquiry));
        state.update(Message::MessageChanged(
            "How can I volunteer on site?".to_string(),
        ));
        state
    }

    /// Drives a filled donation form through submit and debounce, returning
    /// the checkout request.
    fn submitted_donation() -> (State, u64, f64, Customer) {
        let mut state = filled_donation();
        assert!(matches!(
            state.update(Message::SubmitPressed),
            Event::None
        ));
        let fired = state.poll_debounce(
            Instant::now() + Duration::from_millis(PAYMENT_DEBOUNCE_MS + 50),
        );
        match fired {
            Event::CheckoutRequested {
                seq,
                amount,
                customer,
            } => (state, seq, amount, customer),
            other => panic!("expected CheckoutRequested, got {other:?}"),
        }
    }

    fn checkout() -> HostedCheckout {
        HostedCheckout {
            link: "https://checkout.example/abc".to_string(),
            tx_ref: "tx-1234".to_string(),
        }
    }

    fn successful_details() -> CompletionDetails {
        CompletionDetails {
            status: "successful".to_string(),
            tx_ref: "tx-1234".to_string(),
            transaction_id: Some(42),
        }
    }

    #[test]
    fn donation_with_empty_name_is_rejected_before_invocation() {
        let mut state = filled_donation();
        state.update(Message::NameChanged(String::new()));

        match state.update(Message::SubmitPressed) {
            Event::Notify(notification) => {
                assert_eq!(notification.message_key(), "notification-support-incomplete");
            }
            other => panic!("expected Notify, got {other:?}"),
        }
        assert!(!state.is_busy());
    }

    #[test]
    fn donation_with_zero_amount_is_rejected_before_invocation() {
        let mut state = filled_donation();
        state.update(Message::AmountChanged("0".to_string()));

        match state.update(Message::SubmitPressed) {
            Event::Notify(notification) => {
                assert_eq!(
                    notification.message_key(),
                    "notification-support-invalid-amount"
                );
            }
            other => panic!("expected Notify, got {other:?}"),
        }
        assert!(!state.is_busy());
    }

    #[test]
    fn donation_with_unparseable_amount_is_rejected() {
        let mut state = filled_donation();
        state.update(Message::AmountChanged("lots".to_string()));

        assert!(matches!(
            state.update(Message::SubmitPressed),
            Event::Notify(_)
        ));
        assert!(!state.is_busy());
    }

    #[test]
    fn valid_donation_debounces_then_requests_checkout() {
        let mut state = filled_donation();
        assert!(matches!(
            state.update(Message::SubmitPressed),
            Event::None
        ));
        assert!(state.is_busy());
        assert!(state.has_pending_debounce());

        // Inside the window nothing fires.
        assert!(matches!(
            state.poll_debounce(Instant::now()),
            Event::None
        ));
        assert!(state.has_pending_debounce());

        let after = Instant::now() + Duration::from_millis(PAYMENT_DEBOUNCE_MS + 50);
        match state.poll_debounce(after) {
            Event::CheckoutRequested {
                amount, customer, ..
            } => {
                assert_eq!(amount, 5000.0);
                assert_eq!(customer.name, "Ada Donor");
                assert_eq!(customer.email, "ada@example.org");
                assert_eq!(customer.phone_number, "08012345678");
            }
            other => panic!("expected CheckoutRequested, got {other:?}"),
        }
        assert!(!state.has_pending_debounce());
    }

    #[test]
    fn second_submit_while_busy_is_ignored() {
        let mut state = filled_donation();
        state.update(Message::SubmitPressed);

        assert!(matches!(
            state.update(Message::SubmitPressed),
            Event::None
        ));
        assert!(state.has_pending_debounce());
    }

    #[test]
    fn tab_switch_cancels_pending_debounce() {
        let mut state = filled_donation();
        state.update(Message::SubmitPressed);
        state.update(Message::TabSelected(Tab::Enquiry));

        assert!(!state.is_busy());
        let after = Instant::now() + Duration::from_millis(PAYMENT_DEBOUNCE_MS + 50);
        assert!(matches!(state.poll_debounce(after), Event::None));
    }

    #[test]
    fn reselecting_the_active_tab_keeps_pending_debounce() {
        let mut state = filled_donation();
        state.update(Message::SubmitPressed);
        state.update(Message::TabSelected(Tab::Donation));

        assert!(state.has_pending_debounce());
    }

    #[test]
    fn amount_edit_inside_window_does_not_alter_the_attempt() {
        let mut state = filled_donation();
        state.update(Message::SubmitPressed);
        state.update(Message::AmountChanged("999999".to_string()));

        let after = Instant::now() + Duration::from_millis(PAYMENT_DEBOUNCE_MS + 50);
        match state.poll_debounce(after) {
            Event::CheckoutRequested { amount, .. } => assert_eq!(amount, 5000.0),
            other => panic!("expected CheckoutRequested, got {other:?}"),
        }
    }

    #[test]
    fn anonymous_donation_masks_gateway_name_but_not_receipt() {
        let mut state = filled_donation();
        state.update(Message::AnonymousToggled(true));
        state.update(Message::SubmitPressed);

        let after = Instant::now() + Duration::from_millis(PAYMENT_DEBOUNCE_MS + 50);
        match state.poll_debounce(after) {
            Event::CheckoutRequested { customer, .. } => {
                assert_eq!(customer.name, ANONYMOUS_DONOR);
            }
            other => panic!("expected CheckoutRequested, got {other:?}"),
        }
        // The receipt params keep the real name.
        assert_eq!(state.template_params().name, "Ada Donor");
    }

    #[test]
    fn created_checkout_moves_to_awaiting_payment() {
        let (mut state, seq, ..) = submitted_donation();

        match state.update(Message::CheckoutCreated {
            seq,
            result: Ok(checkout()),
        }) {
            Event::CheckoutReady { link } => {
                assert_eq!(link, "https://checkout.example/abc");
            }
            other => panic!("expected CheckoutReady, got {other:?}"),
        }
        assert!(state.is_payment_pending());
    }

    #[test]
    fn stale_checkout_result_is_dropped() {
        let (mut state, seq, ..) = submitted_donation();

        assert!(matches!(
            state.update(Message::CheckoutCreated {
                seq: seq + 7,
                result: Ok(checkout()),
            }),
            Event::None
        ));
        // Still waiting on the genuine result.
        assert!(state.is_busy());
        assert!(!state.is_payment_pending());
    }

    #[test]
    fn checkout_failure_returns_to_idle_and_keeps_fields() {
        let (mut state, seq, ..) = submitted_donation();

        match state.update(Message::CheckoutCreated {
            seq,
            result: Err(PaymentError::Network("timeout".to_string())),
        }) {
            Event::DonationFailed { error } => {
                assert_eq!(error, PaymentError::Network("timeout".to_string()));
            }
            other => panic!("expected DonationFailed, got {other:?}"),
        }
        assert!(!state.is_busy());
        assert_eq!(state.name, "Ada Donor");
        assert_eq!(state.amount, "5000");
    }

    #[test]
    fn confirm_then_successful_verification_clears_fields() {
        let (mut state, seq, ..) = submitted_donation();
        state.update(Message::CheckoutCreated {
            seq,
            result: Ok(checkout()),
        });

        match state.update(Message::PaymentConfirmPressed) {
            Event::VerificationRequested { tx_ref, .. } => assert_eq!(tx_ref, "tx-1234"),
            other => panic!("expected VerificationRequested, got {other:?}"),
        }

        match state.update(Message::PaymentVerified {
            seq,
            result: Ok(successful_details()),
        }) {
            Event::DonationSucceeded {
                notification,
                receipt,
            } => {
                assert_eq!(
                    notification.message_key(),
                    "notification-support-donation-success"
                );
                assert_eq!(
                    notification.message_args(),
                    &[("amount".to_string(), "5,000".to_string())]
                );
                // Receipt carries the pre-clear values.
                assert_eq!(receipt.name, "Ada Donor");
                assert_eq!(receipt.amount, "5000");
            }
            other => panic!("expected DonationSucceeded, got {other:?}"),
        }

        assert!(!state.is_busy());
        assert!(state.name.is_empty());
        assert!(state.email.is_empty());
        assert!(state.amount.is_empty());
        assert!(!state.anonymous);
    }

    #[test]
    fn unsuccessful_verification_keeps_fields() {
        let (mut state, seq, ..) = submitted_donation();
        state.update(Message::CheckoutCreated {
            seq,
            result: Ok(checkout()),
        });
        state.update(Message::PaymentConfirmPressed);

        let mut details = successful_details();
        details.status = "failed".to_string();
        match state.update(Message::PaymentVerified {
            seq,
            result: Ok(details),
        }) {
            Event::DonationFailed { error } => {
                assert_eq!(error, PaymentError::Rejected("failed".to_string()));
            }
            other => panic!("expected DonationFailed, got {other:?}"),
        }
        assert_eq!(state.name, "Ada Donor");
        assert_eq!(state.amount, "5000");
        assert!(!state.is_busy());
    }

    #[test]
    fn cancel_while_awaiting_reports_dismissal_and_keeps_fields() {
        let (mut state, seq, ..) = submitted_donation();
        state.update(Message::CheckoutCreated {
            seq,
            result: Ok(checkout()),
        });

        match state.update(Message::PaymentCancelPressed) {
            Event::Notify(notification) => {
                assert_eq!(
                    notification.message_key(),
                    "notification-support-donation-dismissed"
                );
            }
            other => panic!("expected Notify, got {other:?}"),
        }
        assert!(!state.is_busy());
        assert_eq!(state.name, "Ada Donor");
    }

    #[test]
    fn cancel_invalidates_in_flight_verification() {
        let (mut state, seq, ..) = submitted_donation();
        state.update(Message::CheckoutCreated {
            seq,
            result: Ok(checkout()),
        });
        state.update(Message::PaymentConfirmPressed);
        state.update(Message::PaymentCancelPressed);

        // The verification issued before the cancel must not fire.
        assert!(matches!(
            state.update(Message::PaymentVerified {
                seq,
                result: Ok(successful_details()),
            }),
            Event::None
        ));
        assert_eq!(state.name, "Ada Donor");
    }

    #[test]
    fn enquiry_requires_phone_and_message() {
        let mut state = filled_donation();
        state.update(Message::TabSelected(Tab::Enquiry));

        // Phone present but message missing.
        assert!(matches!(
            state.update(Message::SubmitPressed),
            Event::Notify(_)
        ));

        state.update(Message::MessageChanged("A question".to_string()));
        state.update(Message::PhoneChanged(String::new()));
        assert!(matches!(
            state.update(Message::SubmitPressed),
            Event::Notify(_)
        ));
        assert!(!state.is_busy());
    }

    #[test]
    fn valid_enquiry_submits_without_debounce() {
        let mut state = filled_enquiry();

        match state.update(Message::SubmitPressed) {
            Event::EnquiryRequested { params, .. } => {
                assert_eq!(params.name, "Ada Donor");
                assert_eq!(params.message, "How can I volunteer on site?");
            }
            other => panic!("expected EnquiryRequested, got {other:?}"),
        }
        assert!(state.is_busy());
        assert!(!state.has_pending_debounce());
    }

    #[test]
    fn enquiry_success_clears_fields_and_notifies() {
        let mut state = filled_enquiry();
        let seq = match state.update(Message::SubmitPressed) {
            Event::EnquiryRequested { seq, .. } => seq,
            other => panic!("expected EnquiryRequested, got {other:?}"),
        };

        match state.update(Message::EnquirySent {
            seq,
            result: Ok(()),
        }) {
            Event::Notify(notification) => {
                assert_eq!(
                    notification.message_key(),
                    "notification-support-enquiry-success"
                );
            }
            other => panic!("expected Notify, got {other:?}"),
        }
        assert!(!state.is_busy());
        assert!(state.name.is_empty());
        assert!(state.message.is_empty());
    }

    #[test]
    fn enquiry_failure_keeps_fields() {
        let mut state = filled_enquiry();
        let seq = match state.update(Message::SubmitPressed) {
            Event::EnquiryRequested { seq, .. } => seq,
            other => panic!("expected EnquiryRequested, got {other:?}"),
        };

        assert!(matches!(
            state.update(Message::EnquirySent {
                seq,
                result: Err(EmailError::Rejected("quota".to_string())),
            }),
            Event::EnquiryFailed { .. }
        ));
        assert!(!state.is_busy());
        assert_eq!(state.name, "Ada Donor");
        assert_eq!(state.message, "How can I volunteer on site?");
    }

    #[test]
    fn quick_amount_sets_field_and_custom_clears_it() {
        let mut state = State::new();
        state.update(Message::QuickAmountPressed(50_000));
        assert_eq!(state.amount, "50000");
        assert!(state.is_preset_selected(50_000));
        assert!(!state.is_custom_selected());

        state.update(Message::CustomAmountPressed);
        assert!(state.amount.is_empty());
        assert!(!state.is_custom_selected());

        state.update(Message::AmountChanged("7500".to_string()));
        assert!(state.is_custom_selected());
    }

    #[test]
    fn parse_amount_accepts_decimals_and_rejects_junk() {
        assert_eq!(parse_amount("5000"), Some(5000.0));
        assert_eq!(parse_amount(" 2500.50 "), Some(2500.5));
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("-10"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn display_amount_groups_whole_values() {
        assert_eq!(display_amount("5000"), "5,000");
        assert_eq!(display_amount("2500.50"), "2500.50");
    }
}
