// SPDX-License-Identifier: MPL-2.0
//! Payment gateway client (hosted checkout).
//!
//! This module covers the donation money path:
//! - Building a checkout configuration with a fresh transaction reference
//! - Creating a hosted checkout link over the gateway's REST surface
//! - Verifying a pending transaction by its reference
//!
//! The gateway reports completion with a status string; only the exact text
//! `"successful"` counts as a completed donation. Everything else, including
//! an abandoned checkout, leaves the donor's form intact for a manual retry.

use serde::{Deserialize, Serialize};

/// Endpoint for creating a hosted payment link.
const CHECKOUT_ENDPOINT: &str = "https://api.flutterwave.com/v3/payments";

/// Endpoint prefix for verifying a transaction by reference.
const VERIFY_ENDPOINT: &str = "https://api.flutterwave.com/v3/transactions/verify_by_reference";

/// Status text the gateway uses for a completed payment.
pub const SUCCESSFUL_STATUS: &str = "successful";

/// Result type for payment operations.
pub type PaymentResult<T> = Result<T, PaymentError>;

/// Errors that can occur while talking to the payment gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// No public key configured; checkout cannot be attempted.
    MissingCredentials,
    /// The gateway rejected the request (non-success envelope or HTTP status).
    Rejected(String),
    /// Transport-level failure (DNS, TLS, timeout, connection).
    Network(String),
    /// The gateway answered with a payload we could not interpret.
    MalformedResponse(String),
}

impl PaymentError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PaymentError::MissingCredentials => "error-payment-missing-credentials",
            PaymentError::Rejected(_) => "error-payment-rejected",
            PaymentError::Network(_) => "error-payment-network",
            PaymentError::MalformedResponse(_) => "error-payment-malformed",
        }
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentError::MissingCredentials => write!(f, "Payment public key is not configured"),
            PaymentError::Rejected(msg) => write!(f, "Gateway rejected the request: {msg}"),
            PaymentError::Network(msg) => write!(f, "Network failure: {msg}"),
            PaymentError::MalformedResponse(msg) => write!(f, "Unexpected gateway response: {msg}"),
        }
    }
}

impl std::error::Error for PaymentError {}

/// Donor identity attached to a checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub email: String,
    #[serde(rename = "phonenumber")]
    pub phone_number: String,
    pub name: String,
}

/// Checkout page branding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customizations {
    pub title: String,
    pub description: String,
    pub logo: String,
}

/// Full configuration for one checkout attempt.
///
/// `tx_ref` must be unique per attempt; [`generate_tx_ref`] produces one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutConfig {
    #[serde(skip_serializing)]
    pub public_key: String,
    pub tx_ref: String,
    pub amount: f64,
    pub currency: String,
    pub payment_options: String,
    pub customer: Customer,
    pub customizations: Customizations,
}

impl CheckoutConfig {
    /// Builds a donation checkout with the campaign's fixed currency,
    /// payment options, and branding.
    pub fn for_donation(public_key: &str, tx_ref: String, amount: f64, customer: Customer) -> Self {
        Self {
            public_key: public_key.to_string(),
            tx_ref,
            amount,
            currency: crate::config::defaults::DONATION_CURRENCY.to_string(),
            payment_options: crate::config::defaults::PAYMENT_OPTIONS.to_string(),
            customer,
            customizations: Customizations {
                title: crate::config::defaults::CHECKOUT_TITLE.to_string(),
                description: crate::config::defaults::CHECKOUT_DESCRIPTION.to_string(),
                logo: crate::config::defaults::CHECKOUT_LOGO_URL.to_string(),
            },
        }
    }
}

/// A created hosted checkout: the link the donor completes payment at.
#[derive(Debug, Clone, PartialEq)]
pub struct HostedCheckout {
    pub link: String,
    pub tx_ref: String,
}

/// Terminal details of one checkout attempt as reported by the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionDetails {
    pub status: String,
    pub tx_ref: String,
    pub transaction_id: Option<u64>,
}

impl CompletionDetails {
    /// True only for the gateway's exact completed-payment status text.
    pub fn is_successful(&self) -> bool {
        self.status == SUCCESSFUL_STATUS
    }
}

/// Outcome of one checkout attempt from the donor's point of view.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// The gateway reported a terminal status (successful or otherwise).
    Completed(CompletionDetails),
    /// The donor abandoned the checkout without completing it.
    Dismissed,
}

/// Generates a transaction reference unique to this attempt.
pub fn generate_tx_ref() -> String {
    format!("tx-{}", chrono::Utc::now().timestamp_millis())
}

#[derive(Debug, Deserialize)]
struct GatewayEnvelope<T> {
    status: String,
    message: Option<String>,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct CheckoutLinkData {
    link: String,
}

#[derive(Debug, Deserialize)]
struct VerifiedTransaction {
    status: String,
    tx_ref: String,
    id: Option<u64>,
}

fn build_client() -> PaymentResult<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(super::APP_USER_AGENT)
        .build()
        .map_err(|e| PaymentError::Network(e.to_string()))
}

/// Creates a hosted checkout for the given configuration.
///
/// Returns the link the donor completes payment at, tagged with the
/// configuration's transaction reference.
pub async fn create_hosted_checkout(config: &CheckoutConfig) -> PaymentResult<HostedCheckout> {
    if config.public_key.trim().is_empty() {
        return Err(PaymentError::MissingCredentials);
    }

    let client = build_client()?;
    let response = client
        .post(CHECKOUT_ENDPOINT)
        .bearer_auth(&config.public_key)
        .json(config)
        .send()
        .await
        .map_err(|e| PaymentError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(PaymentError::Rejected(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    let envelope: GatewayEnvelope<CheckoutLinkData> = response
        .json()
        .await
        .map_err(|e| PaymentError::MalformedResponse(e.to_string()))?;

    match interpret_envelope(envelope) {
        Ok(data) => Ok(HostedCheckout {
            link: data.link,
            tx_ref: config.tx_ref.clone(),
        }),
        Err(err) => Err(err),
    }
}

/// Asks the gateway for the terminal state of a pending transaction.
pub async fn verify_by_reference(
    public_key: &str,
    tx_ref: &str,
) -> PaymentResult<CompletionDetails> {
    if public_key.trim().is_empty() {
        return Err(PaymentError::MissingCredentials);
    }

    let client = build_client()?;
    let response = client
        .get(VERIFY_ENDPOINT)
        .bearer_auth(public_key)
        .query(&[("tx_ref", tx_ref)])
        .send()
        .await
        .map_err(|e| PaymentError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(PaymentError::Rejected(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    let envelope: GatewayEnvelope<VerifiedTransaction> = response
        .json()
        .await
        .map_err(|e| PaymentError::MalformedResponse(e.to_string()))?;

    let data = interpret_envelope(envelope)?;
    Ok(CompletionDetails {
        status: data.status,
        tx_ref: data.tx_ref,
        transaction_id: data.id,
    })
}

/// Unwraps the gateway's `{status, message, data}` envelope.
fn interpret_envelope<T>(envelope: GatewayEnvelope<T>) -> PaymentResult<T> {
    if envelope.status != "success" {
        let message = envelope
            .message
            .unwrap_or_else(|| envelope.status.clone());
        return Err(PaymentError::Rejected(message));
    }
    envelope
        .data
        .ok_or_else(|| PaymentError::MalformedResponse("missing data field".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_customer() -> Customer {
        Customer {
            email: "donor@example.org".to_string(),
            phone_number: "08012345678".to_string(),
            name: "Ada Donor".to_string(),
        }
    }

    #[test]
    fn tx_ref_has_prefix_and_millisecond_suffix() {
        let tx_ref = generate_tx_ref();
        let suffix = tx_ref.strip_prefix("tx-").expect("missing tx- prefix");
        assert!(suffix.parse::<i64>().expect("suffix not numeric") > 0);
    }

    #[test]
    fn donation_config_fills_campaign_constants() {
        let config = CheckoutConfig::for_donation(
            "FLWPUBK-test",
            "tx-1234".to_string(),
            5000.0,
            sample_customer(),
        );
        assert_eq!(config.currency, "NGN");
        assert_eq!(config.payment_options, "card,ussd,banktransfer");
        assert_eq!(config.tx_ref, "tx-1234");
        assert_eq!(config.amount, 5000.0);
    }

    #[test]
    fn checkout_config_serializes_contract_field_names() {
        let config = CheckoutConfig::for_donation(
            "FLWPUBK-test",
            "tx-1234".to_string(),
            5000.0,
            sample_customer(),
        );
        let json = serde_json::to_value(&config).expect("serialize");
        assert!(json.get("public_key").is_none(), "key must not be in body");
        assert_eq!(json["tx_ref"], "tx-1234");
        assert_eq!(json["customer"]["phonenumber"], "08012345678");
        assert_eq!(
            json["customizations"]["title"],
            crate::config::defaults::CHECKOUT_TITLE
        );
    }

    #[test]
    fn only_exact_successful_status_counts() {
        let mut details = CompletionDetails {
            status: SUCCESSFUL_STATUS.to_string(),
            tx_ref: "tx-1".to_string(),
            transaction_id: Some(42),
        };
        assert!(details.is_successful());

        details.status = "failed".to_string();
        assert!(!details.is_successful());

        details.status = "Successful".to_string();
        assert!(!details.is_successful());
    }

    #[test]
    fn envelope_success_unwraps_data() {
        let envelope: GatewayEnvelope<CheckoutLinkData> = serde_json::from_str(
            r#"{"status":"success","message":"Hosted Link","data":{"link":"https://checkout.example/abc"}}"#,
        )
        .expect("deserialize");
        let data = interpret_envelope(envelope).expect("should unwrap");
        assert_eq!(data.link, "https://checkout.example/abc");
    }

    #[test]
    fn envelope_error_carries_gateway_message() {
        let envelope: GatewayEnvelope<CheckoutLinkData> = serde_json::from_str(
            r#"{"status":"error","message":"Invalid public key","data":null}"#,
        )
        .expect("deserialize");
        match interpret_envelope(envelope) {
            Err(PaymentError::Rejected(msg)) => assert_eq!(msg, "Invalid public key"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn envelope_success_without_data_is_malformed() {
        let envelope: GatewayEnvelope<CheckoutLinkData> =
            serde_json::from_str(r#"{"status":"success","message":null,"data":null}"#)
                .expect("deserialize");
        assert!(matches!(
            interpret_envelope(envelope),
            Err(PaymentError::MalformedResponse(_))
        ));
    }

    #[test]
    fn verified_transaction_deserializes() {
        let envelope: GatewayEnvelope<VerifiedTransaction> = serde_json::from_str(
            r#"{"status":"success","message":null,"data":{"status":"successful","tx_ref":"tx-99","id":1204}}"#,
        )
        .expect("deserialize");
        let data = interpret_envelope(envelope).expect("should unwrap");
        assert_eq!(data.status, "successful");
        assert_eq!(data.tx_ref, "tx-99");
        assert_eq!(data.id, Some(1204));
    }

    #[tokio::test]
    async fn checkout_without_public_key_fails_before_network() {
        let config = CheckoutConfig::for_donation(
            "  ",
            generate_tx_ref(),
            5000.0,
            sample_customer(),
        );
        let result = create_hosted_checkout(&config).await;
        assert_eq!(result, Err(PaymentError::MissingCredentials));
    }

    #[tokio::test]
    async fn verify_without_public_key_fails_before_network() {
        let result = verify_by_reference("", "tx-1").await;
        assert_eq!(result, Err(PaymentError::MissingCredentials));
    }

    #[test]
    fn error_i18n_keys() {
        assert_eq!(
            PaymentError::MissingCredentials.i18n_key(),
            "error-payment-missing-credentials"
        );
        assert_eq!(
            PaymentError::Network("timeout".into()).i18n_key(),
            "error-payment-network"
        );
    }
}
