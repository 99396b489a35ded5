// SPDX-License-Identifier: MPL-2.0
//! Email delivery client (template send).
//!
//! Enquiries and donation confirmations go out through a hosted template-send
//! API: the request names a service, a template, and an account, plus the
//! template parameters filled from the form. The service acknowledges
//! delivery with the literal body text `OK`; any other body or transport
//! failure is a delivery failure.

use serde::Serialize;

/// Endpoint for the template-send API.
const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Response body text that indicates accepted delivery.
pub const DELIVERY_OK: &str = "OK";

/// Result type for email operations.
pub type EmailResult<T> = Result<T, EmailError>;

/// Errors that can occur while sending through the delivery service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// Service, template, or account id missing from configuration.
    MissingCredentials,
    /// The service answered with something other than `OK`.
    Rejected(String),
    /// Transport-level failure (DNS, TLS, timeout, connection).
    Network(String),
}

impl EmailError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            EmailError::MissingCredentials => "error-email-missing-credentials",
            EmailError::Rejected(_) => "error-email-rejected",
            EmailError::Network(_) => "error-email-network",
        }
    }
}

impl std::fmt::Display for EmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailError::MissingCredentials => write!(f, "Email credentials are not configured"),
            EmailError::Rejected(body) => write!(f, "Delivery rejected: {body}"),
            EmailError::Network(msg) => write!(f, "Network failure: {msg}"),
        }
    }
}

impl std::error::Error for EmailError {}

/// Credentials identifying the sending account and template.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmailCredentials {
    pub service_id: String,
    pub template_id: String,
    pub account_id: String,
}

impl EmailCredentials {
    /// True when every id is present.
    pub fn is_complete(&self) -> bool {
        !self.service_id.trim().is_empty()
            && !self.template_id.trim().is_empty()
            && !self.account_id.trim().is_empty()
    }
}

/// Named template parameters filled from the form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub amount: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Sends one template through the delivery service.
///
/// Success is the service's literal `OK` acknowledgement; any other body is
/// reported as [`EmailError::Rejected`] with the body text.
pub async fn send_template(
    credentials: &EmailCredentials,
    params: &TemplateParams,
) -> EmailResult<()> {
    if !credentials.is_complete() {
        return Err(EmailError::MissingCredentials);
    }

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(super::APP_USER_AGENT)
        .build()
        .map_err(|e| EmailError::Network(e.to_string()))?;

    let request = SendRequest {
        service_id: &credentials.service_id,
        template_id: &credentials.template_id,
        user_id: &credentials.account_id,
        template_params: params,
    };

    let response = client
        .post(SEND_ENDPOINT)
        .json(&request)
        .send()
        .await
        .map_err(|e| EmailError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| EmailError::Network(e.to_string()))?;

    interpret_delivery(status.is_success(), &body)
}

/// Maps the service's HTTP status and body text onto a delivery result.
fn interpret_delivery(http_ok: bool, body: &str) -> EmailResult<()> {
    if http_ok && body == DELIVERY_OK {
        Ok(())
    } else {
        Err(EmailError::Rejected(body.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_credentials() -> EmailCredentials {
        EmailCredentials {
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            account_id: "user_123".to_string(),
        }
    }

    fn sample_params() -> TemplateParams {
        TemplateParams {
            name: "Ada Donor".to_string(),
            email: "donor@example.org".to_string(),
            phone: "08012345678".to_string(),
            amount: String::new(),
            message: "How can I volunteer?".to_string(),
        }
    }

    #[test]
    fn credentials_complete_only_when_all_ids_present() {
        assert!(complete_credentials().is_complete());

        let mut partial = complete_credentials();
        partial.template_id = String::new();
        assert!(!partial.is_complete());

        assert!(!EmailCredentials::default().is_complete());
    }

    #[test]
    fn send_request_serializes_contract_field_names() {
        let credentials = complete_credentials();
        let params = sample_params();
        let request = SendRequest {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.account_id,
            template_params: &params,
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["service_id"], "service_abc");
        assert_eq!(json["template_id"], "template_xyz");
        assert_eq!(json["user_id"], "user_123");
        assert_eq!(json["template_params"]["message"], "How can I volunteer?");
    }

    #[test]
    fn only_exact_ok_body_is_delivery() {
        assert!(interpret_delivery(true, "OK").is_ok());
        assert!(matches!(
            interpret_delivery(true, "ok"),
            Err(EmailError::Rejected(_))
        ));
        assert!(matches!(
            interpret_delivery(true, "Accepted"),
            Err(EmailError::Rejected(_))
        ));
        assert!(matches!(
            interpret_delivery(false, "OK"),
            Err(EmailError::Rejected(_))
        ));
    }

    #[tokio::test]
    async fn send_without_credentials_fails_before_network() {
        let result = send_template(&EmailCredentials::default(), &sample_params()).await;
        assert_eq!(result, Err(EmailError::MissingCredentials));
    }

    #[test]
    fn error_i18n_keys() {
        assert_eq!(
            EmailError::MissingCredentials.i18n_key(),
            "error-email-missing-credentials"
        );
        assert_eq!(EmailError::Network("dns".into()).i18n_key(), "error-email-network");
    }
}
