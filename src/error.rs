// SPDX-License-Identifier: MPL-2.0
use std::fmt;

use crate::services::email::EmailError;
use crate::services::payment::PaymentError;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Payment(PaymentError),
    Email(EmailError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Payment(e) => write!(f, "Payment Error: {}", e),
            Error::Email(e) => write!(f, "Email Error: {}", e),
        }
    }
}

impl From<PaymentError> for Error {
    fn from(err: PaymentError) -> Self {
        Error::Payment(err)
    }
}

impl From<EmailError> for Error {
    fn from(err: EmailError) -> Self {
        Error::Email(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
