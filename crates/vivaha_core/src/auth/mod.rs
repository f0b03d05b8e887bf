//! Account-verification collaborator: one-time codes and transactional
//! e-mail.
//!
//! # Responsibility
//! - Issue and verify single-use 6-digit codes with a fixed expiry.
//! - Compose login-alert and room-details e-mails behind the [`Mailer`]
//!   seam.
//!
//! # Invariants
//! - Codes are keyed by trimmed, lowercased e-mail; one pending code per
//!   address.
//! - Nothing retries automatically; callers retry by resubmitting.
//! - Log lines carry masked e-mail addresses only.

mod mailer;
mod otp;

pub use mailer::{LogMailer, Mailer, MailerError, OutboundEmail};
pub use otp::{
    AlertKind, AuthService, LoginAlertRequest, OtpVerification, RoomDetailsRequest, OTP_TTL_MS,
};

use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug)]
pub enum AuthError {
    /// A required request field was empty.
    MissingField(&'static str),
    /// Code storage failure.
    Repo(RepoError),
    /// Outbound e-mail failure; any stored code is kept for retry.
    Mail(MailerError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field missing: {field}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Mail(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Mail(err) => Some(err),
            Self::MissingField(_) => None,
        }
    }
}

impl From<RepoError> for AuthError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<MailerError> for AuthError {
    fn from(value: MailerError) -> Self {
        Self::Mail(value)
    }
}

/// Masks an e-mail address for logging ("r***@example.com").
pub(crate) fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{first}***@{domain}")
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::mask_email;

    #[test]
    fn mask_email_keeps_first_char_and_domain() {
        assert_eq!(mask_email("ramesh@example.com"), "r***@example.com");
        assert_eq!(mask_email("not-an-address"), "***");
    }
}
