//! Outbound e-mail seam.
//!
//! The real SMTP transport lives outside core; this module defines the
//! message shape, the transport contract, and a logging stand-in that
//! mirrors the source's missing-credentials simulation path.

use crate::auth::mask_email;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One composed transactional e-mail, plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug)]
pub enum MailerError {
    /// Transport-level rejection; the operation is retryable by
    /// resubmission, never retried automatically.
    Transport(String),
}

impl Display for MailerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "mail transport failed: {message}"),
        }
    }
}

impl Error for MailerError {}

/// Transport contract for transactional e-mail.
pub trait Mailer {
    fn send(&self, message: &OutboundEmail) -> Result<(), MailerError>;
}

/// Mailer that only logs, standing in for a configured SMTP transport.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, message: &OutboundEmail) -> Result<(), MailerError> {
        info!(
            "event=email_send module=auth status=simulated to={} subject_len={} body_len={}",
            mask_email(&message.to),
            message.subject.len(),
            message.body.len()
        );
        Ok(())
    }
}
