//! One-time-code issue/verify flows and e-mail composition.
//!
//! # Responsibility
//! - Reproduce the sign-up verification flow: issue a 6-digit code with a
//!   5-minute expiry, verify it single-use.
//! - Compose the login-alert and room-details messages for the mailer.
//!
//! # Invariants
//! - A mismatching code never deletes the stored one; expiry and success do.
//! - Issuing a new code replaces any pending one for the same address.
//! - Callers pass `now_ms` explicitly; core never reads the wall clock.

use crate::auth::{mask_email, AuthError, AuthResult, Mailer, OutboundEmail};
use crate::repo::otp_repo::OtpRepository;
use log::info;
use uuid::Uuid;

/// Code lifetime: 5 minutes, in milliseconds.
pub const OTP_TTL_MS: i64 = 5 * 60 * 1000;

/// Outcome of a verification attempt, mirroring the collaborator's
/// response messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpVerification {
    Verified,
    NoOtpFound,
    Expired,
    Mismatch,
}

impl OtpVerification {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Verified)
    }

    /// User-facing message, kept verbatim from the legacy endpoints.
    pub fn message(self) -> &'static str {
        match self {
            Self::Verified => "OTP verified successfully",
            Self::NoOtpFound => "No OTP found for this email",
            Self::Expired => "OTP has expired",
            Self::Mismatch => "Invalid OTP",
        }
    }
}

/// Alert flavor for `send_login_alert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Login,
    Signup,
}

/// Request shape for the login/signup alert e-mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAlertRequest {
    pub to: String,
    pub display_name: Option<String>,
    pub device_info: String,
    pub login_time: String,
    pub kind: AlertKind,
}

/// Request shape for the room-details e-mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDetailsRequest {
    pub email: String,
    pub hotel_name: String,
    pub hotel_location: String,
    pub room_number: String,
    pub room_type: String,
    pub guests: Vec<String>,
}

/// Verification and transactional-mail service.
pub struct AuthService<R: OtpRepository, M: Mailer> {
    repo: R,
    mailer: M,
}

impl<R: OtpRepository, M: Mailer> AuthService<R, M> {
    pub fn new(repo: R, mailer: M) -> Self {
        Self { repo, mailer }
    }

    /// Access to the underlying transport (used by callers that need to
    /// inspect or reconfigure it).
    pub fn mailer(&self) -> &M {
        &self.mailer
    }

    /// Issues a fresh code for `email` and mails it.
    ///
    /// The code is stored before the mail goes out, so a transport failure
    /// leaves a valid code behind and the user can simply resubmit.
    pub fn request_otp(&self, email: &str, now_ms: i64) -> AuthResult<()> {
        let email = normalize_email(email)?;
        let code = generate_code();
        self.repo.put_otp(&email, &code, now_ms + OTP_TTL_MS)?;

        let message = OutboundEmail {
            to: email.clone(),
            subject: "Your Verification Code".to_string(),
            body: format!(
                "Hello,\n\nYour verification code is: {code}\n\nThis code will expire in 5 minutes.\nIf you didn't request this code, please ignore this email.\n"
            ),
        };
        self.mailer.send(&message)?;

        info!(
            "event=otp_request module=auth status=ok email={}",
            mask_email(&email)
        );
        Ok(())
    }

    /// Checks a submitted code against the stored one.
    ///
    /// Single use: success deletes the code, as does discovering it has
    /// expired. A plain mismatch keeps it so the user can retype.
    pub fn verify_otp(&self, email: &str, code: &str, now_ms: i64) -> AuthResult<OtpVerification> {
        let email = normalize_email(email)?;
        if code.trim().is_empty() {
            return Err(AuthError::MissingField("otp"));
        }

        let outcome = match self.repo.get_otp(&email)? {
            None => OtpVerification::NoOtpFound,
            Some(stored) if now_ms > stored.expires_at_ms => {
                self.repo.delete_otp(&email)?;
                OtpVerification::Expired
            }
            Some(stored) if stored.code != code.trim() => OtpVerification::Mismatch,
            Some(_) => {
                self.repo.delete_otp(&email)?;
                OtpVerification::Verified
            }
        };

        info!(
            "event=otp_verify module=auth status={} email={}",
            if outcome.is_success() { "ok" } else { "rejected" },
            mask_email(&email)
        );
        Ok(outcome)
    }

    /// Sends a new-login or welcome e-mail.
    pub fn send_login_alert(&self, request: &LoginAlertRequest) -> AuthResult<()> {
        if request.to.trim().is_empty() {
            return Err(AuthError::MissingField("to"));
        }

        let display_name = request.display_name.as_deref().unwrap_or("User");
        let (subject, lead) = match request.kind {
            AlertKind::Login => (
                "New Login Alert",
                "We detected a new login to your account.",
            ),
            AlertKind::Signup => (
                "Welcome!",
                "Thank you for creating an account. We are excited to help you plan your perfect wedding!",
            ),
        };

        let message = OutboundEmail {
            to: request.to.trim().to_string(),
            subject: subject.to_string(),
            body: format!(
                "Hello {display_name},\n\n{lead}\n\nTime: {}\nDevice: {}\n",
                request.login_time, request.device_info
            ),
        };
        self.mailer.send(&message)?;

        info!(
            "event=login_alert module=auth status=ok kind={:?} email={}",
            request.kind,
            mask_email(request.to.trim())
        );
        Ok(())
    }

    /// Sends the room-allocation details e-mail.
    ///
    /// Rejects empty e-mail/hotel/room fields before composing anything;
    /// the guest list may be empty.
    pub fn send_room_details(&self, request: &RoomDetailsRequest) -> AuthResult<()> {
        if request.email.trim().is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if request.hotel_name.trim().is_empty() {
            return Err(AuthError::MissingField("hotelName"));
        }
        if request.hotel_location.trim().is_empty() {
            return Err(AuthError::MissingField("hotelLocation"));
        }
        if request.room_number.trim().is_empty() {
            return Err(AuthError::MissingField("roomNumber"));
        }

        let guest_list = if request.guests.is_empty() {
            "No guests assigned yet.".to_string()
        } else {
            request
                .guests
                .iter()
                .map(|name| format!("- {name}"))
                .collect::<Vec<_>>()
                .join("\n")
        };

        let message = OutboundEmail {
            to: request.email.trim().to_string(),
            subject: format!("Room Allocation Details - Room {}", request.room_number),
            body: format!(
                "Hello,\n\nHere are the details for your room allocation:\n\nRoom #{} ({})\nHotel: {}\nLocation: {}\nGuests:\n{guest_list}\n\nPlease save this email for your reference during check-in.\n",
                request.room_number, request.room_type, request.hotel_name, request.hotel_location
            ),
        };
        self.mailer.send(&message)?;

        info!(
            "event=room_details_email module=auth status=ok room={} email={}",
            request.room_number,
            mask_email(request.email.trim())
        );
        Ok(())
    }
}

fn normalize_email(email: &str) -> AuthResult<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return Err(AuthError::MissingField("email"));
    }
    Ok(normalized)
}

/// Derives a 6-digit numeric code from UUIDv4 randomness.
fn generate_code() -> String {
    let bytes = *Uuid::new_v4().as_bytes();
    let seed = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    (100_000 + seed % 900_000).to_string()
}
