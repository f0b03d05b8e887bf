use std::cell::RefCell;
use vivaha_core::db::open_db_in_memory;
use vivaha_core::{
    AlertKind, AuthError, AuthService, LoginAlertRequest, Mailer, MailerError, OtpRepository,
    OtpVerification, OutboundEmail, RoomDetailsRequest, SqliteOtpRepository, OTP_TTL_MS,
};

/// Captures outgoing mail for assertions.
#[derive(Default)]
struct RecordingMailer {
    sent: RefCell<Vec<OutboundEmail>>,
}

impl Mailer for RecordingMailer {
    fn send(&self, message: &OutboundEmail) -> Result<(), MailerError> {
        self.sent.borrow_mut().push(message.clone());
        Ok(())
    }
}

/// Always-failing transport.
struct DeadMailer;

impl Mailer for DeadMailer {
    fn send(&self, _message: &OutboundEmail) -> Result<(), MailerError> {
        Err(MailerError::Transport("connection refused".to_string()))
    }
}

const NOW_MS: i64 = 1_724_400_000_000;

fn stored_code(conn: &rusqlite::Connection, email: &str) -> Option<String> {
    let repo = SqliteOtpRepository::try_new(conn).unwrap();
    repo.get_otp(email).unwrap().map(|otp| otp.code)
}

#[test]
fn otp_is_single_use_and_survives_wrong_guesses() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOtpRepository::try_new(&conn).unwrap();
    let service = AuthService::new(repo, RecordingMailer::default());

    service.request_otp("a@b.com", NOW_MS).unwrap();
    let code = stored_code(&conn, "a@b.com").expect("code should be stored");

    // A wrong guess is rejected but keeps the code.
    let wrong = if code == "000000" { "111111" } else { "000000" };
    let outcome = service.verify_otp("a@b.com", wrong, NOW_MS).unwrap();
    assert_eq!(outcome, OtpVerification::Mismatch);
    assert!(!outcome.is_success());
    assert_eq!(stored_code(&conn, "a@b.com"), Some(code.clone()));

    // The right code verifies and consumes the entry.
    let outcome = service.verify_otp("a@b.com", &code, NOW_MS).unwrap();
    assert_eq!(outcome, OtpVerification::Verified);
    assert!(stored_code(&conn, "a@b.com").is_none());

    // Replaying the same code finds nothing.
    let outcome = service.verify_otp("a@b.com", &code, NOW_MS).unwrap();
    assert_eq!(outcome, OtpVerification::NoOtpFound);
    assert_eq!(outcome.message(), "No OTP found for this email");
}

#[test]
fn expired_codes_are_deleted_on_discovery() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOtpRepository::try_new(&conn).unwrap();
    let service = AuthService::new(repo, RecordingMailer::default());

    service.request_otp("a@b.com", NOW_MS).unwrap();
    let code = stored_code(&conn, "a@b.com").unwrap();

    let late = NOW_MS + OTP_TTL_MS + 1;
    let outcome = service.verify_otp("a@b.com", &code, late).unwrap();
    assert_eq!(outcome, OtpVerification::Expired);
    assert!(stored_code(&conn, "a@b.com").is_none());
}

#[test]
fn emails_are_normalized_and_a_new_request_replaces_the_code() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOtpRepository::try_new(&conn).unwrap();
    let mailer = RecordingMailer::default();
    let service = AuthService::new(repo, mailer);

    service.request_otp("  A@B.com ", NOW_MS).unwrap();
    let first = stored_code(&conn, "a@b.com").unwrap();

    service.request_otp("a@b.COM", NOW_MS).unwrap();
    let second = stored_code(&conn, "a@b.com").unwrap();

    // Only the latest code verifies (collision between two random codes is
    // possible but vanishingly unlikely to matter here).
    let outcome = service.verify_otp("A@b.com", &second, NOW_MS).unwrap();
    assert_eq!(outcome, OtpVerification::Verified);
    let _ = first;
}

#[test]
fn verification_email_carries_the_code() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOtpRepository::try_new(&conn).unwrap();
    let service = AuthService::new(repo, RecordingMailer::default());

    service.request_otp("a@b.com", NOW_MS).unwrap();
    let code = stored_code(&conn, "a@b.com").unwrap();

    let sent = service.mailer().sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "a@b.com");
    assert!(sent[0].body.contains(&code));
}

#[test]
fn transport_failure_keeps_the_stored_code() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOtpRepository::try_new(&conn).unwrap();
    let service = AuthService::new(repo, DeadMailer);

    let err = service.request_otp("a@b.com", NOW_MS).unwrap_err();
    assert!(matches!(err, AuthError::Mail(_)));
    // The code is in place; a later resubmission can still succeed.
    assert!(stored_code(&conn, "a@b.com").is_some());
}

#[test]
fn blank_email_is_rejected_before_any_side_effect() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOtpRepository::try_new(&conn).unwrap();
    let service = AuthService::new(repo, RecordingMailer::default());

    let err = service.request_otp("   ", NOW_MS).unwrap_err();
    assert!(matches!(err, AuthError::MissingField("email")));

    let err = service.verify_otp("a@b.com", "  ", NOW_MS).unwrap_err();
    assert!(matches!(err, AuthError::MissingField("otp")));
}

#[test]
fn login_alert_and_room_details_are_composed_and_sent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOtpRepository::try_new(&conn).unwrap();
    let service = AuthService::new(repo, RecordingMailer::default());

    service
        .send_login_alert(&LoginAlertRequest {
            to: "a@b.com".to_string(),
            display_name: Some("Asha".to_string()),
            device_info: "Firefox on Linux".to_string(),
            login_time: "2026-08-23 10:00".to_string(),
            kind: AlertKind::Signup,
        })
        .unwrap();

    service
        .send_room_details(&RoomDetailsRequest {
            email: "a@b.com".to_string(),
            hotel_name: "The Leela".to_string(),
            hotel_location: "https://maps.example/leela".to_string(),
            room_number: "101".to_string(),
            room_type: "Double".to_string(),
            guests: vec!["Ramesh Gupta".to_string(), "Suresh Patel".to_string()],
        })
        .unwrap();

    let sent = service.mailer().sent.borrow();
    assert_eq!(sent.len(), 2);
    assert!(sent[0].subject.contains("Welcome"));
    assert!(sent[0].body.contains("Asha"));
    assert!(sent[1].subject.contains("Room 101"));
    assert!(sent[1].body.contains("Ramesh Gupta"));
}

#[test]
fn room_details_requires_the_address_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOtpRepository::try_new(&conn).unwrap();
    let service = AuthService::new(repo, RecordingMailer::default());

    let request = RoomDetailsRequest {
        email: "a@b.com".to_string(),
        hotel_name: String::new(),
        hotel_location: "somewhere".to_string(),
        room_number: "101".to_string(),
        room_type: "Double".to_string(),
        guests: Vec::new(),
    };
    let err = service.send_room_details(&request).unwrap_err();
    assert!(matches!(err, AuthError::MissingField("hotelName")));
}
