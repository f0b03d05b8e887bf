//! One-time-code repository contracts and SQLite implementation.
//!
//! # Invariants
//! - One pending code per e-mail; `put_otp` replaces any prior code.
//! - Callers normalize e-mails (trim + lowercase) before touching storage.

use crate::repo::{guard_schema, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Stored one-time code row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredOtp {
    pub code: String,
    /// Expiry in epoch milliseconds.
    pub expires_at_ms: i64,
}

/// Storage for pending verification codes keyed by lowercased e-mail.
pub trait OtpRepository {
    fn put_otp(&self, email: &str, code: &str, expires_at_ms: i64) -> RepoResult<()>;
    fn get_otp(&self, email: &str) -> RepoResult<Option<StoredOtp>>;
    fn delete_otp(&self, email: &str) -> RepoResult<()>;
}

/// SQLite-backed OTP repository.
pub struct SqliteOtpRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteOtpRepository<'conn> {
    /// Wraps a bootstrapped connection, refusing unmigrated databases.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        guard_schema(conn, "otps")?;
        Ok(Self { conn })
    }
}

impl OtpRepository for SqliteOtpRepository<'_> {
    fn put_otp(&self, email: &str, code: &str, expires_at_ms: i64) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO otps (email, code, expires_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(email) DO UPDATE SET
                code = excluded.code,
                expires_at = excluded.expires_at;",
            params![email, code, expires_at_ms],
        )?;
        Ok(())
    }

    fn get_otp(&self, email: &str) -> RepoResult<Option<StoredOtp>> {
        let row = self
            .conn
            .query_row(
                "SELECT code, expires_at FROM otps WHERE email = ?1;",
                [email],
                |row| {
                    Ok(StoredOtp {
                        code: row.get(0)?,
                        expires_at_ms: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    fn delete_otp(&self, email: &str) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM otps WHERE email = ?1;", [email])?;
        Ok(())
    }
}
