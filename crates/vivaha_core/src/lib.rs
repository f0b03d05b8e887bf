//! Core domain logic for the Vivaha wedding planner.
//! This crate is the single source of truth for business invariants.

pub mod auth;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;
pub mod text;

pub use auth::{
    AlertKind, AuthError, AuthResult, AuthService, LogMailer, LoginAlertRequest, Mailer,
    MailerError, OtpVerification, OutboundEmail, RoomDetailsRequest, OTP_TTL_MS,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::budget::{BudgetItem, BudgetItemPatch};
pub use model::gallery::{GalleryCategory, GalleryItem};
pub use model::guest::{Guest, GuestPatch, GuestStatus};
pub use model::room::{Room, RoomPatch, RoomStatus, RoomType, SavedHotel};
pub use model::table::{Table, TablePatch, TableShape};
pub use model::task::{EventCategory, Task, TaskPatch, TaskPriority, TaskStatus};
pub use model::timeline::{TimelineItem, TimelineItemPatch};
pub use model::vendor::{Vendor, VendorPatch, VendorStatus};
pub use repo::otp_repo::{OtpRepository, SqliteOtpRepository, StoredOtp};
pub use repo::slot_repo::{SlotRepository, SqliteSlotRepository};
pub use repo::{RepoError, RepoResult};
pub use store::{BudgetSummary, RoomDraft, RoomOccupancy, StoreError, StoreResult, WeddingStore};
pub use text::refine_dictation;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
