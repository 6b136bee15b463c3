//! Domain model shared by the store, services and HTTP layer.
//!
//! # Responsibility
//! - Define the wire-compatible record shapes for properties and portfolios.
//! - Define create-request payloads and their presence-only validation.
//!
//! # Invariants
//! - Every stored record is identified by an opaque, collection-unique id.
//! - Records are only built through explicit constructors that stamp id and
//!   timestamps; request payloads never become records directly.

pub mod portfolio;
pub mod property;
pub mod template;
pub mod validation;

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

/// Opaque record identifier. Only uniqueness within a collection is promised.
pub type RecordId = String;

/// Common surface every stored record exposes to the record store.
pub trait Record: Clone {
    /// Stable id used for lookup and uniqueness checks.
    fn id(&self) -> &str;
}

/// Allocates a fresh record id.
pub(crate) fn new_record_id() -> RecordId {
    Uuid::new_v4().to_string()
}

/// Current UTC time used for `createdAt`/`updatedAt` stamping, truncated to
/// milliseconds.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
