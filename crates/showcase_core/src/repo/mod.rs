//! Repository layer over the in-memory record store.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per entity.
//! - Keep collection locking details out of services.
//!
//! # Invariants
//! - Repositories only read or append; nothing is updated or removed.
//! - List filters never reorder results.

pub mod portfolio_repo;
pub mod property_repo;

/// Case-insensitive substring match used by list filters.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Returns the filter value when it constrains results.
///
/// Only an empty value or the exact `all` disables a filter; values are not
/// trimmed, so `" "` still has to match.
pub(crate) fn active_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty() && *value != "all")
}
