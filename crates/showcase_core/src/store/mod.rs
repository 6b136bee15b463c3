//! Process-wide in-memory record store.
//!
//! # Responsibility
//! - Own the property and portfolio collections for the process lifetime.
//! - Seed fixture records at startup.
//!
//! # Invariants
//! - The two collections are independent; ids are unique per collection.
//! - Nothing is persisted; a restart resets to the fixture seed.

use crate::model::portfolio::Portfolio;
use crate::model::property::Property;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

mod collection;
pub mod seed;

pub use collection::Collection;

pub const PROPERTIES: &str = "properties";
pub const PORTFOLIOS: &str = "portfolios";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    DuplicateId {
        collection: &'static str,
        id: String,
    },
    /// A writer panicked while holding the collection lock.
    LockPoisoned(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId { collection, id } => {
                write!(f, "duplicate id `{id}` in {collection}")
            }
            Self::LockPoisoned(collection) => write!(f, "{collection} lock poisoned"),
        }
    }
}

impl Error for StoreError {}

/// Owner of both record collections.
#[derive(Debug)]
pub struct RecordStore {
    properties: Collection<Property>,
    portfolios: Collection<Portfolio>,
}

impl RecordStore {
    pub fn properties(&self) -> &Collection<Property> {
        &self.properties
    }

    pub fn portfolios(&self) -> &Collection<Portfolio> {
        &self.portfolios
    }
}

/// Opens a store pre-populated with the fixture seed.
///
/// # Side effects
/// - Emits a `store_open` logging event with the seeded record counts.
pub fn open_store() -> StoreResult<RecordStore> {
    let started_at = Instant::now();
    let seeded_at = crate::model::now();

    let store = seed::seed_properties(seeded_at)
        .and_then(|properties| {
            let portfolios = seed::seed_portfolios(seeded_at)?;
            Ok(RecordStore {
                properties,
                portfolios,
            })
        })
        .inspect_err(|err| {
            error!(
                "event=store_open module=store status=error mode=seeded error={}",
                err
            );
        })?;

    info!(
        "event=store_open module=store status=ok mode=seeded properties={} portfolios={} duration_ms={}",
        store.properties.len()?,
        store.portfolios.len()?,
        started_at.elapsed().as_millis()
    );
    Ok(store)
}

/// Opens a store with both collections empty.
pub fn open_empty_store() -> RecordStore {
    info!("event=store_open module=store status=ok mode=empty");
    RecordStore {
        properties: Collection::new(PROPERTIES),
        portfolios: Collection::new(PORTFOLIOS),
    }
}
