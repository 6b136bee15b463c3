//! Property repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide list/get/append APIs over the property collection.
//! - Apply the listing page filters (free-text search and type).
//!
//! # Invariants
//! - `create_property` always stores a freshly stamped record.
//! - An unknown `type` filter matches nothing rather than failing.

use super::{active_filter, contains_ignore_case};
use crate::model::property::{NewProperty, Property, PropertyType};
use crate::store::{Collection, RecordStore, StoreResult};

/// Query options for listing properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyListQuery {
    /// Case-insensitive substring matched against name or location.
    pub search: Option<String>,
    /// Exact wire label (`Retail Store`) or compact spelling; `all` disables.
    pub kind: Option<String>,
}

impl PropertyListQuery {
    /// Returns whether the query has no active filter.
    pub fn is_unfiltered(&self) -> bool {
        active_filter(self.search.as_deref()).is_none()
            && active_filter(self.kind.as_deref()).is_none()
    }

    /// Returns whether `property` passes every active filter.
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(search) = active_filter(self.search.as_deref()) {
            if !contains_ignore_case(&property.name, search)
                && !contains_ignore_case(&property.location, search)
            {
                return false;
            }
        }

        if let Some(kind) = active_filter(self.kind.as_deref()) {
            if PropertyType::from_label(kind) != Some(property.kind) {
                return false;
            }
        }

        true
    }
}

/// Repository interface for property operations.
pub trait PropertyRepository {
    fn list_properties(&self, query: &PropertyListQuery) -> StoreResult<Vec<Property>>;
    fn get_property(&self, id: &str) -> StoreResult<Option<Property>>;
    fn create_property(&self, input: NewProperty) -> StoreResult<Property>;
}

/// Property repository borrowing the process-wide store.
pub struct InMemoryPropertyRepository<'store> {
    collection: &'store Collection<Property>,
}

impl<'store> InMemoryPropertyRepository<'store> {
    pub fn new(store: &'store RecordStore) -> Self {
        Self {
            collection: store.properties(),
        }
    }
}

impl PropertyRepository for InMemoryPropertyRepository<'_> {
    fn list_properties(&self, query: &PropertyListQuery) -> StoreResult<Vec<Property>> {
        if query.is_unfiltered() {
            return self.collection.list();
        }
        self.collection.filter(|property| query.matches(property))
    }

    fn get_property(&self, id: &str) -> StoreResult<Option<Property>> {
        self.collection.get_by_id(id)
    }

    fn create_property(&self, input: NewProperty) -> StoreResult<Property> {
        self.collection.append(Property::create(input))
    }
}
