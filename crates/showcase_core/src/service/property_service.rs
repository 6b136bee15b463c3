//! Property use-case service.
//!
//! # Responsibility
//! - Provide list/get/create entry points for property listings.
//! - Turn create requests into stamped records via presence-only validation.
//!
//! # Invariants
//! - A rejected create request never touches the collection.
//! - Service layer remains storage-agnostic.

use super::{ServiceError, ServiceResult};
use crate::model::property::{CreatePropertyRequest, Property};
use crate::repo::property_repo::{PropertyListQuery, PropertyRepository};
use log::{info, warn};

const ENTITY: &str = "Property";

/// Confirmation message returned alongside a created property.
pub const PROPERTY_CREATED_MESSAGE: &str = "Property created successfully";

/// Use-case service wrapper for property operations.
pub struct PropertyService<R: PropertyRepository> {
    repo: R,
}

impl<R: PropertyRepository> PropertyService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists properties in insertion order, narrowed by `query`.
    pub fn list_properties(&self, query: &PropertyListQuery) -> ServiceResult<Vec<Property>> {
        Ok(self.repo.list_properties(query)?)
    }

    /// Gets one property by id.
    ///
    /// # Errors
    /// - `ServiceError::NotFound` when no property has `id`.
    pub fn get_property(&self, id: &str) -> ServiceResult<Property> {
        self.repo
            .get_property(id)?
            .ok_or_else(|| ServiceError::NotFound {
                entity: ENTITY,
                id: id.to_string(),
            })
    }

    /// Validates `request` and appends the resulting property.
    ///
    /// # Contract
    /// - Requires `name`, `type`, `location` and a non-zero `price`.
    /// - Returns the stored record with its assigned id and timestamps.
    pub fn create_property(&self, request: CreatePropertyRequest) -> ServiceResult<Property> {
        let input = request.validate().inspect_err(|err| {
            warn!(
                "event=property_create module=service status=rejected missing={} reason=\"{}\"",
                err.missing_fields().join(","),
                err
            );
        })?;

        let property = self.repo.create_property(input)?;
        info!(
            "event=property_create module=service status=ok id={} type={}",
            property.id, property.kind
        );
        Ok(property)
    }
}
