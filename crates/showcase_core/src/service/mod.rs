//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and repository calls into use-case level APIs.
//! - Keep HTTP layers decoupled from storage details.
//!
//! # Invariants
//! - Only two caller-facing failure kinds exist: validation and not-found.
//!   Store failures are internal faults.

use crate::model::validation::ValidationError;
use crate::model::RecordId;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod portfolio_service;
pub mod property_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error shared by property and portfolio use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Create request failed validation.
    Validation(ValidationError),
    /// No record with the requested id.
    NotFound {
        /// Entity label used in the message, e.g. `Property`.
        entity: &'static str,
        id: RecordId,
    },
    /// Record store failure.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { entity, .. } => write!(f, "{entity} not found"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
