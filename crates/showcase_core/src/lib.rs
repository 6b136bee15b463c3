//! Core domain logic for the Showcase backend.
//! This crate is the single source of truth for record shapes and store
//! invariants shared by the property listings and portfolio generator.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::portfolio::{
    Blog, CreatePortfolioRequest, CreatePortfolioResponse, NewPortfolio, Portfolio,
    PortfolioItem, PortfolioListResponse, Service, Socials, Testimonial,
};
pub use model::property::{
    Coordinates, CreatePropertyRequest, CreatePropertyResponse, NewProperty, Property,
    PropertyListResponse, PropertyType,
};
pub use model::template::{template_catalog, Template, TemplateListResponse};
pub use model::validation::ValidationError;
pub use model::{Record, RecordId};
pub use repo::portfolio_repo::{
    InMemoryPortfolioRepository, PortfolioListQuery, PortfolioRepository,
};
pub use repo::property_repo::{InMemoryPropertyRepository, PropertyListQuery, PropertyRepository};
pub use service::portfolio_service::{PortfolioService, PORTFOLIO_CREATED_MESSAGE};
pub use service::property_service::{PropertyService, PROPERTY_CREATED_MESSAGE};
pub use service::{ServiceError, ServiceResult};
pub use store::{open_empty_store, open_store, RecordStore, StoreError, StoreResult};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
