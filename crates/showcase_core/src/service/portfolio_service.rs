//! Portfolio use-case service.
//!
//! # Responsibility
//! - Provide list/get/create entry points for generated portfolios.
//!
//! # Invariants
//! - A rejected create request never touches the collection.
//! - `templateId` is stored as given; unknown templates are only logged.

use super::{ServiceError, ServiceResult};
use crate::model::portfolio::{CreatePortfolioRequest, Portfolio};
use crate::model::template::find_template;
use crate::repo::portfolio_repo::{PortfolioListQuery, PortfolioRepository};
use log::{info, warn};

const ENTITY: &str = "Portfolio";

/// Confirmation message returned alongside a created portfolio.
pub const PORTFOLIO_CREATED_MESSAGE: &str = "Portfolio created successfully";

/// Use-case service wrapper for portfolio operations.
pub struct PortfolioService<R: PortfolioRepository> {
    repo: R,
}

impl<R: PortfolioRepository> PortfolioService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists portfolios in insertion order, narrowed by `query`.
    pub fn list_portfolios(&self, query: &PortfolioListQuery) -> ServiceResult<Vec<Portfolio>> {
        Ok(self.repo.list_portfolios(query)?)
    }

    /// Gets one portfolio by id.
    ///
    /// # Errors
    /// - `ServiceError::NotFound` when no portfolio has `id`.
    pub fn get_portfolio(&self, id: &str) -> ServiceResult<Portfolio> {
        self.repo
            .get_portfolio(id)?
            .ok_or_else(|| ServiceError::NotFound {
                entity: ENTITY,
                id: id.to_string(),
            })
    }

    /// Validates `request` and appends the resulting portfolio.
    ///
    /// # Contract
    /// - Requires `name`, `title` and `email`; nothing else is checked.
    /// - Omitted list sections are stored as empty lists.
    pub fn create_portfolio(&self, request: CreatePortfolioRequest) -> ServiceResult<Portfolio> {
        let input = request.validate().inspect_err(|err| {
            warn!(
                "event=portfolio_create module=service status=rejected missing={}",
                err.missing_fields().join(",")
            );
        })?;

        if find_template(&input.template_id).is_none() {
            warn!(
                "event=portfolio_create module=service status=unknown_template template_id={}",
                input.template_id
            );
        }

        let portfolio = self.repo.create_portfolio(input)?;
        info!(
            "event=portfolio_create module=service status=ok id={} template_id={}",
            portfolio.id, portfolio.template_id
        );
        Ok(portfolio)
    }
}
