//! Portfolio repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide list/get/append APIs over the portfolio collection.
//! - Apply the professionals page filters (search, skill, location).

use super::{active_filter, contains_ignore_case};
use crate::model::portfolio::{NewPortfolio, Portfolio};
use crate::store::{Collection, RecordStore, StoreResult};

/// Query options for listing portfolios.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioListQuery {
    /// Case-insensitive substring matched against name or title.
    pub search: Option<String>,
    /// Case-insensitive substring matched against any skill.
    pub skill: Option<String>,
    /// Case-insensitive substring matched against location.
    pub location: Option<String>,
}

impl PortfolioListQuery {
    pub fn is_unfiltered(&self) -> bool {
        [&self.search, &self.skill, &self.location]
            .into_iter()
            .all(|value| active_filter(value.as_deref()).is_none())
    }

    /// Returns whether `portfolio` passes every active filter.
    pub fn matches(&self, portfolio: &Portfolio) -> bool {
        if let Some(search) = active_filter(self.search.as_deref()) {
            if !contains_ignore_case(&portfolio.name, search)
                && !contains_ignore_case(&portfolio.title, search)
            {
                return false;
            }
        }

        if let Some(skill) = active_filter(self.skill.as_deref()) {
            if !portfolio
                .skills
                .iter()
                .any(|candidate| contains_ignore_case(candidate, skill))
            {
                return false;
            }
        }

        if let Some(location) = active_filter(self.location.as_deref()) {
            if !contains_ignore_case(&portfolio.location, location) {
                return false;
            }
        }

        true
    }
}

/// Repository interface for portfolio operations.
pub trait PortfolioRepository {
    fn list_portfolios(&self, query: &PortfolioListQuery) -> StoreResult<Vec<Portfolio>>;
    fn get_portfolio(&self, id: &str) -> StoreResult<Option<Portfolio>>;
    fn create_portfolio(&self, input: NewPortfolio) -> StoreResult<Portfolio>;
}

/// Portfolio repository borrowing the process-wide store.
pub struct InMemoryPortfolioRepository<'store> {
    collection: &'store Collection<Portfolio>,
}

impl<'store> InMemoryPortfolioRepository<'store> {
    pub fn new(store: &'store RecordStore) -> Self {
        Self {
            collection: store.portfolios(),
        }
    }
}

impl PortfolioRepository for InMemoryPortfolioRepository<'_> {
    fn list_portfolios(&self, query: &PortfolioListQuery) -> StoreResult<Vec<Portfolio>> {
        if query.is_unfiltered() {
            return self.collection.list();
        }
        self.collection.filter(|portfolio| query.matches(portfolio))
    }

    fn get_portfolio(&self, id: &str) -> StoreResult<Option<Portfolio>> {
        self.collection.get_by_id(id)
    }

    fn create_portfolio(&self, input: NewPortfolio) -> StoreResult<Portfolio> {
        self.collection.append(Portfolio::create(input))
    }
}
