//! `/api/portfolios` handlers.

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use showcase_core::{
    CreatePortfolioRequest, CreatePortfolioResponse, InMemoryPortfolioRepository, Portfolio,
    PortfolioListQuery, PortfolioListResponse, PortfolioService, PORTFOLIO_CREATED_MESSAGE,
};

/// Optional list filters, e.g. `?skill=cloud&location=seattle`.
#[derive(Debug, Default, Deserialize)]
pub(super) struct PortfolioListParams {
    search: Option<String>,
    skill: Option<String>,
    location: Option<String>,
}

impl From<PortfolioListParams> for PortfolioListQuery {
    fn from(value: PortfolioListParams) -> Self {
        Self {
            search: value.search,
            skill: value.skill,
            location: value.location,
        }
    }
}

pub(super) async fn list_portfolios(
    State(state): State<AppState>,
    Query(params): Query<PortfolioListParams>,
) -> Result<Json<PortfolioListResponse>, ApiError> {
    let service = PortfolioService::new(InMemoryPortfolioRepository::new(&state.store));
    let portfolios = service.list_portfolios(&params.into())?;
    Ok(Json(PortfolioListResponse { portfolios }))
}

pub(super) async fn get_portfolio(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Portfolio>, ApiError> {
    let service = PortfolioService::new(InMemoryPortfolioRepository::new(&state.store));
    Ok(Json(service.get_portfolio(&id)?))
}

pub(super) async fn create_portfolio(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreatePortfolioRequest>,
) -> Result<(StatusCode, Json<CreatePortfolioResponse>), ApiError> {
    let service = PortfolioService::new(InMemoryPortfolioRepository::new(&state.store));
    let portfolio = service.create_portfolio(request)?;
    Ok((
        StatusCode::CREATED,
        Json(CreatePortfolioResponse {
            portfolio,
            message: PORTFOLIO_CREATED_MESSAGE.to_string(),
        }),
    ))
}
