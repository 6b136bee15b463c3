//! `/api/properties` handlers.

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use showcase_core::{
    CreatePropertyRequest, CreatePropertyResponse, InMemoryPropertyRepository, Property,
    PropertyListQuery, PropertyListResponse, PropertyService, PROPERTY_CREATED_MESSAGE,
};

/// Optional list filters, e.g. `?search=pune&type=Plot`.
#[derive(Debug, Default, Deserialize)]
pub(super) struct PropertyListParams {
    search: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl From<PropertyListParams> for PropertyListQuery {
    fn from(value: PropertyListParams) -> Self {
        Self {
            search: value.search,
            kind: value.kind,
        }
    }
}

pub(super) async fn list_properties(
    State(state): State<AppState>,
    Query(params): Query<PropertyListParams>,
) -> Result<Json<PropertyListResponse>, ApiError> {
    let service = PropertyService::new(InMemoryPropertyRepository::new(&state.store));
    let properties = service.list_properties(&params.into())?;
    Ok(Json(PropertyListResponse { properties }))
}

pub(super) async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Property>, ApiError> {
    let service = PropertyService::new(InMemoryPropertyRepository::new(&state.store));
    Ok(Json(service.get_property(&id)?))
}

pub(super) async fn create_property(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreatePropertyRequest>,
) -> Result<(StatusCode, Json<CreatePropertyResponse>), ApiError> {
    let service = PropertyService::new(InMemoryPropertyRepository::new(&state.store));
    let property = service.create_property(request)?;
    Ok((
        StatusCode::CREATED,
        Json(CreatePropertyResponse {
            property,
            message: PROPERTY_CREATED_MESSAGE.to_string(),
        }),
    ))
}
