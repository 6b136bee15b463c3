use axum::Json;
use serde::{Deserialize, Serialize};
use showcase_core::{template_catalog, TemplateListResponse};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

pub(super) async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: showcase_core::ping().to_string(),
    })
}

pub(super) async fn list_templates() -> Json<TemplateListResponse> {
    Json(TemplateListResponse {
        templates: template_catalog(),
    })
}
