use super::models::{CompaniesResponse, CompanyResponse, CreateCompanyInput, UpdateCompanyInput};
use super::services::CompaniesService;
use crate::common::{ApiError, AppState, StatusResponse};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

// ============================================================================
// Company CRUD Handlers
// ============================================================================

/// GET /companies - List companies as `{code, name}`
pub async fn list_companies(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let companies = CompaniesService::new(state.db.clone())
        .list_companies()
        .await?;

    Ok(Json(CompaniesResponse { companies }))
}

/// GET /companies/:code - Get a company with its invoices
pub async fn get_company(
    Extension(state): Extension<Arc<AppState>>,
    code: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(code) = code?;

    let company = CompaniesService::new(state.db.clone())
        .get_company(&code)
        .await?;

    Ok(Json(CompanyResponse { company }))
}

/// POST /companies - Create a company from `{code, name, description}`
pub async fn create_company(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<CreateCompanyInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload?;

    let company = CompaniesService::new(state.db.clone())
        .create_company(input)
        .await?;

    Ok((StatusCode::CREATED, Json(CompanyResponse { company })))
}

/// PUT /companies/:code - Replace `{name, description}`
pub async fn update_company(
    Extension(state): Extension<Arc<AppState>>,
    code: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateCompanyInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(code) = code?;
    let Json(input) = payload?;

    let company = CompaniesService::new(state.db.clone())
        .update_company(&code, input)
        .await?;

    Ok(Json(CompanyResponse { company }))
}

/// DELETE /companies/:code - Delete a company and, by cascade, its invoices
pub async fn delete_company(
    Extension(state): Extension<Arc<AppState>>,
    code: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(code) = code?;

    CompaniesService::new(state.db.clone())
        .delete_company(&code)
        .await?;

    Ok(Json(StatusResponse::deleted()))
}
