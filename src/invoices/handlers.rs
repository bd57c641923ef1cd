use super::models::{CreateInvoiceInput, InvoiceResponse, InvoicesResponse, UpdateInvoiceInput};
use super::services::InvoicesService;
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
// Invoice CRUD Handlers
// ============================================================================

/// GET /invoices - List invoices as `{id, comp_code}`
pub async fn list_invoices(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let invoices = InvoicesService::new(state.db.clone())
        .list_invoices()
        .await?;

    Ok(Json(InvoicesResponse { invoices }))
}

/// GET /invoices/:id - Get an invoice with its company
pub async fn get_invoice(
    Extension(state): Extension<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;

    let invoice = InvoicesService::new(state.db.clone())
        .get_invoice(id)
        .await?;

    Ok(Json(InvoiceResponse { invoice }))
}

/// POST /invoices - Create an invoice from `{comp_code, amt}`
pub async fn create_invoice(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<CreateInvoiceInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload?;

    let invoice = InvoicesService::new(state.db.clone())
        .create_invoice(input)
        .await?;

    Ok((StatusCode::CREATED, Json(InvoiceResponse { invoice })))
}

/// PUT /invoices/:id - Change the amount from `{amt}`
pub async fn update_invoice(
    Extension(state): Extension<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateInvoiceInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;

    let invoice = InvoicesService::new(state.db.clone())
        .update_invoice(id, input)
        .await?;

    Ok(Json(InvoiceResponse { invoice }))
}

/// DELETE /invoices/:id - Delete an invoice
pub async fn delete_invoice(
    Extension(state): Extension<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;

    InvoicesService::new(state.db.clone())
        .delete_invoice(id)
        .await?;

    Ok(Json(StatusResponse::deleted()))
}
