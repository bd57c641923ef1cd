use super::handlers;
use crate::common::error::method_not_allowed;
use axum::{routing::get, Router};

/// Creates the invoices router
///
/// # Routes
/// - `GET /invoices`, `POST /invoices`
/// - `GET /invoices/:id`, `PUT /invoices/:id`, `DELETE /invoices/:id`
pub fn invoices_routes() -> Router {
    Router::new()
        .route(
            "/invoices",
            get(handlers::list_invoices)
                .post(handlers::create_invoice)
                .fallback(method_not_allowed),
        )
        .route(
            "/invoices/:id",
            get(handlers::get_invoice)
                .put(handlers::update_invoice)
                .delete(handlers::delete_invoice)
                .fallback(method_not_allowed),
        )
}
