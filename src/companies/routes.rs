use super::handlers;
use crate::common::error::method_not_allowed;
use axum::{routing::get, Router};

/// Creates the companies router
///
/// # Routes
/// - `GET /companies`, `POST /companies`
/// - `GET /companies/:code`, `PUT /companies/:code`, `DELETE /companies/:code`
pub fn companies_routes() -> Router {
    Router::new()
        .route(
            "/companies",
            get(handlers::list_companies).post(handlers::create_company)
                .fallback(method_not_allowed),
        )
        .route(
            "/companies/:code",
            get(handlers::get_company)
                .put(handlers::update_company)
                .delete(handlers::delete_company)
                .fallback(method_not_allowed),
        )
}
