// src/app.rs
//! Router composition shared by the server binary and the HTTP tests

use axum::{
    http::{header, HeaderValue, Method},
    middleware, Extension, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::common::{ApiError, AppState};
use crate::{companies, invoices, logging_middleware};

/// Catch-all for unknown routes, rendered in the same envelope as every other error
async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .merge(companies::companies_routes())
        .merge(invoices::invoices_routes())
        .fallback(not_found)
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(Extension(Arc::new(state)))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_support::{insert_company, insert_invoice, memory_pool};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use sqlx::SqlitePool;
    use tower::ServiceExt;

    async fn setup() -> (Router, SqlitePool) {
        let pool = memory_pool().await;
        let router = build_router(AppState::new(pool.clone()), &[]);
        (router, pool)
    }

    async fn send(
        router: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_create_company_scenario() {
        let (router, _pool) = setup().await;

        let (status, body) = send(
            &router,
            "POST",
            "/companies",
            Some(json!({"code": "apple", "name": "Apple", "description": "Maker of iPhone"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({"company": {"code": "apple", "name": "Apple", "description": "Maker of iPhone"}})
        );
    }

    #[tokio::test]
    async fn test_create_company_without_body_is_bad_request() {
        let (router, _pool) = setup().await;

        let (status, body) = send(&router, "POST", "/companies", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["status"], 400);
    }

    #[tokio::test]
    async fn test_create_company_missing_description_is_bad_request() {
        let (router, _pool) = setup().await;

        let (status, _) = send(
            &router,
            "POST",
            "/companies",
            Some(json!({"code": "apple", "name": "Apple"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_companies_sorted_by_code() {
        let (router, pool) = setup().await;
        insert_company(&pool, "ibm", "IBM").await;
        insert_company(&pool, "apple", "Apple").await;

        let (status, body) = send(&router, "GET", "/companies", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"companies": [
                {"code": "apple", "name": "Apple"},
                {"code": "ibm", "name": "IBM"}
            ]})
        );
    }

    #[tokio::test]
    async fn test_get_company_includes_invoices() {
        let (router, pool) = setup().await;
        insert_company(&pool, "apple", "Apple").await;
        let id = insert_invoice(&pool, "apple", 100.0).await;

        let (status, body) = send(&router, "GET", "/companies/apple", None).await;

        assert_eq!(status, StatusCode::OK);
        let company = &body["company"];
        assert_eq!(company["code"], "apple");
        assert_eq!(company["description"], "Apple description");
        assert_eq!(company["invoices"].as_array().unwrap().len(), 1);
        assert_eq!(company["invoices"][0]["id"], id);
        assert_eq!(company["invoices"][0]["comp_code"], "apple");
        assert!(company["invoices"][0].get("company").is_none());
    }

    #[tokio::test]
    async fn test_get_missing_company_is_not_found() {
        let (router, _pool) = setup().await;

        let (status, body) = send(&router, "GET", "/companies/nope", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["status"], 404);
        assert!(body["error"]["message"].as_str().unwrap().contains("nope"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_company_code_is_json_bad_request() {
        let (router, _pool) = setup().await;

        let (status, body) = send(&router, "GET", "/companies/%FF", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["status"], 400);
        assert!(body["error"]["message"].is_string());
    }

    #[tokio::test]
    async fn test_unsupported_method_is_json_method_not_allowed() {
        let (router, pool) = setup().await;
        insert_company(&pool, "apple", "Apple").await;

        let (status, body) = send(&router, "POST", "/companies/apple", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"]["status"], 405);

        let (status, body) = send(&router, "PATCH", "/invoices", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"]["status"], 405);
    }

    #[tokio::test]
    async fn test_update_company_with_empty_body_is_bad_request() {
        let (router, pool) = setup().await;
        insert_company(&pool, "apple", "Apple").await;

        let (status, body) = send(&router, "PUT", "/companies/apple", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["status"], 400);
    }

    #[tokio::test]
    async fn test_update_company_with_empty_object_is_bad_request() {
        let (router, pool) = setup().await;
        insert_company(&pool, "apple", "Apple").await;

        let (status, _) = send(&router, "PUT", "/companies/apple", Some(json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_company() {
        let (router, pool) = setup().await;
        insert_company(&pool, "apple", "Apple").await;

        let (status, body) = send(
            &router,
            "PUT",
            "/companies/apple",
            Some(json!({"name": "Apple Inc.", "description": "Computers"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"company": {"code": "apple", "name": "Apple Inc.", "description": "Computers"}})
        );
    }

    #[tokio::test]
    async fn test_update_missing_company_is_not_found() {
        let (router, _pool) = setup().await;

        let (status, _) = send(
            &router,
            "PUT",
            "/companies/nope",
            Some(json!({"name": "Nope", "description": null})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_company() {
        let (router, pool) = setup().await;
        insert_company(&pool, "apple", "Apple").await;

        let (status, body) = send(&router, "DELETE", "/companies/apple", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "deleted"}));

        let (status, _) = send(&router, "DELETE", "/companies/apple", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_invoice_scenario() {
        let (router, pool) = setup().await;
        insert_company(&pool, "apple", "Apple").await;

        let (status, body) = send(
            &router,
            "POST",
            "/invoices",
            Some(json!({"comp_code": "apple", "amt": 200})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let invoice = &body["invoice"];
        assert!(invoice["id"].as_i64().is_some());
        assert_eq!(invoice["comp_code"], "apple");
        assert_eq!(invoice["amt"], 200.0);
        assert_eq!(invoice["paid"], false);
        assert_eq!(invoice["paid_date"], Value::Null);
        assert!(invoice["add_date"].is_string());
    }

    #[tokio::test]
    async fn test_create_invoice_for_unknown_company_is_bad_request() {
        let (router, _pool) = setup().await;

        let (status, body) = send(
            &router,
            "POST",
            "/invoices",
            Some(json!({"comp_code": "ghost", "amt": 10})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"].as_str().unwrap().contains("ghost"));
    }

    #[tokio::test]
    async fn test_create_invoice_without_body_is_bad_request() {
        let (router, _pool) = setup().await;

        let (status, _) = send(&router, "POST", "/invoices", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_invoices_sorted_by_id() {
        let (router, pool) = setup().await;
        insert_company(&pool, "ibm", "IBM").await;
        insert_company(&pool, "apple", "Apple").await;
        let first = insert_invoice(&pool, "ibm", 1.0).await;
        let second = insert_invoice(&pool, "apple", 2.0).await;

        let (status, body) = send(&router, "GET", "/invoices", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"invoices": [
                {"id": first, "comp_code": "ibm"},
                {"id": second, "comp_code": "apple"}
            ]})
        );
    }

    #[tokio::test]
    async fn test_get_invoice_includes_company() {
        let (router, pool) = setup().await;
        insert_company(&pool, "apple", "Apple").await;
        let id = insert_invoice(&pool, "apple", 300.0).await;

        let (status, body) = send(&router, "GET", &format!("/invoices/{}", id), None).await;

        assert_eq!(status, StatusCode::OK);
        let invoice = &body["invoice"];
        assert_eq!(invoice["id"], id);
        assert_eq!(invoice["amt"], 300.0);
        assert_eq!(
            invoice["company"],
            json!({"code": "apple", "name": "Apple", "description": "Apple description"})
        );
    }

    #[tokio::test]
    async fn test_get_missing_invoice_scenario() {
        let (router, _pool) = setup().await;

        let (status, body) = send(&router, "GET", "/invoices/9999", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["status"], 404);
        assert!(body["error"]["message"].as_str().unwrap().contains("9999"));
    }

    #[tokio::test]
    async fn test_non_numeric_invoice_id_is_bad_request() {
        let (router, _pool) = setup().await;

        let (status, body) = send(&router, "GET", "/invoices/abc", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["status"], 400);
    }

    #[tokio::test]
    async fn test_update_invoice() {
        let (router, pool) = setup().await;
        insert_company(&pool, "apple", "Apple").await;
        let id = insert_invoice(&pool, "apple", 100.0).await;

        let (status, body) = send(
            &router,
            "PUT",
            &format!("/invoices/{}", id),
            Some(json!({"amt": 500})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["invoice"]["amt"], 500.0);
        assert_eq!(body["invoice"]["comp_code"], "apple");
        assert_eq!(body["invoice"]["paid"], false);
    }

    #[tokio::test]
    async fn test_update_invoice_with_empty_body_is_bad_request() {
        let (router, pool) = setup().await;
        insert_company(&pool, "apple", "Apple").await;
        let id = insert_invoice(&pool, "apple", 100.0).await;

        let (status, _) = send(&router, "PUT", &format!("/invoices/{}", id), None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_invoice_above_max_amount_is_bad_request() {
        let (router, pool) = setup().await;
        insert_company(&pool, "apple", "Apple").await;
        let id = insert_invoice(&pool, "apple", 100.0).await;

        let (status, body) = send(
            &router,
            "PUT",
            &format!("/invoices/{}", id),
            Some(json!({"amt": 1e300})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"].as_str().unwrap().contains("amt"));
    }

    #[tokio::test]
    async fn test_update_missing_invoice_is_not_found() {
        let (router, _pool) = setup().await;

        let (status, _) = send(&router, "PUT", "/invoices/9999", Some(json!({"amt": 1}))).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_invoice() {
        let (router, pool) = setup().await;
        insert_company(&pool, "apple", "Apple").await;
        let id = insert_invoice(&pool, "apple", 100.0).await;
        let uri = format!("/invoices/{}", id);

        let (status, body) = send(&router, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "deleted"}));

        let (status, _) = send(&router, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_not_found() {
        let (router, _pool) = setup().await;

        let (status, body) = send(&router, "GET", "/nowhere", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": {"message": "Not Found", "status": 404}}));
    }
}
