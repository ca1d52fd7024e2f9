use std::{env, net::SocketAddr, sync::Arc, time::Duration};

#[macro_use]
extern crate lazy_static;

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    http::Method,
    routing::{get, post},
    BoxError, Router,
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::app::{envy::Envy, errors::DefaultApiError};

mod app;
mod auth;
mod budgets;
mod categories;
mod devices;
mod extraction;
mod transactions;
mod users;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub envy: Arc<Envy>,
    pub http: reqwest::Client,
}

pub fn router(state: AppState) -> Router {
    let max_upload_bytes = state.envy.max_upload_bytes;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([
            Method::POST,
            Method::GET,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ]);

    Router::new()
        .route("/", get(app::controller::get_root))
        // auth
        .route("/auth/register", post(auth::controller::register))
        .route("/auth/login", post(auth::controller::login))
        .route("/auth/refresh", post(auth::controller::refresh))
        .route("/auth/logout", post(auth::controller::logout))
        // users
        .route(
            "/users/me",
            get(users::controller::get_user_from_request)
                .patch(users::controller::edit_user_from_request),
        )
        // transactions
        .route(
            "/transactions",
            post(transactions::controller::create_transaction)
                .get(transactions::controller::get_transactions),
        )
        .route(
            "/transactions/bulk",
            post(transactions::controller::create_bulk_transactions),
        )
        .route(
            "/transactions/stats",
            get(transactions::controller::get_transaction_stats),
        )
        .route(
            "/transactions/extract",
            post(transactions::controller::extract_transactions),
        )
        .route(
            "/transactions/:id",
            get(transactions::controller::get_transaction_by_id)
                .patch(transactions::controller::edit_transaction_by_id)
                .put(transactions::controller::edit_transaction_by_id)
                .delete(transactions::controller::delete_transaction_by_id),
        )
        // categories
        .route(
            "/categories",
            post(categories::controller::create_category)
                .get(categories::controller::get_categories),
        )
        .route(
            "/categories/:id",
            get(categories::controller::get_category_by_id)
                .patch(categories::controller::edit_category_by_id)
                .put(categories::controller::edit_category_by_id)
                .delete(categories::controller::delete_category_by_id),
        )
        // budgets
        .route(
            "/budgets",
            post(budgets::controller::create_budget).get(budgets::controller::get_budgets),
        )
        .route(
            "/budgets/summary",
            get(budgets::controller::get_budgets_summary),
        )
        .route(
            "/budgets/:id",
            get(budgets::controller::get_budget_by_id)
                .patch(budgets::controller::edit_budget_by_id)
                .put(budgets::controller::edit_budget_by_id)
                .delete(budgets::controller::delete_budget_by_id),
        )
        // layers
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("finance_api=debug,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);

    let pool = PgPoolOptions::new()
        .max_connections(50)
        .idle_timeout(Some(Duration::from_secs(60)))
        .connect(&envy.database_url)
        .await
        .expect("failed to connect to database");

    tracing::info!("connected to db");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let state = AppState {
        pool,
        envy: Arc::new(envy),
        http: reqwest::Client::new(),
    };

    // app
    let app = router(state).layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|e: BoxError| async move {
                tracing::error!(%e);
                DefaultApiError::InternalServerError.value()
            }))
            .layer(BufferLayer::new(1024))
            .layer(RateLimitLayer::new(50, Duration::from_secs(1))),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("server error");
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::auth::jwt::util::sign_jwt;

    use super::*;

    fn test_router() -> Router {
        let envy = Envy::for_tests();
        let pool = PgPoolOptions::new()
            .connect_lazy(&envy.database_url)
            .unwrap();

        router(AppState {
            pool,
            envy: Arc::new(envy),
            http: reqwest::Client::new(),
        })
    }

    fn bearer() -> String {
        let token = sign_jwt("3f1c9a8e-2b1d-4e5f-8a7b-6c5d4e3f2a1b", "test-secret").unwrap();
        ["Bearer ", &token].concat()
    }

    async fn message(response: Response) -> String {
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        value["message"].as_str().unwrap_or_default().to_string()
    }

    #[tokio::test]
    async fn missing_bearer_is_bad_request() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/transactions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn invalid_token_is_unauthorized() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/categories")
                    .header(AUTHORIZATION, "Bearer not.a.jwt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(message(response).await, "Invalid token.");
    }

    #[tokio::test]
    async fn token_signed_with_other_secret_is_rejected() {
        let token = sign_jwt("someone", "another-secret").unwrap();

        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/budgets/summary")
                    .header(AUTHORIZATION, ["Bearer ", &token].concat())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_stats_period_is_bad_request() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/transactions/stats?period=hourly")
                    .header(AUTHORIZATION, bearer())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(message(response).await, "Invalid period.");
    }

    #[tokio::test]
    async fn malformed_sort_is_bad_request() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/transactions?sort_by=password_hash:asc")
                    .header(AUTHORIZATION, bearer())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(message(response).await, "Invalid sort field.");
    }

    #[tokio::test]
    async fn negative_amount_is_rejected() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/transactions")
                    .header(AUTHORIZATION, bearer())
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{ "category": "Food", "type": "expenditure", "amount": -10 }"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_bulk_is_rejected() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/transactions/bulk")
                    .header(AUTHORIZATION, bearer())
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from("[]"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(message(response).await, "Expected at least one transaction.");
    }

    #[tokio::test]
    async fn empty_edit_is_rejected() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method(Method::PATCH)
                    .uri("/transactions/3f1c9a8e-2b1d-4e5f-8a7b-6c5d4e3f2a1b")
                    .header(AUTHORIZATION, bearer())
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(message(response).await, "Received nothing to edit.");
    }

    #[tokio::test]
    async fn put_edits_like_patch() {
        for uri in [
            "/transactions/3f1c9a8e-2b1d-4e5f-8a7b-6c5d4e3f2a1b",
            "/categories/3f1c9a8e-2b1d-4e5f-8a7b-6c5d4e3f2a1b",
            "/budgets/3f1c9a8e-2b1d-4e5f-8a7b-6c5d4e3f2a1b",
        ] {
            let response = test_router()
                .oneshot(
                    Request::builder()
                        .method(Method::PUT)
                        .uri(uri)
                        .header(AUTHORIZATION, bearer())
                        .header(CONTENT_TYPE, "application/json")
                        .body(Body::from("{}"))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(message(response).await, "Received nothing to edit.");
        }
    }

    #[tokio::test]
    async fn oversized_page_is_bad_request() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/transactions?page=9223372036854775807&limit=100")
                    .header(AUTHORIZATION, bearer())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn extraction_requires_a_file() {
        let body = "--XBOUNDARY\r\n\
            Content-Disposition: form-data; name=\"note\"\r\n\r\n\
            hello\r\n\
            --XBOUNDARY--\r\n";

        let response = test_router()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/transactions/extract")
                    .header(AUTHORIZATION, bearer())
                    .header(CONTENT_TYPE, "multipart/form-data; boundary=XBOUNDARY")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(message(response).await, "File is required.");
    }

    #[tokio::test]
    async fn extraction_rejects_text_files() {
        let body = "--XBOUNDARY\r\n\
            Content-Disposition: form-data; name=\"file\"; filename=\"notes.txt\"\r\n\
            Content-Type: text/plain\r\n\r\n\
            just some notes\r\n\
            --XBOUNDARY--\r\n";

        let response = test_router()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/transactions/extract")
                    .header(AUTHORIZATION, bearer())
                    .header(CONTENT_TYPE, "multipart/form-data; boundary=XBOUNDARY")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
