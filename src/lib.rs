use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod handlers;
pub mod health;
pub mod models;
pub mod seed;
pub mod shutdown;

use crate::config::Config;
use crate::health::HealthRegistry;
use crate::models::Product;

/// Shared application state. Everything is built before the listener binds
/// and is read-only afterwards, so clones just bump the Arcs.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<Config>,
    pub products: Arc<[Product]>,
    pub health: Arc<HealthRegistry>,
}

impl AppState {
    /// Generates the catalogue and starts with no registered health checks.
    pub fn new(config: Config) -> Self {
        Self::with_parts(config, seed::generate_catalog(), HealthRegistry::new())
    }

    pub(crate) fn with_parts(config: Config, products: Vec<Product>, health: HealthRegistry) -> Self {
        Self {
            config: Arc::new(config),
            products: products.into(),
            health: Arc::new(health),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        // ── Catalogue ───────────────────────────────────────────────────────
        .route("/products", get(handlers::products::list_products))
        // ── Health ──────────────────────────────────────────────────────────
        .route("/healthz/liveness", get(handlers::liveness));

    // ── API docs (development only) ─────────────────────────────────────────
    if state.config.environment.is_development() {
        router = router.merge(handlers::openapi::routes());
    }

    router
        .fallback(handlers::not_found)
        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use crate::health::{tests::Fixed, HealthStatus};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tower::ServiceExt;

    async fn get(router: Router, uri: &str) -> Response {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn state_with(health: HealthRegistry) -> AppState {
        AppState::with_parts(Config::default(), seed::generate_catalog(), health)
    }

    #[tokio::test]
    async fn products_returns_the_catalogue() {
        let router = build_router(AppState::new(Config::default()));
        let response = get(router, "/products").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), seed::PRODUCT_COUNT);
        for item in items {
            let id = item["productId"].as_str().unwrap();
            assert!(uuid::Uuid::parse_str(id).is_ok());
            assert!(!item["productName"].as_str().unwrap().is_empty());
            assert!(!item["manufacturer"].as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn products_is_identical_between_requests() {
        let router = build_router(AppState::new(Config::default()));
        let first = json_body(get(router.clone(), "/products").await).await;
        let second = json_body(get(router, "/products").await).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn liveness_ok_without_checks() {
        let router = build_router(AppState::new(Config::default()));
        let response = get(router, "/healthz/liveness").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "Healthy");
    }

    #[tokio::test]
    async fn liveness_ok_when_degraded() {
        let mut health = HealthRegistry::new();
        health.register(Fixed("cache", HealthStatus::Degraded));
        let response = get(build_router(state_with(health)), "/healthz/liveness").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "Degraded");
    }

    #[tokio::test]
    async fn liveness_500_when_unhealthy() {
        let mut health = HealthRegistry::new();
        health
            .register(Fixed("cache", HealthStatus::Degraded))
            .register(Fixed("disk", HealthStatus::Unhealthy));
        let response = get(build_router(state_with(health)), "/healthz/liveness").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["status"], "Unhealthy");
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let router = build_router(AppState::new(Config::default()));
        let response = get(router, "/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"], "not_found");
    }

    #[tokio::test]
    async fn api_docs_hidden_in_production() {
        let production = build_router(AppState::new(Config::default()));
        for uri in ["/openapi.json", "/swagger-ui/"] {
            assert_eq!(
                get(production.clone(), uri).await.status(),
                StatusCode::NOT_FOUND,
                "{uri} must not be served outside development"
            );
        }
    }

    #[tokio::test]
    async fn api_docs_served_in_development() {
        let config = Config {
            environment: Environment::Development,
            ..Config::default()
        };
        let development = build_router(AppState::new(config));

        let response = get(development.clone(), "/openapi.json").await;
        assert_eq!(response.status(), StatusCode::OK);
        let doc = json_body(response).await;
        assert!(doc["paths"]["/products"]["get"].is_object());
        assert!(doc["components"]["schemas"]["Product"].is_object());

        let ui = get(development, "/swagger-ui/").await;
        assert_eq!(ui.status(), StatusCode::OK);
    }
}
