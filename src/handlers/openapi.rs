use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    health::{CheckResult, HealthReport, HealthStatus},
    models::Product,
    AppState,
};

pub const DOCUMENT_PATH: &str = "/openapi.json";
pub const UI_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::products::list_products, crate::handlers::liveness),
    components(schemas(Product, HealthReport, HealthStatus, CheckResult)),
    tags(
        (name = "Products", description = "Generated product catalogue"),
        (name = "Health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

/// Interactive docs plus the raw document, mounted in development only.
pub fn routes() -> Router<AppState> {
    SwaggerUi::new(UI_PATH)
        .url(DOCUMENT_PATH, ApiDoc::openapi())
        .into()
}
