/**
 * Router Configuration
 *
 * Combines the API routes, the JSON 404 and 405 fallbacks and the response
 * layers into a single Axum router.
 *
 * # Layers
 *
 * Applied to every response, including the fallback:
 * 1. `Cache-Control: no-cache` so polling clients never see a cached list
 * 2. Permissive CORS for browser and desktop clients
 * 3. Request tracing
 */

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    let router = router
        .fallback(|| async { BackendError::handler(StatusCode::NOT_FOUND, "Not Found") })
        .method_not_allowed_fallback(|| async {
            BackendError::handler(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
        });

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer())
                .layer(SetResponseHeaderLayer::overriding(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("no-cache"),
                )),
        )
        .with_state(app_state)
}

/// Any origin; credentials are never allowed alongside a wildcard origin
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::OPTIONS,
            Method::POST,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers(Any)
}
