//! Route table and HTTP layers

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{auth, health, products};
use crate::middleware::require_bearer;
use crate::state::AppState;

pub fn build_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    let product_routes = Router::new()
        .route(
            "/api/products",
            post(products::create_product).get(products::list_products),
        )
        .route(
            "/api/products/check",
            get(products::check_product)
                .put(products::update_product_at_fixed_path)
                .delete(products::delete_product_at_fixed_path),
        )
        .route(
            "/api/products/stats",
            get(products::product_stats)
                .put(products::update_product_at_fixed_path)
                .delete(products::delete_product_at_fixed_path),
        )
        .route(
            "/api/products/{id}",
            put(products::update_product).delete(products::delete_product),
        )
        .route_layer(from_fn_with_state(state.clone(), require_bearer));

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/api/test", get(health::api_status))
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login));

    Router::new()
        .merge(public_routes)
        .merge(product_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
