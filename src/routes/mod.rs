//! Router assembly.

mod assets;
mod cars;
mod common;

pub use assets::static_files;
pub use cars::car_routes;
pub use common::common_routes;

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: `/api` car routes, operational routes, then the
/// front-end bundle for everything else.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .nest("/api", car_routes(state.clone()))
        .merge(common_routes(state))
        .fallback_service(static_files(&config.static_dir))
        .layer(RequestBodyLimitLayer::new(config.body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
