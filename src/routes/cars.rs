//! Car CRUD routes, mounted under `/api`.

use crate::handlers::cars::{api_not_found, create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn car_routes(state: AppState) -> Router {
    Router::new()
        .route("/cars", get(list).post(create))
        .route(
            "/cars/:id",
            get(read).put(update).delete(delete_handler),
        )
        .fallback(api_not_found)
        .with_state(state)
}
