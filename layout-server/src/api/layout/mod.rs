//! Layout API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/layout", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/",
            get(handler::list).post(handler::save).put(handler::update),
        )
        .route("/{name}", get(handler::get_by_name).delete(handler::delete))
}
