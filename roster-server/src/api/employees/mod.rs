//! Employee API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router (canonical routes, enveloped responses)
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
