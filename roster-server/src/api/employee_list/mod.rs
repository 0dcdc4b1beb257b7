//! Employee List API Module
//!
//! Compatibility alias kept for the pre-built frontend: same semantics as
//! `/api/employees`, but responses are the bare record or array, and PUT
//! carries the record id in the request body.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee list alias router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employeelist", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/",
            get(handler::list)
                .post(handler::create)
                .put(handler::update),
        )
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
}
