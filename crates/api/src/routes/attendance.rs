use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/attendance", get(handlers::attendance::list_sessions))
        .route("/api/attendance", post(handlers::attendance::create_session))
        .route(
            "/api/attendance/date/:date",
            get(handlers::attendance::get_session_by_date),
        )
        .route("/api/attendance/:id", get(handlers::attendance::get_session))
        .route("/api/attendance/:id", put(handlers::attendance::update_session))
        .route(
            "/api/attendance/:id",
            delete(handlers::attendance::delete_session),
        )
        .route(
            "/api/attendance/:id/player/:player_id",
            patch(handlers::attendance::patch_entry),
        )
}
