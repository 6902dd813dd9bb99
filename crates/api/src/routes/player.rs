use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/players", get(handlers::player::list_players))
        .route("/api/players", post(handlers::player::create_player))
        .route("/api/players/stats", get(handlers::player::get_player_stats))
        .route("/api/players/:id", get(handlers::player::get_player))
        .route("/api/players/:id", put(handlers::player::update_player))
        .route("/api/players/:id", delete(handlers::player::delete_player))
}
