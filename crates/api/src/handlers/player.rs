use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use rollcall_core::{
    errors::RollcallError,
    models::{
        player::{CreatePlayerRequest, DeletePlayerResponse, Player, UpdatePlayerRequest},
        stats::PlayerStats,
    },
    stats::{compute_player_stats, RecordedEntry},
};
use rollcall_db::models::DbPlayer;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

fn to_player(db_player: DbPlayer) -> Player {
    Player {
        id: db_player.id,
        name: db_player.name,
        email: db_player.email,
        phone: db_player.phone,
        active: db_player.active,
        created_at: db_player.created_at,
    }
}

#[axum::debug_handler]
pub async fn list_players(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Player>>, AppError> {
    let db_players = rollcall_db::repositories::player::list_players(&state.db_pool)
        .await
        .map_err(RollcallError::Database)?;

    Ok(Json(db_players.into_iter().map(to_player).collect()))
}

/// Attendance statistics for every player, active or not. Filtering by
/// active status is left to the caller.
#[axum::debug_handler]
pub async fn get_player_stats(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<PlayerStats>>, AppError> {
    let db_players = rollcall_db::repositories::player::list_players(&state.db_pool)
        .await
        .map_err(RollcallError::Database)?;

    let db_entries = rollcall_db::repositories::attendance::list_all_entries(&state.db_pool)
        .await
        .map_err(RollcallError::Database)?;

    let players: Vec<Player> = db_players.into_iter().map(to_player).collect();
    let entries: Vec<RecordedEntry> = db_entries
        .into_iter()
        .map(|entry| RecordedEntry {
            session_id: entry.session_id,
            player_id: entry.player_id,
            present: entry.present,
        })
        .collect();

    Ok(Json(compute_player_stats(&players, &entries)))
}

#[axum::debug_handler]
pub async fn get_player(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Player>, AppError> {
    let db_player = rollcall_db::repositories::player::get_player_by_id(&state.db_pool, id)
        .await
        .map_err(RollcallError::Database)?
        .ok_or_else(|| RollcallError::NotFound(format!("Player with ID {} not found", id)))?;

    Ok(Json(to_player(db_player)))
}

#[axum::debug_handler]
pub async fn create_player(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreatePlayerRequest>,
) -> Result<Json<Player>, AppError> {
    // Validate required fields up front so the error names the missing one
    let name = payload
        .name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| RollcallError::Validation("name is required".to_string()))?;
    let email = payload
        .email
        .as_deref()
        .filter(|email| !email.trim().is_empty())
        .ok_or_else(|| RollcallError::Validation("email is required".to_string()))?;

    let db_player = rollcall_db::repositories::player::create_player(
        &state.db_pool,
        name,
        email,
        payload.phone.as_deref(),
    )
    .await
    .map_err(RollcallError::Database)?;

    Ok(Json(to_player(db_player)))
}

#[axum::debug_handler]
pub async fn update_player(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePlayerRequest>,
) -> Result<Json<Player>, AppError> {
    let db_player = rollcall_db::repositories::player::update_player(
        &state.db_pool,
        id,
        payload.name.as_deref(),
        payload.email.as_deref(),
        payload.phone.as_deref(),
        payload.active,
    )
    .await
    .map_err(RollcallError::Database)?
    .ok_or_else(|| RollcallError::NotFound(format!("Player with ID {} not found", id)))?;

    Ok(Json(to_player(db_player)))
}

/// Deletes the player row only. Existing attendance entries keep their
/// reference to the removed player.
#[axum::debug_handler]
pub async fn delete_player(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletePlayerResponse>, AppError> {
    let deleted = rollcall_db::repositories::player::delete_player(&state.db_pool, id)
        .await
        .map_err(RollcallError::Database)?;

    if !deleted {
        return Err(AppError(RollcallError::NotFound(format!(
            "Player with ID {} not found",
            id
        ))));
    }

    Ok(Json(DeletePlayerResponse {
        message: "Player removed".to_string(),
    }))
}
