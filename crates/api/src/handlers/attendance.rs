use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use rollcall_core::{
    errors::RollcallError,
    models::attendance::{
        CreateSessionRequest, DeleteSessionResponse, PatchEntryRequest, ResolvedEntry,
        SessionResponse, UpdateSessionRequest,
    },
};
use rollcall_db::models::DbAttendanceSession;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Builds the caller-facing session view: the stored session plus its
/// entries with player display fields resolved at read time.
async fn resolve_session(
    state: &ApiState,
    session: DbAttendanceSession,
) -> Result<SessionResponse, AppError> {
    let entries =
        rollcall_db::repositories::attendance::get_entries_for_session(&state.db_pool, session.id)
            .await
            .map_err(RollcallError::Database)?;

    Ok(SessionResponse {
        id: session.id,
        session_date: session.session_date,
        notes: session.notes,
        created_at: session.created_at,
        entries: entries
            .into_iter()
            .map(|entry| ResolvedEntry {
                player_id: entry.player_id,
                name: entry.player_name,
                email: entry.player_email,
                present: entry.present,
                notes: entry.notes,
            })
            .collect(),
    })
}

#[axum::debug_handler]
pub async fn list_sessions(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<SessionResponse>>, AppError> {
    let db_sessions = rollcall_db::repositories::attendance::list_sessions(&state.db_pool)
        .await
        .map_err(RollcallError::Database)?;

    let mut sessions = Vec::with_capacity(db_sessions.len());
    for db_session in db_sessions {
        sessions.push(resolve_session(&state, db_session).await?);
    }

    Ok(Json(sessions))
}

#[axum::debug_handler]
pub async fn get_session(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let db_session =
        rollcall_db::repositories::attendance::get_session_by_id(&state.db_pool, id)
            .await
            .map_err(RollcallError::Database)?
            .ok_or_else(|| {
                RollcallError::NotFound(format!("Attendance record with ID {} not found", id))
            })?;

    Ok(Json(resolve_session(&state, db_session).await?))
}

/// Day-precision lookup: `:date` is a calendar date and matches any session
/// whose timestamp falls within that day.
#[axum::debug_handler]
pub async fn get_session_by_date(
    State(state): State<Arc<ApiState>>,
    Path(date): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    let date: NaiveDate = date
        .parse()
        .map_err(|_| RollcallError::Validation(format!("Invalid date: {}", date)))?;

    let db_session =
        rollcall_db::repositories::attendance::get_session_by_date(&state.db_pool, date)
            .await
            .map_err(RollcallError::Database)?
            .ok_or_else(|| {
                RollcallError::NotFound(format!(
                    "Attendance record not found for date {}",
                    date
                ))
            })?;

    Ok(Json(resolve_session(&state, db_session).await?))
}

/// Creates a session with every currently-active player marked absent.
/// There is no duplicate-date guard: a second call for the same date
/// creates a second, independent record. The body is optional; an empty
/// request defaults the date to now and the notes to empty.
#[axum::debug_handler]
pub async fn create_session(
    State(state): State<Arc<ApiState>>,
    payload: Option<Json<CreateSessionRequest>>,
) -> Result<Json<SessionResponse>, AppError> {
    let payload = payload.map(|Json(payload)| payload).unwrap_or_default();
    let session_date = payload.session_date.unwrap_or_else(Utc::now);
    let notes = payload.notes.unwrap_or_default();

    let db_session = rollcall_db::repositories::attendance::create_session(
        &state.db_pool,
        session_date,
        &notes,
    )
    .await
    .map_err(RollcallError::Database)?;

    Ok(Json(resolve_session(&state, db_session).await?))
}

/// Partial replace: any provided field overwrites the stored value, and a
/// provided `entries` list replaces the prior list wholesale.
#[axum::debug_handler]
pub async fn update_session(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSessionRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let db_session = rollcall_db::repositories::attendance::update_session(
        &state.db_pool,
        id,
        payload.session_date,
        payload.notes.as_deref(),
        payload.entries.as_deref(),
    )
    .await
    .map_err(RollcallError::Database)?
    .ok_or_else(|| {
        RollcallError::NotFound(format!("Attendance record with ID {} not found", id))
    })?;

    Ok(Json(resolve_session(&state, db_session).await?))
}

/// Updates a single player's presence/notes within a session, leaving the
/// other entries untouched.
#[axum::debug_handler]
pub async fn patch_entry(
    State(state): State<Arc<ApiState>>,
    Path((id, player_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<PatchEntryRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let db_session =
        rollcall_db::repositories::attendance::get_session_by_id(&state.db_pool, id)
            .await
            .map_err(RollcallError::Database)?
            .ok_or_else(|| {
                RollcallError::NotFound(format!("Attendance record with ID {} not found", id))
            })?;

    let patched = rollcall_db::repositories::attendance::patch_entry(
        &state.db_pool,
        id,
        player_id,
        payload.present,
        payload.notes.as_deref(),
    )
    .await
    .map_err(RollcallError::Database)?;

    if !patched {
        return Err(AppError(RollcallError::EntryNotFound(format!(
            "Player with ID {} not found in this attendance record",
            player_id
        ))));
    }

    Ok(Json(resolve_session(&state, db_session).await?))
}

/// Deletes the session and its entries. The player store is never touched.
#[axum::debug_handler]
pub async fn delete_session(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteSessionResponse>, AppError> {
    let deleted = rollcall_db::repositories::attendance::delete_session(&state.db_pool, id)
        .await
        .map_err(RollcallError::Database)?;

    if !deleted {
        return Err(AppError(RollcallError::NotFound(format!(
            "Attendance record with ID {} not found",
            id
        ))));
    }

    Ok(Json(DeleteSessionResponse {
        message: "Attendance record removed".to_string(),
    }))
}
