use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbPlayer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAttendanceSession {
    pub id: Uuid,
    pub session_date: DateTime<Utc>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAttendanceEntry {
    pub session_id: Uuid,
    pub player_id: Uuid,
    pub present: bool,
    pub notes: String,
    pub position: i32,
}

/// Entry row joined with the referenced player's display fields. The player
/// columns come from a LEFT JOIN and are NULL for dangling references.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEntryWithPlayer {
    pub session_id: Uuid,
    pub player_id: Uuid,
    pub present: bool,
    pub notes: String,
    pub position: i32,
    pub player_name: Option<String>,
    pub player_email: Option<String>,
}
