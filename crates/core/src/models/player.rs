use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a player. `name` and `email` are validated by the
/// handler so a missing field produces a validation error naming it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Partial update. Each field is applied only when present in the payload,
/// so `active: false` is distinguishable from an omitted `active`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlayerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePlayerResponse {
    pub message: String,
}
