use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSession {
    pub id: Uuid,
    pub session_date: DateTime<Utc>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// One player's line item within a session. Holds the player id only; the
/// query surface resolves display fields at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub player_id: Uuid,
    #[serde(default)]
    pub present: bool,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub session_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Partial replace. A field present in the payload fully overwrites the
/// stored value; `entries` replaces the whole list, it is not a merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSessionRequest {
    pub session_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub entries: Option<Vec<AttendanceEntry>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchEntryRequest {
    pub present: Option<bool>,
    pub notes: Option<String>,
}

/// Entry with the referenced player's display fields resolved. `name` and
/// `email` are `None` when the player has since been deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedEntry {
    pub player_id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub present: bool,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub session_date: DateTime<Utc>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub entries: Vec<ResolvedEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSessionResponse {
    pub message: String,
}
