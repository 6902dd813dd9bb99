use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-player attendance summary across every recorded session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_id: Uuid,
    pub name: String,
    pub email: String,
    pub active: bool,
    pub sessions_present: u32,
    pub sessions_total: u32,
    pub attendance_percentage: u32,
}
