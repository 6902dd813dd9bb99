//! Attendance-rate aggregation.
//!
//! Works over flat entry rows so callers load the data however they like:
//! a player's `sessions_total` counts every session holding an entry that
//! references them (present or not), and `sessions_present` counts the
//! subset marked present. Inactive players are included; filtering and
//! ordering are left to the caller.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::models::{player::Player, stats::PlayerStats};

/// One persisted presence line, flattened out of its session.
#[derive(Debug, Clone, Copy)]
pub struct RecordedEntry {
    pub session_id: Uuid,
    pub player_id: Uuid,
    pub present: bool,
}

/// Computes attendance statistics for every player.
///
/// The percentage is `round(100 * present / total)`, and `0` for a player
/// with no recorded sessions. Output order follows the input player order.
pub fn compute_player_stats(players: &[Player], entries: &[RecordedEntry]) -> Vec<PlayerStats> {
    // (present, total) per player id; only the first entry for a player
    // within a session counts, so a session contributes at most one to total
    let mut counts: HashMap<Uuid, (u32, u32)> = HashMap::new();
    let mut seen: HashSet<(Uuid, Uuid)> = HashSet::new();
    for entry in entries {
        if !seen.insert((entry.session_id, entry.player_id)) {
            continue;
        }
        let tally = counts.entry(entry.player_id).or_insert((0, 0));
        tally.1 += 1;
        if entry.present {
            tally.0 += 1;
        }
    }

    players
        .iter()
        .map(|player| {
            let (sessions_present, sessions_total) =
                counts.get(&player.id).copied().unwrap_or((0, 0));

            PlayerStats {
                player_id: player.id,
                name: player.name.clone(),
                email: player.email.clone(),
                active: player.active,
                sessions_present,
                sessions_total,
                attendance_percentage: attendance_percentage(sessions_present, sessions_total),
            }
        })
        .collect()
}

/// Whole-number attendance rate, `0` when no sessions were recorded.
pub fn attendance_percentage(present: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(present) * 100.0 / f64::from(total)).round() as u32
}
