use crate::models::{DbAttendanceEntry, DbAttendanceSession, DbEntryWithPlayer};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use eyre::Result;
use rollcall_core::models::attendance::AttendanceEntry;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Creates a session pre-populated with one absent entry per currently
/// active player. The roster snapshot is taken at call time; later roster
/// changes never re-synchronize existing sessions. There is no
/// duplicate-date guard: two calls for the same date produce two records.
pub async fn create_session(
    pool: &Pool<Postgres>,
    session_date: DateTime<Utc>,
    notes: &str,
) -> Result<DbAttendanceSession> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating attendance session: id={}, date={}", id, session_date);

    let active_players = super::player::list_active_players(pool).await?;

    let mut tx = pool.begin().await?;

    let session = sqlx::query_as::<_, DbAttendanceSession>(
        r#"
        INSERT INTO attendance_sessions (id, session_date, notes, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, session_date, notes, created_at
        "#,
    )
    .bind(id)
    .bind(session_date)
    .bind(notes)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    for (position, player) in active_players.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO attendance_entries (session_id, player_id, present, notes, position)
            VALUES ($1, $2, FALSE, '', $3)
            "#,
        )
        .bind(id)
        .bind(player.id)
        .bind(position as i32)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::debug!(
        "Attendance session created: id={}, entries={}",
        id,
        active_players.len()
    );
    Ok(session)
}

pub async fn list_sessions(pool: &Pool<Postgres>) -> Result<Vec<DbAttendanceSession>> {
    let sessions = sqlx::query_as::<_, DbAttendanceSession>(
        r#"
        SELECT id, session_date, notes, created_at
        FROM attendance_sessions
        ORDER BY session_date DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(sessions)
}

pub async fn get_session_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAttendanceSession>> {
    tracing::debug!("Getting attendance session by id: {}", id);

    let session = sqlx::query_as::<_, DbAttendanceSession>(
        r#"
        SELECT id, session_date, notes, created_at
        FROM attendance_sessions
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(session)
}

/// The half-open UTC window `[date 00:00, date+1day)` used for day-precision
/// session lookup.
pub fn day_window(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = date.and_time(NaiveTime::MIN).and_utc();
    (start, start + Duration::days(1))
}

/// Day-precision lookup: matches a session whose `session_date` falls inside
/// the day's window. The earliest-created match wins when the same day holds
/// more than one session.
pub async fn get_session_by_date(
    pool: &Pool<Postgres>,
    date: NaiveDate,
) -> Result<Option<DbAttendanceSession>> {
    let (start, end) = day_window(date);

    tracing::debug!("Getting attendance session for window [{}, {})", start, end);

    let session = sqlx::query_as::<_, DbAttendanceSession>(
        r#"
        SELECT id, session_date, notes, created_at
        FROM attendance_sessions
        WHERE session_date >= $1 AND session_date < $2
        ORDER BY created_at ASC
        LIMIT 1
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_optional(pool)
    .await?;

    Ok(session)
}

/// Entries in stored order with the referenced player's display fields
/// resolved. Dangling references come back with NULL name/email.
pub async fn get_entries_for_session(
    pool: &Pool<Postgres>,
    session_id: Uuid,
) -> Result<Vec<DbEntryWithPlayer>> {
    let entries = sqlx::query_as::<_, DbEntryWithPlayer>(
        r#"
        SELECT e.session_id, e.player_id, e.present, e.notes, e.position,
               p.name AS player_name, p.email AS player_email
        FROM attendance_entries e
        LEFT JOIN players p ON p.id = e.player_id
        WHERE e.session_id = $1
        ORDER BY e.position ASC
        "#,
    )
    .bind(session_id)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

/// Every entry row across all sessions, for the statistics scan.
pub async fn list_all_entries(pool: &Pool<Postgres>) -> Result<Vec<DbAttendanceEntry>> {
    let entries = sqlx::query_as::<_, DbAttendanceEntry>(
        r#"
        SELECT session_id, player_id, present, notes, position
        FROM attendance_entries
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

/// Partial replace of a session. Provided fields overwrite stored values;
/// a provided `entries` list replaces the prior list wholesale, dropping
/// any player it omits. Runs in a transaction so a failure leaves the
/// previous state untouched.
pub async fn update_session(
    pool: &Pool<Postgres>,
    id: Uuid,
    session_date: Option<DateTime<Utc>>,
    notes: Option<&str>,
    entries: Option<&[AttendanceEntry]>,
) -> Result<Option<DbAttendanceSession>> {
    let Some(session) = get_session_by_id(pool, id).await? else {
        return Ok(None);
    };

    let session_date = session_date.unwrap_or(session.session_date);
    let notes = notes.unwrap_or(&session.notes);

    let mut tx = pool.begin().await?;

    let updated_session = sqlx::query_as::<_, DbAttendanceSession>(
        r#"
        UPDATE attendance_sessions
        SET session_date = $2, notes = $3
        WHERE id = $1
        RETURNING id, session_date, notes, created_at
        "#,
    )
    .bind(id)
    .bind(session_date)
    .bind(notes)
    .fetch_one(&mut *tx)
    .await?;

    if let Some(entries) = entries {
        sqlx::query(
            r#"
            DELETE FROM attendance_entries
            WHERE session_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        for (position, entry) in entries.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO attendance_entries (session_id, player_id, present, notes, position)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(id)
            .bind(entry.player_id)
            .bind(entry.present)
            .bind(&entry.notes)
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;

    Ok(Some(updated_session))
}

/// Updates one player's entry within a session, leaving the rest alone.
/// Returns false when the session holds no entry for that player.
pub async fn patch_entry(
    pool: &Pool<Postgres>,
    session_id: Uuid,
    player_id: Uuid,
    present: Option<bool>,
    notes: Option<&str>,
) -> Result<bool> {
    tracing::debug!(
        "Patching entry: session_id={}, player_id={}",
        session_id,
        player_id
    );

    let result = sqlx::query(
        r#"
        UPDATE attendance_entries
        SET present = COALESCE($3, present), notes = COALESCE($4, notes)
        WHERE session_id = $1 AND player_id = $2
        "#,
    )
    .bind(session_id)
    .bind(player_id)
    .bind(present)
    .bind(notes)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Removes the session; its entries go with it. The player store is never
/// touched.
pub async fn delete_session(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    tracing::debug!("Deleting attendance session: id={}", id);

    let result = sqlx::query(
        r#"
        DELETE FROM attendance_sessions
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
