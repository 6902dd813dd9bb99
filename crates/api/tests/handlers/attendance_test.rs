use axum::Json;
use chrono::{NaiveDate, Utc};
use mockall::predicate;
use pretty_assertions::assert_eq;
use rollcall_core::{
    errors::RollcallError,
    models::attendance::{
        AttendanceEntry, CreateSessionRequest, DeleteSessionResponse, PatchEntryRequest,
        ResolvedEntry, SessionResponse, UpdateSessionRequest,
    },
};
use rollcall_db::models::{DbAttendanceSession, DbEntryWithPlayer};
use uuid::Uuid;

use crate::test_utils::{db_player, db_session, TestContext};
use rollcall_api::middleware::error_handling::AppError;

fn resolve(session: DbAttendanceSession, entries: Vec<DbEntryWithPlayer>) -> SessionResponse {
    SessionResponse {
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
    }
}

// Test wrappers that run the handler flow against the repository mocks
async fn test_create_session_wrapper(
    ctx: &mut TestContext,
    payload: Option<CreateSessionRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let payload = payload.unwrap_or_default();
    let session_date = payload.session_date.unwrap_or_else(Utc::now);
    let notes: &'static str =
        Box::leak(payload.notes.unwrap_or_default().into_boxed_str());

    let session = ctx.attendance_repo.create_session(session_date, notes).await?;
    let entries = ctx
        .attendance_repo
        .get_entries_for_session(session.id)
        .await?;

    Ok(Json(resolve(session, entries)))
}

async fn test_get_session_by_date_wrapper(
    ctx: &mut TestContext,
    raw_date: &str,
) -> Result<Json<SessionResponse>, AppError> {
    let date: NaiveDate = raw_date
        .parse()
        .map_err(|_| RollcallError::Validation(format!("Invalid date: {}", raw_date)))?;

    let session = ctx
        .attendance_repo
        .get_session_by_date(date)
        .await?
        .ok_or_else(|| {
            RollcallError::NotFound(format!("Attendance record not found for date {}", date))
        })?;

    let entries = ctx
        .attendance_repo
        .get_entries_for_session(session.id)
        .await?;

    Ok(Json(resolve(session, entries)))
}

async fn test_update_session_wrapper(
    ctx: &mut TestContext,
    id: Uuid,
    payload: UpdateSessionRequest,
) -> Result<Json<SessionResponse>, AppError> {
    let notes: Option<&'static str> = payload
        .notes
        .map(|notes| &*Box::leak(notes.into_boxed_str()));

    let session = ctx
        .attendance_repo
        .update_session(id, payload.session_date, notes, payload.entries)
        .await?
        .ok_or_else(|| {
            RollcallError::NotFound(format!("Attendance record with ID {} not found", id))
        })?;

    let entries = ctx
        .attendance_repo
        .get_entries_for_session(session.id)
        .await?;

    Ok(Json(resolve(session, entries)))
}

async fn test_get_session_wrapper(
    ctx: &mut TestContext,
    id: Uuid,
) -> Result<Json<SessionResponse>, AppError> {
    let session = ctx
        .attendance_repo
        .get_session_by_id(id)
        .await?
        .ok_or_else(|| {
            RollcallError::NotFound(format!("Attendance record with ID {} not found", id))
        })?;

    let entries = ctx
        .attendance_repo
        .get_entries_for_session(session.id)
        .await?;

    Ok(Json(resolve(session, entries)))
}

async fn test_delete_session_wrapper(
    ctx: &mut TestContext,
    id: Uuid,
) -> Result<Json<DeleteSessionResponse>, AppError> {
    let deleted = ctx.attendance_repo.delete_session(id).await?;

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

async fn test_patch_entry_wrapper(
    ctx: &mut TestContext,
    id: Uuid,
    player_id: Uuid,
    payload: PatchEntryRequest,
) -> Result<Json<SessionResponse>, AppError> {
    let session = ctx
        .attendance_repo
        .get_session_by_id(id)
        .await?
        .ok_or_else(|| {
            RollcallError::NotFound(format!("Attendance record with ID {} not found", id))
        })?;

    let notes: Option<&'static str> = payload
        .notes
        .map(|notes| &*Box::leak(notes.into_boxed_str()));

    let patched = ctx
        .attendance_repo
        .patch_entry(id, player_id, payload.present, notes)
        .await?;

    if !patched {
        return Err(AppError(RollcallError::EntryNotFound(format!(
            "Player with ID {} not found in this attendance record",
            player_id
        ))));
    }

    let entries = ctx
        .attendance_repo
        .get_entries_for_session(session.id)
        .await?;

    Ok(Json(resolve(session, entries)))
}

fn entry_row(
    session_id: Uuid,
    player: &rollcall_db::models::DbPlayer,
    present: bool,
    position: i32,
) -> DbEntryWithPlayer {
    DbEntryWithPlayer {
        session_id,
        player_id: player.id,
        present,
        notes: String::new(),
        position,
        player_name: Some(player.name.clone()),
        player_email: Some(player.email.clone()),
    }
}

#[tokio::test]
async fn test_create_session_defaults_active_roster_to_absent() {
    let mut ctx = TestContext::new();
    let alice = db_player("Alice", true);
    let ben = db_player("Ben", true);
    let session = db_session();
    let session_id = session.id;

    ctx.attendance_repo
        .expect_create_session()
        .withf(|_, notes| notes.is_empty())
        .times(1)
        .returning(move |_, _| Ok(session.clone()));

    // The freshly created record lists every active player, all absent
    let rows = vec![
        entry_row(session_id, &alice, false, 0),
        entry_row(session_id, &ben, false, 1),
    ];
    ctx.attendance_repo
        .expect_get_entries_for_session()
        .with(predicate::eq(session_id))
        .times(1)
        .returning(move |_| Ok(rows.clone()));

    let result = test_create_session_wrapper(&mut ctx, Some(CreateSessionRequest::default()))
        .await
        .unwrap();

    assert_eq!(result.0.entries.len(), 2);
    assert!(result.0.entries.iter().all(|entry| !entry.present));
    assert_eq!(result.0.entries[0].player_id, alice.id);
    assert_eq!(result.0.entries[1].player_id, ben.id);
}

#[tokio::test]
async fn test_create_session_accepts_a_missing_body() {
    let mut ctx = TestContext::new();
    let session = db_session();
    let session_id = session.id;
    let before = Utc::now();

    // No payload at all: the date defaults to now and the notes to empty
    ctx.attendance_repo
        .expect_create_session()
        .withf(move |session_date, notes| *session_date >= before && notes.is_empty())
        .times(1)
        .returning(move |_, _| Ok(session.clone()));

    ctx.attendance_repo
        .expect_get_entries_for_session()
        .with(predicate::eq(session_id))
        .times(1)
        .returning(|_| Ok(Vec::new()));

    let result = test_create_session_wrapper(&mut ctx, None).await.unwrap();

    assert_eq!(result.0.id, session_id);
}

#[tokio::test]
async fn test_get_session_by_date_parses_day_precision() {
    let mut ctx = TestContext::new();
    let expected = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();

    ctx.attendance_repo
        .expect_get_session_by_date()
        .with(predicate::eq(expected))
        .times(1)
        .returning(|_| Ok(None));

    let result = test_get_session_by_date_wrapper(&mut ctx, "2024-01-10").await;

    assert!(matches!(
        result,
        Err(AppError(RollcallError::NotFound(_)))
    ));
}

#[tokio::test]
async fn test_get_session_by_date_rejects_garbage() {
    let mut ctx = TestContext::new();

    let result = test_get_session_by_date_wrapper(&mut ctx, "not-a-date").await;

    assert!(matches!(
        result,
        Err(AppError(RollcallError::Validation(_)))
    ));
}

#[tokio::test]
async fn test_update_session_passes_entries_through_wholesale() {
    let mut ctx = TestContext::new();
    let alice = db_player("Alice", true);
    let session = db_session();
    let session_id = session.id;
    let alice_id = alice.id;

    // A one-player payload replaces the whole list: the repository gets
    // exactly that list, no merge with whatever was stored before
    let new_entries = vec![AttendanceEntry {
        player_id: alice_id,
        present: true,
        notes: "made it".to_string(),
    }];
    let expected = new_entries.clone();

    ctx.attendance_repo
        .expect_update_session()
        .withf(move |id, session_date, notes, entries| {
            *id == session_id
                && session_date.is_none()
                && notes.is_none()
                && entries.as_deref() == Some(&expected[..])
        })
        .times(1)
        .returning(move |_, _, _, _| Ok(Some(session.clone())));

    let rows = vec![entry_row(session_id, &alice, true, 0)];
    ctx.attendance_repo
        .expect_get_entries_for_session()
        .with(predicate::eq(session_id))
        .times(1)
        .returning(move |_| Ok(rows.clone()));

    let payload = UpdateSessionRequest {
        entries: Some(new_entries),
        ..Default::default()
    };

    let result = test_update_session_wrapper(&mut ctx, session_id, payload)
        .await
        .unwrap();

    assert_eq!(result.0.entries.len(), 1);
    assert_eq!(result.0.entries[0].player_id, alice_id);
    assert!(result.0.entries[0].present);
}

#[tokio::test]
async fn test_update_session_not_found() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    ctx.attendance_repo
        .expect_update_session()
        .times(1)
        .returning(|_, _, _, _| Ok(None));

    let result =
        test_update_session_wrapper(&mut ctx, id, UpdateSessionRequest::default()).await;

    assert!(matches!(
        result,
        Err(AppError(RollcallError::NotFound(_)))
    ));
}

#[tokio::test]
async fn test_patch_entry_marks_player_present() {
    let mut ctx = TestContext::new();
    let alice = db_player("Alice", true);
    let session = db_session();
    let session_id = session.id;
    let alice_id = alice.id;

    ctx.attendance_repo
        .expect_get_session_by_id()
        .with(predicate::eq(session_id))
        .times(1)
        .returning(move |_| Ok(Some(session.clone())));

    ctx.attendance_repo
        .expect_patch_entry()
        .withf(move |id, player_id, present, notes| {
            *id == session_id
                && *player_id == alice_id
                && *present == Some(true)
                && notes.is_none()
        })
        .times(1)
        .returning(|_, _, _, _| Ok(true));

    let rows = vec![entry_row(session_id, &alice, true, 0)];
    ctx.attendance_repo
        .expect_get_entries_for_session()
        .with(predicate::eq(session_id))
        .times(1)
        .returning(move |_| Ok(rows.clone()));

    let payload = PatchEntryRequest {
        present: Some(true),
        notes: None,
    };

    let result = test_patch_entry_wrapper(&mut ctx, session_id, alice_id, payload)
        .await
        .unwrap();

    assert!(result.0.entries[0].present);
    assert_eq!(result.0.entries[0].name.as_deref(), Some("Alice"));
}

#[tokio::test]
async fn test_patch_entry_unknown_player_is_entry_not_found() {
    let mut ctx = TestContext::new();
    let session = db_session();
    let session_id = session.id;
    let stranger = Uuid::new_v4();

    ctx.attendance_repo
        .expect_get_session_by_id()
        .times(1)
        .returning(move |_| Ok(Some(session.clone())));

    // No entry references this player, so nothing is updated
    ctx.attendance_repo
        .expect_patch_entry()
        .times(1)
        .returning(|_, _, _, _| Ok(false));

    let payload = PatchEntryRequest {
        present: Some(true),
        notes: None,
    };

    let result = test_patch_entry_wrapper(&mut ctx, session_id, stranger, payload).await;

    assert!(matches!(
        result,
        Err(AppError(RollcallError::EntryNotFound(_)))
    ));
}

#[tokio::test]
async fn test_patch_entry_twice_with_same_value_is_idempotent() {
    let mut ctx = TestContext::new();
    let alice = db_player("Alice", true);
    let ben = db_player("Ben", true);
    let session = db_session();
    let session_id = session.id;
    let alice_id = alice.id;

    ctx.attendance_repo
        .expect_get_session_by_id()
        .with(predicate::eq(session_id))
        .times(2)
        .returning(move |_| Ok(Some(session.clone())));

    ctx.attendance_repo
        .expect_patch_entry()
        .withf(move |id, player_id, present, notes| {
            *id == session_id
                && *player_id == alice_id
                && *present == Some(true)
                && notes.is_none()
        })
        .times(2)
        .returning(|_, _, _, _| Ok(true));

    // Alice present, Ben untouched, both before and after the second patch
    let rows = vec![
        entry_row(session_id, &alice, true, 0),
        entry_row(session_id, &ben, false, 1),
    ];
    ctx.attendance_repo
        .expect_get_entries_for_session()
        .with(predicate::eq(session_id))
        .times(2)
        .returning(move |_| Ok(rows.clone()));

    let payload = PatchEntryRequest {
        present: Some(true),
        notes: None,
    };

    let first = test_patch_entry_wrapper(&mut ctx, session_id, alice_id, payload.clone())
        .await
        .unwrap();
    let second = test_patch_entry_wrapper(&mut ctx, session_id, alice_id, payload)
        .await
        .unwrap();

    assert_eq!(first.0, second.0);
    assert!(second.0.entries[0].present);
    assert!(!second.0.entries[1].present);
    assert_eq!(second.0.entries[1].player_id, ben.id);
}

#[tokio::test]
async fn test_get_session_resolves_deleted_player_as_dangling() {
    let mut ctx = TestContext::new();
    let session = db_session();
    let session_id = session.id;
    let departed = Uuid::new_v4();

    ctx.attendance_repo
        .expect_get_session_by_id()
        .with(predicate::eq(session_id))
        .times(1)
        .returning(move |_| Ok(Some(session.clone())));

    // The entry outlives its player: the row stays, display fields are NULL
    let rows = vec![DbEntryWithPlayer {
        session_id,
        player_id: departed,
        present: true,
        notes: String::new(),
        position: 0,
        player_name: None,
        player_email: None,
    }];
    ctx.attendance_repo
        .expect_get_entries_for_session()
        .with(predicate::eq(session_id))
        .times(1)
        .returning(move |_| Ok(rows.clone()));

    let result = test_get_session_wrapper(&mut ctx, session_id).await.unwrap();

    assert_eq!(result.0.entries.len(), 1);
    assert_eq!(result.0.entries[0].player_id, departed);
    assert_eq!(result.0.entries[0].name, None);
    assert_eq!(result.0.entries[0].email, None);
    assert!(result.0.entries[0].present);
}

#[tokio::test]
async fn test_delete_session_never_touches_the_player_store() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    // Only the session delete runs; the player mock carries no expectations,
    // so any roster call would fail the test
    ctx.attendance_repo
        .expect_delete_session()
        .with(predicate::eq(id))
        .times(1)
        .returning(|_| Ok(true));

    let result = test_delete_session_wrapper(&mut ctx, id).await.unwrap();

    assert_eq!(result.0.message, "Attendance record removed");
    ctx.player_repo.checkpoint();
}

#[tokio::test]
async fn test_delete_session_not_found() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    ctx.attendance_repo
        .expect_delete_session()
        .times(1)
        .returning(|_| Ok(false));

    let result = test_delete_session_wrapper(&mut ctx, id).await;

    assert!(matches!(
        result,
        Err(AppError(RollcallError::NotFound(_)))
    ));
}

#[tokio::test]
async fn test_patch_entry_missing_session_is_not_found() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    ctx.attendance_repo
        .expect_get_session_by_id()
        .times(1)
        .returning(|_| Ok(None));

    let payload = PatchEntryRequest::default();

    let result = test_patch_entry_wrapper(&mut ctx, id, Uuid::new_v4(), payload).await;

    assert!(matches!(
        result,
        Err(AppError(RollcallError::NotFound(_)))
    ));
}
