use crate::models::DbPlayer;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_player(
    pool: &Pool<Postgres>,
    name: &str,
    email: &str,
    phone: Option<&str>,
) -> Result<DbPlayer> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating player: id={}, name={}", id, name);

    let player = sqlx::query_as::<_, DbPlayer>(
        r#"
        INSERT INTO players (id, name, email, phone, active, created_at)
        VALUES ($1, $2, $3, $4, TRUE, $5)
        RETURNING id, name, email, phone, active, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(player)
}

pub async fn list_players(pool: &Pool<Postgres>) -> Result<Vec<DbPlayer>> {
    let players = sqlx::query_as::<_, DbPlayer>(
        r#"
        SELECT id, name, email, phone, active, created_at
        FROM players
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(players)
}

pub async fn list_active_players(pool: &Pool<Postgres>) -> Result<Vec<DbPlayer>> {
    let players = sqlx::query_as::<_, DbPlayer>(
        r#"
        SELECT id, name, email, phone, active, created_at
        FROM players
        WHERE active = TRUE
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(players)
}

pub async fn get_player_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbPlayer>> {
    tracing::debug!("Getting player by id: {}", id);

    let player = sqlx::query_as::<_, DbPlayer>(
        r#"
        SELECT id, name, email, phone, active, created_at
        FROM players
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(player)
}

/// Applies only the fields provided; a `None` leaves the stored value alone,
/// so `active: Some(false)` deactivates while an omitted `active` does not.
pub async fn update_player(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: Option<&str>,
    email: Option<&str>,
    phone: Option<&str>,
    active: Option<bool>,
) -> Result<Option<DbPlayer>> {
    let Some(player) = get_player_by_id(pool, id).await? else {
        return Ok(None);
    };

    let name = name.unwrap_or(&player.name);
    let email = email.unwrap_or(&player.email);
    let phone = phone.or(player.phone.as_deref());
    let active = active.unwrap_or(player.active);

    let updated_player = sqlx::query_as::<_, DbPlayer>(
        r#"
        UPDATE players
        SET name = $2, email = $3, phone = $4, active = $5
        WHERE id = $1
        RETURNING id, name, email, phone, active, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(active)
    .fetch_one(pool)
    .await?;

    Ok(Some(updated_player))
}

/// Removes the player row only. Attendance entries referencing the player
/// are left in place and dangle until resolved at read time.
pub async fn delete_player(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    tracing::debug!("Deleting player: id={}", id);

    let result = sqlx::query(
        r#"
        DELETE FROM players
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
