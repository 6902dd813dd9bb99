use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create players table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS players (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            phone VARCHAR(50) NULL,
            active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create attendance_sessions table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance_sessions (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            session_date TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            notes TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create attendance_entries table. player_id carries no foreign key:
    // entries keep a weak reference that may dangle after a player is
    // deleted, and resolution happens at read time.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance_entries (
            session_id UUID NOT NULL REFERENCES attendance_sessions(id) ON DELETE CASCADE,
            player_id UUID NOT NULL,
            present BOOLEAN NOT NULL DEFAULT FALSE,
            notes TEXT NOT NULL DEFAULT '',
            position INT NOT NULL DEFAULT 0,
            PRIMARY KEY (session_id, player_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_players_name ON players(name);
        CREATE INDEX IF NOT EXISTS idx_players_active ON players(active);
        CREATE INDEX IF NOT EXISTS idx_attendance_sessions_session_date ON attendance_sessions(session_date);
        CREATE INDEX IF NOT EXISTS idx_attendance_entries_player_id ON attendance_entries(player_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
