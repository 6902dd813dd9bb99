use chrono::{DateTime, NaiveDate, Utc};
use mockall::mock;
use rollcall_core::models::attendance::AttendanceEntry;
use uuid::Uuid;

use crate::models::{DbAttendanceEntry, DbAttendanceSession, DbEntryWithPlayer, DbPlayer};

// Mock repositories for testing
mock! {
    pub PlayerRepo {
        pub async fn create_player(
            &self,
            name: &'static str,
            email: &'static str,
            phone: Option<&'static str>,
        ) -> eyre::Result<DbPlayer>;

        pub async fn list_players(&self) -> eyre::Result<Vec<DbPlayer>>;

        pub async fn list_active_players(&self) -> eyre::Result<Vec<DbPlayer>>;

        pub async fn get_player_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbPlayer>>;

        pub async fn update_player(
            &self,
            id: Uuid,
            name: Option<&'static str>,
            email: Option<&'static str>,
            phone: Option<&'static str>,
            active: Option<bool>,
        ) -> eyre::Result<Option<DbPlayer>>;

        pub async fn delete_player(&self, id: Uuid) -> eyre::Result<bool>;
    }
}

mock! {
    pub AttendanceRepo {
        pub async fn create_session(
            &self,
            session_date: DateTime<Utc>,
            notes: &'static str,
        ) -> eyre::Result<DbAttendanceSession>;

        pub async fn list_sessions(&self) -> eyre::Result<Vec<DbAttendanceSession>>;

        pub async fn get_session_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbAttendanceSession>>;

        pub async fn get_session_by_date(
            &self,
            date: NaiveDate,
        ) -> eyre::Result<Option<DbAttendanceSession>>;

        pub async fn get_entries_for_session(
            &self,
            session_id: Uuid,
        ) -> eyre::Result<Vec<DbEntryWithPlayer>>;

        pub async fn list_all_entries(&self) -> eyre::Result<Vec<DbAttendanceEntry>>;

        pub async fn update_session(
            &self,
            id: Uuid,
            session_date: Option<DateTime<Utc>>,
            notes: Option<&'static str>,
            entries: Option<Vec<AttendanceEntry>>,
        ) -> eyre::Result<Option<DbAttendanceSession>>;

        pub async fn patch_entry(
            &self,
            session_id: Uuid,
            player_id: Uuid,
            present: Option<bool>,
            notes: Option<&'static str>,
        ) -> eyre::Result<bool>;

        pub async fn delete_session(&self, id: Uuid) -> eyre::Result<bool>;
    }
}
