//! Boundary to the remote record store. Everything behind this trait is the
//! only network I/O in the crate; callers always distinguish "no row"
//! (`Ok(None)`) from a real failure (`Err`).

pub mod http;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::CoreResult;
use crate::models::{
    CycleSettings, CycleUpdate, DailyLogRecord, GoalUpdate, ProfileUpdate, UserGoals, UserProfile,
};

pub use http::HttpGateway;

#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Fetch the log row for one day, if one exists.
    async fn fetch_day_log(&self, user: Uuid, day_key: NaiveDate)
        -> CoreResult<Option<DailyLogRecord>>;

    /// Insert-or-update keyed on (user, day_key); last write wins. The record
    /// is always the full row, never a delta.
    async fn upsert_log(&self, user: Uuid, record: &DailyLogRecord) -> CoreResult<()>;

    async fn fetch_goals(&self, user: Uuid) -> CoreResult<Option<UserGoals>>;
    async fn update_goal(&self, user: Uuid, update: GoalUpdate) -> CoreResult<()>;

    async fn fetch_profile(&self, user: Uuid) -> CoreResult<Option<UserProfile>>;
    async fn update_profile(&self, user: Uuid, update: ProfileUpdate) -> CoreResult<()>;

    async fn fetch_cycle_settings(&self, user: Uuid) -> CoreResult<Option<CycleSettings>>;
    async fn update_cycle_settings(&self, user: Uuid, update: CycleUpdate) -> CoreResult<()>;

    /// Rows in `[start, end]` inclusive, ascending by day. Days with no row
    /// are simply missing from the result.
    async fn logs_in_range(
        &self,
        user: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> CoreResult<Vec<DailyLogRecord>>;
}
