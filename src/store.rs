//! Session-scoped cache of today's record plus the per-user singletons.
//!
//! Daily-log mutators are optimistic: the cache is updated synchronously and
//! the remote upsert is fired without being awaited. Goal/profile/cycle
//! updates are pessimistic: the remote write is awaited and the cache only
//! changes on success.

use std::sync::{Arc, RwLock};

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::day_key;
use crate::error::{CoreError, CoreResult};
use crate::gateway::PersistenceGateway;
use crate::models::{
    CycleSettings, CycleUpdate, DailyLogRecord, GoalUpdate, MacroKind, ProfileUpdate, RatingKind,
    UserGoals, UserProfile,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePhase {
    Uninitialized,
    Loading,
    Ready,
    SignedOut,
}

/// Everything the presentation layer reads, captured at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub user: Option<Uuid>,
    pub record: DailyLogRecord,
    pub goals: UserGoals,
    pub profile: UserProfile,
    pub cycle: CycleSettings,
}

impl SessionSnapshot {
    /// Locally fabricated state for a session with no user; never persisted.
    fn local_only(user: Option<Uuid>) -> Self {
        Self {
            user,
            record: DailyLogRecord::empty(day_key::today()),
            goals: UserGoals::default(),
            profile: UserProfile::default(),
            cycle: CycleSettings::default(),
        }
    }
}

struct Inner {
    phase: StorePhase,
    snapshot: SessionSnapshot,
}

pub struct DailyLogStore {
    gateway: Arc<dyn PersistenceGateway>,
    inner: RwLock<Inner>,
}

impl DailyLogStore {
    pub fn new(gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self {
            gateway,
            inner: RwLock::new(Inner {
                phase: StorePhase::Uninitialized,
                snapshot: SessionSnapshot::local_only(None),
            }),
        }
    }

    // ── Session lifecycle ────────────────────────────────────────────────────

    /// Begin a session for `user`: reset to an empty snapshot (no leakage of a
    /// previous session's data while loading) and pull remote state.
    pub async fn start_session(&self, user: Uuid) -> CoreResult<()> {
        {
            let mut inner = self.inner.write().unwrap();
            inner.snapshot = SessionSnapshot::local_only(Some(user));
        }
        self.reload().await
    }

    /// Sign-out clears the cache to an empty unsaved record; no remote I/O
    /// happens again until the next session starts.
    pub fn sign_out(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.phase = StorePhase::SignedOut;
        inner.snapshot = SessionSnapshot::local_only(None);
    }

    /// Full reload of today's record and the per-user singletons. Idempotent;
    /// safe to invoke concurrently with itself — each invocation commits a
    /// whole snapshot, so the last to complete wins. A reload that finishes
    /// after its user signed out (or changed) is dropped.
    pub async fn reload(&self) -> CoreResult<()> {
        let (user, prev_phase) = {
            let mut inner = self.inner.write().unwrap();
            let user = match inner.snapshot.user {
                Some(user) => user,
                None => return Ok(()),
            };
            let prev = inner.phase;
            inner.phase = StorePhase::Loading;
            (user, prev)
        };

        match self.load_remote(user).await {
            Ok(snapshot) => {
                let mut inner = self.inner.write().unwrap();
                if inner.snapshot.user != Some(user) {
                    tracing::debug!(user = %user, "Discarding reload for superseded session");
                    return Ok(());
                }
                inner.snapshot = snapshot;
                inner.phase = StorePhase::Ready;
                Ok(())
            }
            Err(e) => {
                let mut inner = self.inner.write().unwrap();
                if inner.phase == StorePhase::Loading {
                    // Keep serving the stale snapshot rather than wedging in
                    // Loading.
                    inner.phase = prev_phase;
                }
                tracing::warn!(error = %e, user = %user, "Reload failed; keeping cached state");
                Err(e)
            }
        }
    }

    async fn load_remote(&self, user: Uuid) -> CoreResult<SessionSnapshot> {
        let today = day_key::today();
        // No row is a legitimate state for all four fetches; defaults are
        // synthesized client-side.
        let record = self
            .gateway
            .fetch_day_log(user, today)
            .await?
            .unwrap_or_else(|| DailyLogRecord::empty(today));
        let goals = self.gateway.fetch_goals(user).await?.unwrap_or_default();
        let profile = self.gateway.fetch_profile(user).await?.unwrap_or_default();
        let cycle = self
            .gateway
            .fetch_cycle_settings(user)
            .await?
            .unwrap_or_default();

        Ok(SessionSnapshot {
            user: Some(user),
            record,
            goals,
            profile,
            cycle,
        })
    }

    // ── Daily-log mutators (optimistic) ──────────────────────────────────────

    /// Add grams to one macro accumulator. Negative deltas correct earlier
    /// entries; the stored total clamps at zero.
    pub fn add_macro(&self, kind: MacroKind, grams_delta: f64) -> CoreResult<DailyLogRecord> {
        self.mutate(move |record| {
            let total = (record.macro_grams(kind) + grams_delta).max(0.0);
            match kind {
                MacroKind::Protein => record.protein_grams = total,
                MacroKind::Carbs => record.carb_grams = total,
                MacroKind::Fat => record.fat_grams = total,
            }
        })
    }

    pub fn set_sleep(&self, hours: Option<f64>) -> CoreResult<DailyLogRecord> {
        if let Some(h) = hours {
            if h < 0.0 {
                return Err(CoreError::Validation("Sleep hours must be non-negative".into()));
            }
        }
        self.mutate(move |record| record.sleep_hours = hours)
    }

    pub fn set_weight(&self, weight_lbs: Option<f64>) -> CoreResult<DailyLogRecord> {
        if let Some(w) = weight_lbs {
            if w < 0.0 {
                return Err(CoreError::Validation("Weight must be non-negative".into()));
            }
        }
        self.mutate(move |record| record.weight_lbs = weight_lbs)
    }

    /// Tri-state: `Some(true)`, `Some(false)`, or back to unset.
    pub fn set_period_day(&self, is_period_day: Option<bool>) -> CoreResult<DailyLogRecord> {
        self.mutate(move |record| record.is_period_day = is_period_day)
    }

    pub fn set_rating(&self, kind: RatingKind, value: Option<i32>) -> CoreResult<DailyLogRecord> {
        if let Some(v) = value {
            if !(1..=5).contains(&v) {
                return Err(CoreError::Validation(format!(
                    "{:?} rating must be between 1 and 5",
                    kind
                )));
            }
        }
        self.mutate(move |record| match kind {
            RatingKind::Energy => record.energy = value,
            RatingKind::Hunger => record.hunger = value,
            RatingKind::Motivation => record.motivation = value,
        })
    }

    pub fn set_steps(&self, steps: i64) -> CoreResult<DailyLogRecord> {
        if steps < 0 {
            return Err(CoreError::Validation("Steps must be non-negative".into()));
        }
        self.mutate(move |record| record.steps = steps)
    }

    /// Apply one field-level change to a copy of the cached record, commit it
    /// to the cache, then fire the remote upsert without waiting. The cache
    /// reflects the mutation before this function returns.
    fn mutate<F>(&self, apply: F) -> CoreResult<DailyLogRecord>
    where
        F: FnOnce(&mut DailyLogRecord),
    {
        let (record, user) = {
            let mut inner = self.inner.write().unwrap();
            if inner.phase == StorePhase::Uninitialized {
                return Err(CoreError::NotReady);
            }
            let mut record = inner.snapshot.record.clone();
            apply(&mut record);
            record.updated_at = Utc::now();
            inner.snapshot.record = record.clone();
            (record, inner.snapshot.user)
        };

        // Signed-out sessions stay local-only.
        if let Some(user) = user {
            self.persist(user, record.clone());
        }
        Ok(record)
    }

    /// Fire-and-forget full-record upsert. Failure is logged, never retried,
    /// never surfaced; the cache already holds the new value.
    fn persist(&self, user: Uuid, record: DailyLogRecord) {
        let gateway = Arc::clone(&self.gateway);
        tokio::spawn(async move {
            if let Err(e) = gateway.upsert_log(user, &record).await {
                tracing::warn!(
                    error = %e,
                    user = %user,
                    day = %record.day_key,
                    "Daily log upsert failed; cache keeps the local value"
                );
            }
        });
    }

    // ── Singleton updates (pessimistic) ──────────────────────────────────────

    pub async fn update_goal(&self, update: GoalUpdate) -> CoreResult<UserGoals> {
        let user = self.require_user()?;
        self.gateway.update_goal(user, update).await?;
        let mut inner = self.inner.write().unwrap();
        inner.snapshot.goals.apply(update);
        Ok(inner.snapshot.goals.clone())
    }

    pub async fn update_profile(&self, update: ProfileUpdate) -> CoreResult<UserProfile> {
        let user = self.require_user()?;
        self.gateway.update_profile(user, update).await?;
        let mut inner = self.inner.write().unwrap();
        inner.snapshot.profile.apply(update);
        Ok(inner.snapshot.profile.clone())
    }

    pub async fn update_cycle_settings(&self, update: CycleUpdate) -> CoreResult<CycleSettings> {
        let user = self.require_user()?;
        self.gateway.update_cycle_settings(user, update).await?;
        let mut inner = self.inner.write().unwrap();
        inner.snapshot.cycle.apply(update);
        Ok(inner.snapshot.cycle.clone())
    }

    fn require_user(&self) -> CoreResult<Uuid> {
        self.inner
            .read()
            .unwrap()
            .snapshot
            .user
            .ok_or(CoreError::NotReady)
    }

    // ── Read access ──────────────────────────────────────────────────────────

    pub fn phase(&self) -> StorePhase {
        self.inner.read().unwrap().phase
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.read().unwrap().snapshot.clone()
    }

    pub fn record(&self) -> DailyLogRecord {
        self.inner.read().unwrap().snapshot.record.clone()
    }

    pub fn goals(&self) -> UserGoals {
        self.inner.read().unwrap().snapshot.goals.clone()
    }

    pub fn profile(&self) -> UserProfile {
        self.inner.read().unwrap().snapshot.profile.clone()
    }

    pub fn cycle_settings(&self) -> CycleSettings {
        self.inner.read().unwrap().snapshot.cycle.clone()
    }

    pub fn current_user(&self) -> Option<Uuid> {
        self.inner.read().unwrap().snapshot.user
    }

    pub fn cached_day(&self) -> NaiveDate {
        self.inner.read().unwrap().snapshot.record.day_key
    }

    pub fn calories_today(&self) -> f64 {
        self.inner.read().unwrap().snapshot.record.calories()
    }
}
