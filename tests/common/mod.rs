use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use vitalarc_core::error::{CoreError, CoreResult};
use vitalarc_core::gateway::PersistenceGateway;
use vitalarc_core::models::{
    CycleSettings, CycleUpdate, DailyLogRecord, GoalUpdate, ProfileUpdate, UserGoals, UserProfile,
};

/// In-memory stand-in for the remote store. Rows live in hashmaps; failure
/// flags simulate the network going bad per operation class.
#[derive(Default)]
pub struct MockGateway {
    pub state: Mutex<MockState>,
}

#[derive(Default)]
pub struct MockState {
    pub logs: HashMap<(Uuid, NaiveDate), DailyLogRecord>,
    pub goals: HashMap<Uuid, UserGoals>,
    pub profiles: HashMap<Uuid, UserProfile>,
    pub cycles: HashMap<Uuid, CycleSettings>,

    /// Served by `fetch_day_log` when no exact row exists; lets tests hand
    /// the store a record keyed to an older day.
    pub fallback_log: Option<DailyLogRecord>,

    pub upsert_calls: Vec<(Uuid, DailyLogRecord)>,
    pub fetch_calls: usize,

    pub fail_fetches: bool,
    pub fail_upserts: bool,
    pub fail_settings_writes: bool,
    pub fail_range_queries: bool,
}

#[allow(dead_code)]
impl MockGateway {
    pub fn seed_log(&self, user: Uuid, record: DailyLogRecord) {
        let mut state = self.state.lock().unwrap();
        state.logs.insert((user, record.day_key), record);
    }

    pub fn seed_goals(&self, user: Uuid, goals: UserGoals) {
        self.state.lock().unwrap().goals.insert(user, goals);
    }

    pub fn set_fallback_log(&self, record: Option<DailyLogRecord>) {
        self.state.lock().unwrap().fallback_log = record;
    }

    pub fn upsert_count(&self) -> usize {
        self.state.lock().unwrap().upsert_calls.len()
    }

    pub fn last_upsert(&self) -> Option<(Uuid, DailyLogRecord)> {
        self.state.lock().unwrap().upsert_calls.last().cloned()
    }

    pub fn fetch_count(&self) -> usize {
        self.state.lock().unwrap().fetch_calls
    }

    pub fn stored_log(&self, user: Uuid, day: NaiveDate) -> Option<DailyLogRecord> {
        self.state.lock().unwrap().logs.get(&(user, day)).cloned()
    }

    pub fn stored_goals(&self, user: Uuid) -> Option<UserGoals> {
        self.state.lock().unwrap().goals.get(&user).cloned()
    }

    pub fn fail_upserts(&self, fail: bool) {
        self.state.lock().unwrap().fail_upserts = fail;
    }

    pub fn fail_fetches(&self, fail: bool) {
        self.state.lock().unwrap().fail_fetches = fail;
    }

    pub fn fail_settings_writes(&self, fail: bool) {
        self.state.lock().unwrap().fail_settings_writes = fail;
    }

    pub fn fail_range_queries(&self, fail: bool) {
        self.state.lock().unwrap().fail_range_queries = fail;
    }
}

fn simulated(op: &str) -> CoreError {
    CoreError::Gateway(format!("simulated {op} failure"))
}

#[async_trait]
impl PersistenceGateway for MockGateway {
    async fn fetch_day_log(
        &self,
        user: Uuid,
        day_key: NaiveDate,
    ) -> CoreResult<Option<DailyLogRecord>> {
        let mut state = self.state.lock().unwrap();
        state.fetch_calls += 1;
        if state.fail_fetches {
            return Err(simulated("fetch"));
        }
        if let Some(row) = state.logs.get(&(user, day_key)) {
            return Ok(Some(row.clone()));
        }
        Ok(state.fallback_log.clone())
    }

    async fn upsert_log(&self, user: Uuid, record: &DailyLogRecord) -> CoreResult<()> {
        let mut state = self.state.lock().unwrap();
        state.upsert_calls.push((user, record.clone()));
        if state.fail_upserts {
            return Err(simulated("upsert"));
        }
        state.logs.insert((user, record.day_key), record.clone());
        Ok(())
    }

    async fn fetch_goals(&self, user: Uuid) -> CoreResult<Option<UserGoals>> {
        let state = self.state.lock().unwrap();
        if state.fail_fetches {
            return Err(simulated("fetch"));
        }
        Ok(state.goals.get(&user).cloned())
    }

    async fn update_goal(&self, user: Uuid, update: GoalUpdate) -> CoreResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_settings_writes {
            return Err(simulated("goal write"));
        }
        state.goals.entry(user).or_default().apply(update);
        Ok(())
    }

    async fn fetch_profile(&self, user: Uuid) -> CoreResult<Option<UserProfile>> {
        let state = self.state.lock().unwrap();
        if state.fail_fetches {
            return Err(simulated("fetch"));
        }
        Ok(state.profiles.get(&user).cloned())
    }

    async fn update_profile(&self, user: Uuid, update: ProfileUpdate) -> CoreResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_settings_writes {
            return Err(simulated("profile write"));
        }
        state.profiles.entry(user).or_default().apply(update);
        Ok(())
    }

    async fn fetch_cycle_settings(&self, user: Uuid) -> CoreResult<Option<CycleSettings>> {
        let state = self.state.lock().unwrap();
        if state.fail_fetches {
            return Err(simulated("fetch"));
        }
        Ok(state.cycles.get(&user).cloned())
    }

    async fn update_cycle_settings(&self, user: Uuid, update: CycleUpdate) -> CoreResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_settings_writes {
            return Err(simulated("cycle write"));
        }
        state.cycles.entry(user).or_default().apply(update);
        Ok(())
    }

    async fn logs_in_range(
        &self,
        user: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> CoreResult<Vec<DailyLogRecord>> {
        let state = self.state.lock().unwrap();
        if state.fail_range_queries {
            return Err(simulated("range query"));
        }
        let mut rows: Vec<DailyLogRecord> = state
            .logs
            .iter()
            .filter(|((u, day), _)| *u == user && (start..=end).contains(day))
            .map(|(_, row)| row.clone())
            .collect();
        rows.sort_by_key(|r| r.day_key);
        Ok(rows)
    }
}

/// Let spawned fire-and-forget writes run to completion.
#[allow(dead_code)]
pub async fn settle() {
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
}
