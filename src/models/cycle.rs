use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inputs the external cycle predictor needs. This crate stores and retrieves
/// them; it never runs prediction math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleSettings {
    pub cycle_length_days: i32,
    pub period_length_days: i32,
    pub last_period_start: Option<NaiveDate>,
}

impl Default for CycleSettings {
    fn default() -> Self {
        Self {
            cycle_length_days: 28,
            period_length_days: 5,
            last_period_start: None,
        }
    }
}

impl CycleSettings {
    pub fn apply(&mut self, update: CycleUpdate) {
        match update {
            CycleUpdate::CycleLength(days) => self.cycle_length_days = days,
            CycleUpdate::PeriodLength(days) => self.period_length_days = days,
            CycleUpdate::LastPeriodStart(date) => self.last_period_start = date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum CycleUpdate {
    CycleLength(i32),
    PeriodLength(i32),
    LastPeriodStart(Option<NaiveDate>),
}

/// Display value produced by the external predictor. Defined here so
/// collaborators share one shape; never computed by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CyclePrediction {
    pub phase: String,
    pub cycle_day: i32,
    pub next_period_in: i32,
}
