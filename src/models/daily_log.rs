use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::metrics;

/// One health record per (user, calendar day). The remote store holds at most
/// one row per that pair; every write carries the full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLogRecord {
    pub day_key: NaiveDate,
    pub protein_grams: f64,
    pub carb_grams: f64,
    pub fat_grams: f64,
    pub sleep_hours: Option<f64>,
    pub weight_lbs: Option<f64>,
    pub is_period_day: Option<bool>,
    pub steps: i64,
    pub energy: Option<i32>,
    pub hunger: Option<i32>,
    pub motivation: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DailyLogRecord {
    /// Fresh, never-persisted record for a day. Nothing is logged yet.
    pub fn empty(day_key: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            day_key,
            protein_grams: 0.0,
            carb_grams: 0.0,
            fat_grams: 0.0,
            sleep_hours: None,
            weight_lbs: None,
            is_period_day: None,
            steps: 0,
            energy: None,
            hunger: None,
            motivation: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Calories are derived, never stored.
    pub fn calories(&self) -> f64 {
        metrics::calories(self.protein_grams, self.carb_grams, self.fat_grams)
    }

    pub fn macro_grams(&self, kind: MacroKind) -> f64 {
        match kind {
            MacroKind::Protein => self.protein_grams,
            MacroKind::Carbs => self.carb_grams,
            MacroKind::Fat => self.fat_grams,
        }
    }

    pub fn rating(&self, kind: RatingKind) -> Option<i32> {
        match kind {
            RatingKind::Energy => self.energy,
            RatingKind::Hunger => self.hunger,
            RatingKind::Motivation => self.motivation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacroKind {
    Protein,
    Carbs,
    Fat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingKind {
    Energy,
    Hunger,
    Motivation,
}
