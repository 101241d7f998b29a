use serde::{Deserialize, Serialize};

use crate::metrics;

/// Per-user nutrition and activity targets. The calorie target is derived from
/// the macro targets and is not independently settable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGoals {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub steps: i64,
    pub sleep_hours: f64,
}

impl Default for UserGoals {
    fn default() -> Self {
        Self {
            protein_g: 120.0,
            carbs_g: 200.0,
            fat_g: 65.0,
            steps: 10_000,
            sleep_hours: 8.0,
        }
    }
}

impl UserGoals {
    pub fn calorie_target(&self) -> f64 {
        metrics::calories(self.protein_g, self.carbs_g, self.fat_g)
    }

    pub fn apply(&mut self, update: GoalUpdate) {
        match update {
            GoalUpdate::Protein(g) => self.protein_g = g,
            GoalUpdate::Carbs(g) => self.carbs_g = g,
            GoalUpdate::Fat(g) => self.fat_g = g,
            GoalUpdate::Steps(n) => self.steps = n,
            GoalUpdate::Sleep(h) => self.sleep_hours = h,
        }
    }
}

/// One goal field and its new value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "lowercase")]
pub enum GoalUpdate {
    Protein(f64),
    Carbs(f64),
    Fat(f64),
    Steps(i64),
    Sleep(f64),
}
