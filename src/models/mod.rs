pub mod cycle;
pub mod daily_log;
pub mod goals;
pub mod profile;

pub use cycle::{CyclePrediction, CycleSettings, CycleUpdate};
pub use daily_log::{DailyLogRecord, MacroKind, RatingKind};
pub use goals::{GoalUpdate, UserGoals};
pub use profile::{Height, ProfileUpdate, UserProfile};
