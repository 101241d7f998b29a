//! On-demand read paths over the remote store. These bypass the single-record
//! cache entirely and never cache their own results. Failures degrade to empty
//! results; these are display-only reads.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

use crate::day_key;
use crate::gateway::PersistenceGateway;
use crate::metrics;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightPoint {
    pub day_key: NaiveDate,
    pub weight_lbs: f64,
}

/// Trailing-week averages. Cumulative fields zero-fill over every day in the
/// window; sleep averages only over days it was logged. All `None` when the
/// window has no records at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SevenDayAverages {
    pub calories: Option<f64>,
    pub protein_g: Option<f64>,
    pub steps: Option<f64>,
    pub sleep_hours: Option<f64>,
}

pub struct AggregateQueryService {
    gateway: Arc<dyn PersistenceGateway>,
}

impl AggregateQueryService {
    pub fn new(gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self { gateway }
    }

    /// Logged weights over the trailing window, ascending by day. Empty and
    /// single-point results are valid; minimum-points-for-display is the
    /// caller's concern.
    pub async fn weight_history(&self, user: Uuid, window_days: u32) -> Vec<WeightPoint> {
        let end = day_key::today();
        let start = end - Duration::days(window_days as i64);

        let records = match self.gateway.logs_in_range(user, start, end).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, user = %user, "Weight history query failed");
                return Vec::new();
            }
        };

        let mut points: Vec<WeightPoint> = records
            .iter()
            .filter_map(|r| {
                r.weight_lbs.map(|weight_lbs| WeightPoint {
                    day_key: r.day_key,
                    weight_lbs,
                })
            })
            .collect();
        points.sort_by_key(|p| p.day_key);
        points
    }

    /// Averages over the trailing 7-day window ending today.
    pub async fn seven_day_averages(&self, user: Uuid) -> SevenDayAverages {
        const WINDOW_DAYS: usize = 7;
        let end = day_key::today();
        let start = end - Duration::days(WINDOW_DAYS as i64 - 1);

        let records = match self.gateway.logs_in_range(user, start, end).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, user = %user, "Seven-day averages query failed");
                return SevenDayAverages::default();
            }
        };

        SevenDayAverages {
            calories: metrics::mean_zero_filled(&records, WINDOW_DAYS, |r| Some(r.calories())),
            protein_g: metrics::mean_zero_filled(&records, WINDOW_DAYS, |r| Some(r.protein_grams)),
            steps: metrics::mean_zero_filled(&records, WINDOW_DAYS, |r| Some(r.steps as f64)),
            sleep_hours: metrics::mean_present(&records, |r| r.sleep_hours),
        }
    }
}
