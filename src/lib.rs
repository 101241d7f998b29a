//! Daily-log state & synchronization engine for the vitalarc health tracker.
//!
//! Owns the in-memory representation of today's health record, keeps it in
//! sync with the remote store (optimistic fire-and-forget writes for log
//! fields, awaited writes for settings), rolls the record over at local
//! midnight, and computes calorie/average aggregates on demand.

pub mod config;
pub mod day_key;
pub mod error;
pub mod gateway;
pub mod metrics;
pub mod models;
pub mod query;
pub mod rollover;
pub mod session;
pub mod store;

pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use gateway::{HttpGateway, PersistenceGateway};
pub use query::{AggregateQueryService, SevenDayAverages, WeightPoint};
pub use rollover::RolloverMonitor;
pub use session::spawn_session_listener;
pub use store::{DailyLogStore, SessionSnapshot, StorePhase};

/// Install the process-wide tracing subscriber. Call once at startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitalarc_core=debug".into()),
        )
        .json()
        .init();
}
