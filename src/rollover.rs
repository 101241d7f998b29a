//! Day-boundary watcher.
//!
//! Two producers feed one reconciliation loop: a recurring interval tick
//! (bounds worst-case staleness) and an external foreground/visibility signal
//! (corrects staleness the moment the user comes back). Both run the same
//! staleness check; a stale cache triggers a full reload so goals and profile
//! re-sync along with the record.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::day_key;
use crate::store::DailyLogStore;

pub struct RolloverMonitor {
    tx: mpsc::Sender<()>,
}

impl RolloverMonitor {
    /// Start the watcher. Dropping the returned monitor closes the signal
    /// channel and ends the loop.
    pub fn spawn(store: Arc<DailyLogStore>, check_interval: Duration) -> Self {
        let (tx, mut rx) = mpsc::channel::<()>(8);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(check_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // interval's first tick fires immediately; consume it so the
            // first scheduled check lands one full interval out.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => check_and_reload(&store).await,
                    signal = rx.recv() => match signal {
                        Some(()) => check_and_reload(&store).await,
                        None => {
                            tracing::debug!("Rollover monitor shutting down");
                            break;
                        }
                    }
                }
            }
        });

        Self { tx }
    }

    /// Foreground/visibility-regained trigger. Cheap and non-blocking; if a
    /// check is already queued the extra signal is dropped.
    pub fn notify_foregrounded(&self) {
        let _ = self.tx.try_send(());
    }
}

async fn check_and_reload(store: &DailyLogStore) {
    // No action while signed out.
    if store.current_user().is_none() {
        return;
    }
    let cached = store.cached_day();
    if !day_key::is_stale(cached) {
        return;
    }
    tracing::info!(stale_day = %cached, "Local day rolled over; reloading");
    if let Err(e) = store.reload().await {
        tracing::warn!(error = %e, "Rollover reload failed; will retry on next trigger");
    }
}
