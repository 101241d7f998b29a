//! Bridge from the external identity/session provider to the store.
//!
//! The provider publishes the current user (or none) on a watch channel; the
//! listener applies the value present at subscription time, then follows
//! every change: sign-in loads the session, sign-out clears the cache to an
//! empty unsaved record.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::store::DailyLogStore;

pub fn spawn_session_listener(
    store: Arc<DailyLogStore>,
    mut sessions: watch::Receiver<Option<Uuid>>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let current = *sessions.borrow_and_update();
            match current {
                Some(user) => {
                    if let Err(e) = store.start_session(user).await {
                        tracing::warn!(error = %e, user = %user, "Session load failed");
                    }
                }
                None => store.sign_out(),
            }

            if sessions.changed().await.is_err() {
                tracing::debug!("Session provider dropped; listener exiting");
                break;
            }
        }
    })
}
