//! Observed collections and refresh commands.

use std::sync::Arc;
use stockboard_core::{Hospital, Tag};
use tokio::sync::watch;

use crate::source::DataSource;

/// Holds the two externally-owned collections the list view observes.
///
/// Each collection lives behind a watch channel: a completed refresh
/// replaces the value wholesale and every subscriber sees the latest value.
/// Refreshes are fire-and-forget commands; their only observable effect is
/// a new value in the corresponding channel. A failed refresh is logged and
/// leaves the previous value untouched.
#[derive(Clone)]
pub struct Store {
    hospitals_tx: watch::Sender<Vec<Hospital>>,
    tags_tx: watch::Sender<Vec<Tag>>,
    source: Arc<dyn DataSource>,
}

impl Store {
    /// A store with empty collections, fetching through `source`.
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        let (hospitals_tx, _) = watch::channel(Vec::new());
        let (tags_tx, _) = watch::channel(Vec::new());
        Self {
            hospitals_tx,
            tags_tx,
            source,
        }
    }

    /// Subscribe to wholesale replacements of the hospital collection.
    pub fn subscribe_hospitals(&self) -> watch::Receiver<Vec<Hospital>> {
        self.hospitals_tx.subscribe()
    }

    /// Subscribe to wholesale replacements of the tag collection.
    pub fn subscribe_tags(&self) -> watch::Receiver<Vec<Tag>> {
        self.tags_tx.subscribe()
    }

    /// Trigger an asynchronous refresh of the hospital collection.
    ///
    /// Returns immediately; the result surfaces only through the watch
    /// channel. Independent of [`refresh_tags`](Self::refresh_tags) — no
    /// ordering is guaranteed between the two.
    pub fn refresh_hospitals(&self) {
        let source = Arc::clone(&self.source);
        let tx = self.hospitals_tx.clone();
        tokio::spawn(async move {
            match source.fetch_hospitals().await {
                Ok(hospitals) => {
                    tx.send_replace(hospitals);
                }
                Err(e) => {
                    tracing::warn!("hospital refresh failed: {}", e);
                }
            }
        });
    }

    /// Trigger an asynchronous refresh of the tag collection.
    pub fn refresh_tags(&self) {
        let source = Arc::clone(&self.source);
        let tx = self.tags_tx.clone();
        tokio::spawn(async move {
            match source.fetch_tags().await {
                Ok(tags) => {
                    tx.send_replace(tags);
                }
                Err(e) => {
                    tracing::warn!("tag refresh failed: {}", e);
                }
            }
        });
    }
}
