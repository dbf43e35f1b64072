//! Keeps a view consistent with the store.

use std::sync::Arc;
use stockboard_core::{FilterableHospitalView, Hospital, Tag};
use tokio::sync::{watch, Mutex};

use crate::store::Store;

/// Drives a shared [`FilterableHospitalView`] from a [`Store`].
///
/// Whenever either observed collection is replaced, the driver pushes the
/// new value into the view, which re-applies the current tag selection —
/// the screen never shows a filtered list derived from stale data. The two
/// collections are independent and may arrive in either order; the view
/// renders correctly with either, both, or neither present.
pub struct ViewDriver {
    view: Arc<Mutex<FilterableHospitalView>>,
    hospitals_rx: watch::Receiver<Vec<Hospital>>,
    tags_rx: watch::Receiver<Vec<Tag>>,
}

impl ViewDriver {
    /// A driver over a fresh, empty view subscribed to `store`.
    ///
    /// Issues exactly one refresh for hospitals and one for tags, matching
    /// the screen's activation contract.
    pub fn new(store: &Store) -> Self {
        let driver = Self {
            view: Arc::new(Mutex::new(FilterableHospitalView::new())),
            hospitals_rx: store.subscribe_hospitals(),
            tags_rx: store.subscribe_tags(),
        };
        store.refresh_hospitals();
        store.refresh_tags();
        driver
    }

    /// Handle to the driven view, for rendering snapshots and toggling tags.
    pub fn view(&self) -> Arc<Mutex<FilterableHospitalView>> {
        Arc::clone(&self.view)
    }

    /// Apply any collection replacements that have already arrived.
    ///
    /// Returns true when the view changed.
    pub async fn apply_pending(&mut self) -> bool {
        let mut changed = false;

        if self.hospitals_rx.has_changed().unwrap_or(false) {
            let hospitals = self.hospitals_rx.borrow_and_update().clone();
            self.view.lock().await.set_hospitals(hospitals);
            changed = true;
        }
        if self.tags_rx.has_changed().unwrap_or(false) {
            let tags = self.tags_rx.borrow_and_update().clone();
            self.view.lock().await.set_tags(tags);
            changed = true;
        }

        changed
    }

    /// Run until the store is dropped, applying replacements as they arrive.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                changed = self.hospitals_rx.changed() => match changed {
                    Ok(()) => {
                        let hospitals = self.hospitals_rx.borrow_and_update().clone();
                        self.view.lock().await.set_hospitals(hospitals);
                    }
                    Err(_) => break,
                },
                changed = self.tags_rx.changed() => match changed {
                    Ok(()) => {
                        let tags = self.tags_rx.borrow_and_update().clone();
                        self.view.lock().await.set_tags(tags);
                    }
                    Err(_) => break,
                },
            }
        }
        tracing::debug!("view driver stopped: store dropped");
    }
}
