//! The tag-filterable hospital view.
//!
//! This is the view-model behind the hospital list screen: it owns the
//! viewer's tag selection, observes wholesale replacements of the hospital
//! and tag collections, and derives the displayed subset.
//!
//! Two rules are fixed here and relied upon by the rest of the system:
//!
//! - Filtering is the pure function [`filter_hospitals`] over
//!   `(hospitals, selection)`; the displayed list is never mutated
//!   independently of its inputs.
//! - Replacing the hospital collection re-applies the *current* selection
//!   against the fresh data, so a stale filtered list is never shown.

use std::collections::BTreeSet;
use stockboard_types::TagId;

use crate::hospital::Hospital;
use crate::tag::Tag;

/// Displayed subset of `hospitals` under `selection`.
///
/// With an empty selection every hospital is shown. With a non-empty
/// selection a hospital is shown iff its own tag set contains *every*
/// selected identifier (logical AND across selections). Source order is
/// preserved; no re-sorting is applied.
pub fn filter_hospitals(hospitals: &[Hospital], selection: &BTreeSet<TagId>) -> Vec<Hospital> {
    if selection.is_empty() {
        return hospitals.to_vec();
    }

    hospitals
        .iter()
        .filter(|h| h.has_all_tags(selection.iter()))
        .cloned()
        .collect()
}

/// View-model for the filterable hospital list.
///
/// The selection starts empty at construction and is discarded with the
/// value; it is never persisted. Collections arrive through
/// [`set_hospitals`](Self::set_hospitals) / [`set_tags`](Self::set_tags)
/// as wholesale replacements, in either order.
#[derive(Clone, Debug, Default)]
pub struct FilterableHospitalView {
    hospitals: Vec<Hospital>,
    tags: Vec<Tag>,
    selection: BTreeSet<TagId>,
    filtered: Vec<Hospital>,
}

impl FilterableHospitalView {
    /// A view with empty collections and an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the hospital collection and re-derive the displayed list
    /// from the current selection.
    pub fn set_hospitals(&mut self, hospitals: Vec<Hospital>) {
        self.hospitals = hospitals;
        self.recompute();
    }

    /// Replace the known-tag collection. Does not touch the selection: a
    /// selected identifier that no longer exists simply matches nothing.
    pub fn set_tags(&mut self, tags: Vec<Tag>) {
        self.tags = tags;
    }

    /// Add `tag` to the selection if absent, remove it if present, then
    /// re-derive the displayed list.
    ///
    /// The previous selection value is never mutated in place; toggling
    /// builds a new set.
    pub fn toggle_tag(&mut self, tag: TagId) {
        let mut selection = self.selection.clone();
        if !selection.remove(&tag) {
            selection.insert(tag);
        }
        self.selection = selection;
        self.recompute();
    }

    /// Identifiers currently chosen as filter criteria.
    pub fn selection(&self) -> &BTreeSet<TagId> {
        &self.selection
    }

    /// True when `tag` is part of the current selection.
    pub fn is_selected(&self, tag: TagId) -> bool {
        self.selection.contains(&tag)
    }

    /// All known tags, in source order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// The full hospital collection as last replaced, unfiltered.
    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    /// The displayed subset under the current selection.
    pub fn filtered(&self) -> &[Hospital] {
        &self.filtered
    }

    fn recompute(&mut self) {
        self.filtered = filter_hospitals(&self.hospitals, &self.selection);
    }
}
