// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory activity store.
//!
//! Records live in insertion order for the lifetime of the session.
//! Every operation is keyed by position; each record also carries a
//! [`RecordId`] assigned at creation so callers can detect that the row
//! under a remembered position has changed.

use crate::error::{AppError, Result};
use crate::models::Activity;
use serde::Serialize;
use std::fmt;

/// Stable id stamped on a record when it is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A stored record and its id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredActivity {
    #[serde(skip)]
    pub id: RecordId,
    #[serde(flatten)]
    pub activity: Activity,
}

/// Ordered, in-memory activity list.
#[derive(Debug, Default)]
pub struct ActivityStore {
    records: Vec<StoredActivity>,
    next_id: u64,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current ordered records for rendering.
    pub fn list(&self) -> &[StoredActivity] {
        &self.records
    }

    pub fn get(&self, position: usize) -> Result<&StoredActivity> {
        self.records.get(position).ok_or(AppError::OutOfRange {
            position,
            len: self.records.len(),
        })
    }

    /// Add a record at the end. Duplicates are allowed.
    pub fn append(&mut self, activity: Activity) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;

        tracing::debug!(%id, position = self.records.len(), "Appending activity");
        self.records.push(StoredActivity { id, activity });
        id
    }

    /// Overwrite every field of the record at `position`. The id is kept.
    pub fn replace_at(&mut self, position: usize, activity: Activity) -> Result<RecordId> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(position)
            .ok_or(AppError::OutOfRange { position, len })?;

        tracing::debug!(id = %slot.id, position, "Replacing activity");
        slot.activity = activity;
        Ok(slot.id)
    }

    /// Remove the record at `position`; later records shift down by one.
    pub fn remove_at(&mut self, position: usize) -> Result<StoredActivity> {
        if position >= self.records.len() {
            return Err(AppError::OutOfRange {
                position,
                len: self.records.len(),
            });
        }

        let removed = self.records.remove(position);
        tracing::debug!(id = %removed.id, position, "Removed activity");
        Ok(removed)
    }

    /// Check that `position` still holds the record with `id`.
    pub fn ensure_at(&self, position: usize, id: RecordId) -> Result<()> {
        let stored = self.get(position)?;
        if stored.id == id {
            Ok(())
        } else {
            Err(AppError::StaleTarget { position })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityType;

    fn make_activity(name: &str) -> Activity {
        Activity {
            activity: name.to_string(),
            price: 10.0,
            activity_type: ActivityType::Social,
            booking_required: true,
            accessibility: 0.2,
        }
    }

    #[test]
    fn test_append_keeps_order_and_assigns_ids() {
        let mut store = ActivityStore::new();
        let a = store.append(make_activity("Picnic"));
        let b = store.append(make_activity("Picnic"));

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].id, a);
        assert_eq!(store.list()[1].id, b);
    }

    #[test]
    fn test_replace_keeps_id() {
        let mut store = ActivityStore::new();
        let id = store.append(make_activity("Picnic"));

        let replaced = store.replace_at(0, make_activity("Hike")).unwrap();

        assert_eq!(replaced, id);
        assert_eq!(store.list()[0].activity.activity, "Hike");
    }

    #[test]
    fn test_out_of_range() {
        let mut store = ActivityStore::new();
        assert!(matches!(
            store.remove_at(0),
            Err(AppError::OutOfRange { position: 0, len: 0 })
        ));

        store.append(make_activity("Picnic"));
        assert!(matches!(
            store.replace_at(1, make_activity("Hike")),
            Err(AppError::OutOfRange { position: 1, len: 1 })
        ));
        assert!(store.get(1).is_err());
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut store = ActivityStore::new();
        let first = store.append(make_activity("Picnic"));
        store.remove_at(0).unwrap();
        let second = store.append(make_activity("Picnic"));

        assert_ne!(first, second);
        assert!(matches!(
            store.ensure_at(0, first),
            Err(AppError::StaleTarget { position: 0 })
        ));
        assert!(store.ensure_at(0, second).is_ok());
    }
}
