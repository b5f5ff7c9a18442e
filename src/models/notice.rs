// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Transient success notice shown after a create or update.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

pub const CREATED_MESSAGE: &str = "Item added successfully!";
pub const UPDATED_MESSAGE: &str = "Item updated successfully!";

/// Toast-style message that disappears after a fixed lifetime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub message: String,
    pub issued_at: DateTime<Utc>,
}

impl Notice {
    pub fn created(now: DateTime<Utc>) -> Self {
        Self {
            message: CREATED_MESSAGE.to_string(),
            issued_at: now,
        }
    }

    pub fn updated(now: DateTime<Utc>) -> Self {
        Self {
            message: UPDATED_MESSAGE.to_string(),
            issued_at: now,
        }
    }

    /// Whether the notice should still be displayed at `now`.
    pub fn is_live(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now >= self.issued_at && now - self.issued_at < ttl
    }
}
