// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity record model shown in the table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Category of an activity. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ActivityType {
    Education,
    Recreational,
    Social,
    Diy,
    Charity,
    Cooking,
    Relaxation,
    Music,
    Busywork,
}

impl ActivityType {
    /// All categories in select-menu order. The first one is the form default.
    pub const ALL: [ActivityType; 9] = [
        ActivityType::Education,
        ActivityType::Recreational,
        ActivityType::Social,
        ActivityType::Diy,
        ActivityType::Charity,
        ActivityType::Cooking,
        ActivityType::Relaxation,
        ActivityType::Music,
        ActivityType::Busywork,
    ];

    /// Wire/storage value (lowercase).
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::Education => "education",
            ActivityType::Recreational => "recreational",
            ActivityType::Social => "social",
            ActivityType::Diy => "diy",
            ActivityType::Charity => "charity",
            ActivityType::Cooking => "cooking",
            ActivityType::Relaxation => "relaxation",
            ActivityType::Music => "music",
            ActivityType::Busywork => "busywork",
        }
    }

    /// Human label for the select menu.
    pub fn label(self) -> &'static str {
        match self {
            ActivityType::Education => "Education",
            ActivityType::Recreational => "Recreational",
            ActivityType::Social => "Social",
            ActivityType::Diy => "DIY",
            ActivityType::Charity => "Charity",
            ActivityType::Cooking => "Cooking",
            ActivityType::Relaxation => "Relaxation",
            ActivityType::Music => "Music",
            ActivityType::Busywork => "Busywork",
        }
    }
}

impl Default for ActivityType {
    fn default() -> Self {
        ActivityType::ALL[0]
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a value outside the category set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown activity type: {0}")]
pub struct UnknownActivityType(pub String);

impl FromStr for ActivityType {
    type Err = UnknownActivityType;

    /// Matches the wire value exactly; the select menu never sends anything else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownActivityType(s.to_string()))
    }
}

/// A committed activity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    /// Activity name
    pub activity: String,
    /// Price (at least 1)
    pub price: f64,
    /// Category
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    /// Whether the activity must be booked ahead
    pub booking_required: bool,
    /// Accessibility score, 0.0 to 1.0
    pub accessibility: f64,
}
