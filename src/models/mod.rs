// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the page.

pub mod activity;
pub mod draft;
pub mod notice;

pub use activity::{Activity, ActivityType};
pub use draft::{ActivityDraft, Field, FieldErrors};
pub use notice::Notice;
