// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity board: add, edit, and delete activity records through a
//! validated form bound to an in-memory list.
//!
//! The [`services::FormController`] holds all of the behaviour; the
//! [`page::Page`] renders it as text for the terminal host.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod page;
pub mod services;
