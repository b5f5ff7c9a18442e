// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

use crate::models::FieldErrors;

/// Errors raised by the store, the form controller, and the page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Position {position} out of range (length {len})")]
    OutOfRange { position: usize, len: usize },

    #[error("Record at position {position} changed since it was selected")]
    StaleTarget { position: usize },

    #[error("A delete confirmation is pending")]
    ConfirmationPending,

    #[error("No delete is pending")]
    NothingPending,

    #[error("Invalid command: {0}")]
    BadCommand(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl AppError {
    /// Errors that mean the caller held a stale or bogus position.
    ///
    /// Positions always come from the rendered list, so these indicate a bug
    /// in the view rather than something the user can fix.
    pub fn is_programmer_error(&self) -> bool {
        matches!(
            self,
            AppError::OutOfRange { .. } | AppError::StaleTarget { .. }
        )
    }

    /// Field errors, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Result type alias for store and controller operations
pub type Result<T> = std::result::Result<T, AppError>;
