// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_board::error::AppError;
use activity_board::models::{ActivityDraft, Field};

#[test]
fn test_is_programmer_error_matches() {
    let err = AppError::OutOfRange {
        position: 3,
        len: 2,
    };
    assert!(err.is_programmer_error());

    let err = AppError::StaleTarget { position: 0 };
    assert!(err.is_programmer_error());
}

#[test]
fn test_is_programmer_error_no_match() {
    let errors = ActivityDraft::default().check().unwrap_err();
    assert!(!AppError::Validation(errors).is_programmer_error());
    assert!(!AppError::ConfirmationPending.is_programmer_error());
    assert!(!AppError::NothingPending.is_programmer_error());
    assert!(!AppError::BadCommand("bad".to_string()).is_programmer_error());
}

#[test]
fn test_validation_error_exposes_fields() {
    let errors = ActivityDraft::default().check().unwrap_err();
    let err = AppError::from(errors);

    let fields: Vec<Field> = err.field_errors().unwrap().fields().collect();
    assert_eq!(fields, vec![Field::Activity, Field::Price]);
    assert!(err.to_string().starts_with("Validation failed: activity: "));

    assert!(AppError::NothingPending.field_errors().is_none());
}

#[test]
fn test_out_of_range_message() {
    let err = AppError::OutOfRange {
        position: 3,
        len: 2,
    };
    assert_eq!(err.to_string(), "Position 3 out of range (length 2)");
}
