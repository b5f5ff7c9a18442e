// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Form draft and its validation rules.
//!
//! A draft holds raw form input. It only becomes an [`Activity`] after
//! every field passes validation.

use crate::models::activity::{Activity, ActivityType};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use validator::{Validate, ValidationError, ValidationErrors};

pub const ACTIVITY_MIN_CHARS: usize = 2;
pub const PRICE_MIN: f64 = 1.0;

pub const ACTIVITY_TOO_SHORT: &str = "Activity must be at least 2 characters.";
pub const PRICE_INVALID: &str = "Price must be a number and at least 1 characters.";
pub const ACCESSIBILITY_NAN: &str = "Accessibility must be a number.";

/// Uncommitted form values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDraft {
    pub activity: String,
    /// NaN when the price input did not parse
    pub price: f64,
    /// Raw select value, checked against [`ActivityType`] on submit
    #[serde(rename = "type")]
    pub activity_type: String,
    pub booking_required: bool,
    pub accessibility: f64,
}

impl Default for ActivityDraft {
    fn default() -> Self {
        Self {
            activity: String::new(),
            price: 0.0,
            activity_type: ActivityType::default().as_str().to_string(),
            booking_required: false,
            accessibility: 0.0,
        }
    }
}

impl From<&Activity> for ActivityDraft {
    fn from(record: &Activity) -> Self {
        Self {
            activity: record.activity.clone(),
            price: record.price,
            activity_type: record.activity_type.as_str().to_string(),
            booking_required: record.booking_required,
            accessibility: record.accessibility,
        }
    }
}

impl Validate for ActivityDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.activity.chars().count() < ACTIVITY_MIN_CHARS {
            errors.add("activity", rule_error("length", Cow::Borrowed(ACTIVITY_TOO_SHORT)));
        }

        // NaN fails the `>=` comparison, so unparsed input is rejected here too
        if !(self.price.is_finite() && self.price >= PRICE_MIN) {
            errors.add("price", rule_error("range", Cow::Borrowed(PRICE_INVALID)));
        }

        if self.activity_type.parse::<ActivityType>().is_err() {
            let mut err = rule_error("enum", Cow::Owned(invalid_type_message(&self.activity_type)));
            err.add_param(Cow::Borrowed("received"), &self.activity_type);
            errors.add("type", err);
        }

        if self.accessibility.is_nan() {
            errors.add(
                "accessibility",
                rule_error("type", Cow::Borrowed(ACCESSIBILITY_NAN)),
            );
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl ActivityDraft {
    /// Validate and convert into a record.
    pub fn check(&self) -> Result<Activity, FieldErrors> {
        self.validate()?;

        let activity_type = self
            .activity_type
            .parse::<ActivityType>()
            .map_err(|e| FieldErrors::single(Field::Type, invalid_type_message(&e.0)))?;

        Ok(Activity {
            activity: self.activity.clone(),
            price: self.price,
            activity_type,
            booking_required: self.booking_required,
            accessibility: self.accessibility,
        })
    }
}

/// Clamp to [0, 1] and round to the slider's 0.1 step.
pub fn snap_accessibility(value: f64) -> f64 {
    (value.clamp(0.0, 1.0) * 10.0).round() / 10.0
}

fn rule_error(code: &'static str, message: Cow<'static, str>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message);
    err
}

fn invalid_type_message(received: &str) -> String {
    let expected = ActivityType::ALL
        .iter()
        .map(|t| format!("'{}'", t.as_str()))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("Invalid enum value. Expected {expected}, received '{received}'")
}

/// A form field that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Activity,
    Price,
    Type,
    BookingRequired,
    Accessibility,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Activity => "activity",
            Field::Price => "price",
            Field::Type => "type",
            Field::BookingRequired => "booking_required",
            Field::Accessibility => "accessibility",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "activity" => Some(Field::Activity),
            "price" => Some(Field::Price),
            "type" => Some(Field::Type),
            "booking_required" => Some(Field::BookingRequired),
            "accessibility" => Some(Field::Accessibility),
            _ => None,
        }
    }
}

/// First error message per field, shown next to the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn single(field: Field, message: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(field, message.into());
        Self(map)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut map = BTreeMap::new();
        for (name, errs) in errors.field_errors() {
            let name: &str = name.as_ref();
            let Some(field) = Field::from_name(name) else {
                continue;
            };
            if let Some(message) = errs.first().and_then(|e| e.message.as_ref()) {
                map.insert(field, message.to_string());
            }
        }
        Self(map)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.as_str(), message)?;
            first = false;
        }
        Ok(())
    }
}
