// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Plain-text rendering of the form, the table, and the delete dialog.

use crate::db::StoredActivity;
use crate::models::{ActivityDraft, Field, FieldErrors, Notice};
use crate::services::FormMode;
use std::fmt::Write as _;

pub const HEADING: &str = "Add Activity Here!";
pub const DIALOG_TITLE: &str = "Are you absolutely sure?";
pub const DIALOG_BODY: &str = "This action cannot be undone. This will delete the activity.";

const HEADERS: [&str; 7] = [
    "No.",
    "Activity",
    "Price",
    "Type Activity",
    "Booking",
    "Accessibility",
    "Action",
];
const DELETE_AFFORDANCE: &str = "[delete]";
const SLIDER_STEPS: usize = 10;

/// Everything the page shows at one instant.
pub struct PageView<'a> {
    pub draft: &'a ActivityDraft,
    pub mode: FormMode,
    pub records: &'a [StoredActivity],
    pub errors: Option<&'a FieldErrors>,
    pub notice: Option<&'a Notice>,
    pub caption: &'a str,
}

pub fn render_page(view: &PageView<'_>) -> String {
    let mut out = String::new();

    if let Some(notice) = view.notice {
        let _ = writeln!(out, "* {} *\n", notice.message);
    }

    out.push_str(&render_form(view.draft, view.mode, view.errors));
    out.push('\n');
    out.push_str(&render_table(view.records, view.caption));

    if let FormMode::ConfirmingDelete(target) = view.mode {
        out.push('\n');
        out.push_str(&render_dialog(target.position));
    }

    out
}

pub fn render_form(draft: &ActivityDraft, mode: FormMode, errors: Option<&FieldErrors>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HEADING}\n");

    let price = if draft.price.is_nan() {
        String::new()
    } else {
        draft.price.to_string()
    };
    let booking = if draft.booking_required { "x" } else { " " };

    let rows = [
        (Field::Activity, format!("Activity Name: [{}]", draft.activity)),
        (Field::Price, format!("Price: [{price}]")),
        (
            Field::Type,
            format!("Activity Type: [{}]", draft.activity_type),
        ),
        (Field::BookingRequired, format!("Booking Required: [{booking}]")),
        (
            Field::Accessibility,
            format!(
                "Accessibility ({} to 1): {}",
                draft.accessibility,
                slider(draft.accessibility)
            ),
        ),
    ];

    for (field, line) in rows {
        let _ = writeln!(out, "{line}");
        if field == Field::Activity {
            let _ = writeln!(out, "  This is your display activity name.");
        }
        if let Some(message) = errors.and_then(|e| e.get(field)) {
            let _ = writeln!(out, "  ! {message}");
        }
    }

    let label = match mode {
        FormMode::Editing(_) => "Update Activity",
        _ => "Add Activity",
    };
    let _ = writeln!(out, "< {label} >");
    out
}

fn slider(value: f64) -> String {
    let filled = if value.is_nan() {
        0
    } else {
        ((value.clamp(0.0, 1.0) * SLIDER_STEPS as f64).round() as usize).min(SLIDER_STEPS)
    };
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(SLIDER_STEPS - filled)
    )
}

/// Table rows with a 1-based row number (display only).
pub fn render_table(records: &[StoredActivity], caption: &str) -> String {
    let rows: Vec<[String; 7]> = records
        .iter()
        .enumerate()
        .map(|(index, stored)| {
            let a = &stored.activity;
            [
                (index + 1).to_string(),
                a.activity.clone(),
                a.price.to_string(),
                a.activity_type.to_string(),
                if a.booking_required { "Yes" } else { "No" }.to_string(),
                a.accessibility.to_string(),
                DELETE_AFFORDANCE.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    let _ = writeln!(out, "{caption}");
    out
}

fn push_row(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

pub fn render_dialog(position: usize) -> String {
    format!(
        "{DIALOG_TITLE}\n{DIALOG_BODY}\nRow {} will be removed. [cancel] [continue]\n",
        position + 1
    )
}
