// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_board::models::ActivityDraft;
use activity_board::services::FormController;

/// A draft that passes every validation rule.
#[allow(dead_code)]
pub fn valid_draft(name: &str, price: f64) -> ActivityDraft {
    ActivityDraft {
        activity: name.to_string(),
        price,
        activity_type: "recreational".to_string(),
        booking_required: false,
        accessibility: 0.5,
    }
}

/// A controller pre-populated with one valid record per name, in order.
#[allow(dead_code)]
pub fn controller_with(names: &[&str]) -> FormController {
    let mut form = FormController::new();
    for (i, name) in names.iter().enumerate() {
        form.submit(valid_draft(name, (i + 1) as f64))
            .expect("fixture draft should be valid");
    }
    form
}

/// Snapshot of activity names in store order.
#[allow(dead_code)]
pub fn names(form: &FormController) -> Vec<String> {
    form.list()
        .iter()
        .map(|stored| stored.activity.activity.clone())
        .collect()
}
