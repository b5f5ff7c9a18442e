// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end page sessions driven by typed commands.

use activity_board::config::Config;
use activity_board::models::ActivityType;
use activity_board::page::render::{DIALOG_TITLE, HEADING};
use activity_board::page::{Page, PageResponse};
use chrono::{DateTime, TimeZone, Utc};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
}

fn run(page: &mut Page, lines: &[&str]) -> PageResponse {
    let mut last = PageResponse::Text(String::new());
    for line in lines {
        last = page.handle_line(line, now());
    }
    last
}

fn rendered(response: PageResponse) -> String {
    match response {
        PageResponse::Render(text) => text,
        other => panic!("expected a render, got {other:?}"),
    }
}

#[test]
fn test_add_edit_delete_session() {
    let mut page = Page::new(Config::default());

    run(
        &mut page,
        &[
            "set activity Play chess",
            "set price 5",
            "set type recreational",
            "set accessibility 0.5",
            "submit",
            "set activity Learn Rust",
            "set price 20",
            "set type education",
            "set booking yes",
            "submit",
        ],
    );
    assert_eq!(page.form().list().len(), 2);
    assert!(page.form().list()[1].activity.booking_required);

    let view = rendered(run(&mut page, &["edit 1"]));
    assert!(view.contains("Activity Name: [Play chess]"));
    assert!(view.contains("< Update Activity >"));

    run(&mut page, &["set type social", "submit"]);
    assert_eq!(
        page.form().list()[0].activity.activity_type,
        ActivityType::Social
    );

    let view = rendered(run(&mut page, &["delete 1"]));
    assert!(view.contains(DIALOG_TITLE));
    assert_eq!(page.form().list().len(), 2);

    let view = rendered(run(&mut page, &["confirm"]));
    assert!(!view.contains(DIALOG_TITLE));
    assert_eq!(page.form().list().len(), 1);
    assert_eq!(page.form().list()[0].activity.activity, "Learn Rust");
}

#[test]
fn test_rejected_submit_renders_inline_errors() {
    let mut page = Page::new(Config::default());

    let view = rendered(run(
        &mut page,
        &["set activity A", "set price abc", "set type sports", "submit"],
    ));

    assert!(view.starts_with(HEADING));
    assert!(view.contains("  ! Activity must be at least 2 characters."));
    assert!(view.contains("  ! Price must be a number and at least 1 characters."));
    assert!(view.contains("  ! Invalid enum value."));
    assert!(page.form().list().is_empty());
    // Input is kept for correction
    assert_eq!(page.form().draft().activity, "A");
}

#[test]
fn test_long_price_is_accepted() {
    let mut page = Page::new(Config::default());

    run(
        &mut page,
        &["set activity Chess", "set price 99999999999999999999", "submit"],
    );

    assert!(page.errors().is_none());
    assert_eq!(page.form().list().len(), 1);
    assert_eq!(page.form().list()[0].activity.price, 1e20);
}

#[test]
fn test_cancel_closes_dialog_then_edit() {
    let mut page = Page::new(Config::default());
    run(
        &mut page,
        &["set activity Knit", "set price 2", "submit", "edit 1"],
    );

    run(&mut page, &["delete 1", "cancel"]);
    assert_eq!(page.form().list().len(), 1);
    assert_eq!(page.form().pending_delete(), None);
    // Opening the dialog abandoned the edit
    assert_eq!(page.form().edit_target(), None);
}

#[test]
fn test_export_and_help() {
    let mut page = Page::new(Config::default());
    run(
        &mut page,
        &["set activity Knit", "set price 2", "set type diy", "submit"],
    );

    let PageResponse::Text(json) = run(&mut page, &["export"]) else {
        panic!("export should return text");
    };
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["activity"], "Knit");
    assert_eq!(value[0]["type"], "diy");
    assert_eq!(value[0]["price"], 2.0);

    let PageResponse::Text(help) = run(&mut page, &["help"]) else {
        panic!("help should return text");
    };
    assert!(help.contains("delete <row>"));

    assert_eq!(run(&mut page, &["quit"]), PageResponse::Quit);
}

#[test]
fn test_caption_from_config() {
    let config = Config {
        table_caption: "My weekend".to_string(),
        ..Config::default()
    };
    let page = Page::new(config);

    assert!(page.render(now()).trim_end().ends_with("My weekend"));
}
