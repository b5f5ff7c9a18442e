// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The activity page: form, table, and delete dialog.
//!
//! Turns user commands into controller calls and keeps the view-only
//! state (inline field errors and the success notice).

pub mod command;
pub mod render;

pub use command::{Command, FieldInput, HELP};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Field, FieldErrors, Notice};
use crate::services::{FormController, FormMode, SubmitOutcome};
use chrono::{DateTime, Utc};
use render::PageView;

/// What the host should show after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum PageResponse {
    /// Redraw the whole page
    Render(String),
    /// Show a message without redrawing
    Text(String),
    Quit,
}

/// One page session.
pub struct Page {
    config: Config,
    form: FormController,
    errors: Option<FieldErrors>,
    notice: Option<Notice>,
}

impl Page {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            form: FormController::new(),
            errors: None,
            notice: None,
        }
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Inline errors from the last rejected submit.
    pub fn errors(&self) -> Option<&FieldErrors> {
        self.errors.as_ref()
    }

    /// Success notice, if still visible at `now`.
    pub fn notice(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|n| n.is_live(now, self.config.notice_ttl()))
    }

    pub fn render(&self, now: DateTime<Utc>) -> String {
        render::render_page(&PageView {
            draft: self.form.draft(),
            mode: self.form.mode(),
            records: self.form.list(),
            errors: self.errors.as_ref(),
            notice: self.notice(now),
            caption: &self.config.table_caption,
        })
    }

    /// Current list as pretty JSON.
    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self.form.list())
            .map_err(|e| AppError::Internal(anyhow::anyhow!("JSON export failed: {}", e)))
    }

    /// Parse and handle one input line.
    pub fn handle_line(&mut self, line: &str, now: DateTime<Utc>) -> PageResponse {
        match Command::parse(line) {
            Ok(command) => self.handle(command, now),
            Err(err) => self.report(err),
        }
    }

    pub fn handle(&mut self, command: Command, now: DateTime<Utc>) -> PageResponse {
        match self.apply(command, now) {
            Ok(response) => response,
            Err(AppError::Validation(errors)) => {
                self.errors = Some(errors);
                PageResponse::Render(self.render(now))
            }
            Err(err) => self.report(err),
        }
    }

    fn apply(&mut self, command: Command, now: DateTime<Utc>) -> Result<PageResponse> {
        match command {
            Command::Set(input) => {
                if let FormMode::ConfirmingDelete(_) = self.form.mode() {
                    return Err(AppError::ConfirmationPending);
                }
                self.set_field(input);
            }
            Command::Submit => {
                let outcome = self.form.submit_draft()?;
                self.errors = None;
                self.notice = Some(match outcome {
                    SubmitOutcome::Created { .. } => Notice::created(now),
                    SubmitOutcome::Updated { .. } => Notice::updated(now),
                });
            }
            Command::Edit(row) => {
                let position = self.position_for_row(row)?;
                self.form.begin_edit(position)?;
                self.errors = None;
            }
            Command::Cancel => match self.form.mode() {
                FormMode::ConfirmingDelete(_) => self.form.cancel_delete()?,
                FormMode::Editing(_) => {
                    self.form.cancel_edit();
                    self.errors = None;
                }
                FormMode::Idle => {
                    return Ok(PageResponse::Text("Nothing to cancel.".to_string()));
                }
            },
            Command::Delete(row) => {
                let position = self.position_for_row(row)?;
                self.form.request_delete(position)?;
                self.errors = None;
            }
            Command::Confirm => {
                self.form.confirm_delete()?;
            }
            Command::Show => {}
            Command::Export => return self.export_json().map(PageResponse::Text),
            Command::Help => return Ok(PageResponse::Text(HELP.to_string())),
            Command::Quit => return Ok(PageResponse::Quit),
        }

        Ok(PageResponse::Render(self.render(now)))
    }

    fn set_field(&mut self, input: FieldInput) {
        let draft = self.form.draft_mut();
        let field = match input {
            FieldInput::Activity(value) => {
                draft.activity = value;
                Field::Activity
            }
            FieldInput::Price(value) => {
                draft.price = value;
                Field::Price
            }
            FieldInput::Type(value) => {
                draft.activity_type = value;
                Field::Type
            }
            FieldInput::BookingRequired(value) => {
                draft.booking_required = value;
                Field::BookingRequired
            }
            FieldInput::Accessibility(value) => {
                draft.accessibility = value;
                Field::Accessibility
            }
        };

        if let Some(errors) = self.errors.as_mut() {
            errors.remove(field);
        }
        if self.errors.as_ref().is_some_and(FieldErrors::is_empty) {
            self.errors = None;
        }
    }

    /// Rows typed by the user are 1-based and may not exist.
    fn position_for_row(&self, row: usize) -> Result<usize> {
        let len = self.form.store().len();
        if row == 0 || row > len {
            return Err(AppError::BadCommand(format!("no row {row}")));
        }
        Ok(row - 1)
    }

    fn report(&self, err: AppError) -> PageResponse {
        if err.is_programmer_error() {
            tracing::error!(error = %err, "Stale position in page command");
            return PageResponse::Text("Something went wrong; try again.".to_string());
        }

        match &err {
            AppError::Internal(inner) => {
                tracing::error!(error = %inner, "Internal error");
                PageResponse::Text("Something went wrong; try again.".to_string())
            }
            _ => {
                tracing::warn!(error = %err, "Command rejected");
                PageResponse::Text(err.to_string())
            }
        }
    }
}
