// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form controller.
//!
//! Owns the record store, the draft, and the interaction mode:
//! 1. Validate the draft on submit
//! 2. Append it, or overwrite the record being edited
//! 3. Reset the draft
//!
//! Deletion goes through a confirmation step that freezes the target
//! position when the dialog opens.

use crate::db::{ActivityStore, RecordId, StoredActivity};
use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityDraft};

/// A record selected by position, remembered with its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub position: usize,
    pub id: RecordId,
}

/// What the page is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Idle,
    /// Next successful submit overwrites this record.
    Editing(Target),
    /// Delete dialog is open for this record.
    ConfirmingDelete(Target),
}

/// Result of a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created { position: usize, id: RecordId },
    Updated { position: usize, id: RecordId },
}

/// Form/validation controller over an [`ActivityStore`].
#[derive(Debug, Default)]
pub struct FormController {
    store: ActivityStore,
    draft: ActivityDraft,
    mode: FormMode,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &ActivityStore {
        &self.store
    }

    pub fn list(&self) -> &[StoredActivity] {
        self.store.list()
    }

    pub fn draft(&self) -> &ActivityDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ActivityDraft {
        &mut self.draft
    }

    pub fn set_draft(&mut self, draft: ActivityDraft) {
        self.draft = draft;
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Position being edited, if any.
    pub fn edit_target(&self) -> Option<usize> {
        match self.mode {
            FormMode::Editing(target) => Some(target.position),
            _ => None,
        }
    }

    /// Position awaiting delete confirmation, if any.
    pub fn pending_delete(&self) -> Option<usize> {
        match self.mode {
            FormMode::ConfirmingDelete(target) => Some(target.position),
            _ => None,
        }
    }

    /// Validate `draft` and commit it.
    ///
    /// On validation failure nothing in the store changes and the rejected
    /// draft stays loaded so the form keeps the user's input.
    pub fn submit(&mut self, draft: ActivityDraft) -> Result<SubmitOutcome> {
        if let FormMode::ConfirmingDelete(_) = self.mode {
            tracing::warn!("Submit ignored while delete confirmation is open");
            return Err(AppError::ConfirmationPending);
        }

        let record = match draft.check() {
            Ok(record) => record,
            Err(errors) => {
                tracing::debug!(%errors, "Draft rejected");
                self.draft = draft;
                return Err(AppError::Validation(errors));
            }
        };

        let outcome = match self.mode {
            FormMode::Editing(target) => {
                self.store.ensure_at(target.position, target.id)?;
                let id = self.store.replace_at(target.position, record)?;
                tracing::info!(position = target.position, %id, "Activity updated");
                SubmitOutcome::Updated {
                    position: target.position,
                    id,
                }
            }
            _ => {
                let id = self.store.append(record);
                let position = self.store.len() - 1;
                tracing::info!(position, %id, "Activity created");
                SubmitOutcome::Created { position, id }
            }
        };

        self.mode = FormMode::Idle;
        self.draft = ActivityDraft::default();
        Ok(outcome)
    }

    /// Submit whatever is currently in the draft.
    pub fn submit_draft(&mut self) -> Result<SubmitOutcome> {
        let draft = self.draft.clone();
        self.submit(draft)
    }

    /// Start editing the record at `position`, pre-filling the draft.
    pub fn begin_edit(&mut self, position: usize) -> Result<()> {
        if let FormMode::ConfirmingDelete(_) = self.mode {
            tracing::warn!(position, "Edit ignored while delete confirmation is open");
            return Err(AppError::ConfirmationPending);
        }

        let stored = self.store.get(position)?;
        self.draft = ActivityDraft::from(&stored.activity);
        self.mode = FormMode::Editing(Target {
            position,
            id: stored.id,
        });

        tracing::debug!(position, id = %stored.id, "Editing activity");
        Ok(())
    }

    /// Leave edit mode and clear the form. No-op when not editing.
    pub fn cancel_edit(&mut self) {
        if let FormMode::Editing(target) = self.mode {
            tracing::debug!(position = target.position, "Edit cancelled");
            self.mode = FormMode::Idle;
            self.draft = ActivityDraft::default();
        }
    }

    /// Open the delete dialog for `position`.
    ///
    /// An edit in progress is abandoned.
    pub fn request_delete(&mut self, position: usize) -> Result<()> {
        if let FormMode::ConfirmingDelete(_) = self.mode {
            tracing::warn!(position, "Delete ignored while another confirmation is open");
            return Err(AppError::ConfirmationPending);
        }

        let id = self.store.get(position)?.id;
        self.cancel_edit();
        self.mode = FormMode::ConfirmingDelete(Target { position, id });

        tracing::debug!(position, %id, "Delete requested");
        Ok(())
    }

    /// Close the delete dialog without touching the store.
    pub fn cancel_delete(&mut self) -> Result<()> {
        match self.mode {
            FormMode::ConfirmingDelete(target) => {
                tracing::debug!(position = target.position, "Delete cancelled");
                self.mode = FormMode::Idle;
                Ok(())
            }
            _ => Err(AppError::NothingPending),
        }
    }

    /// Remove the record captured when the dialog opened.
    pub fn confirm_delete(&mut self) -> Result<Activity> {
        let FormMode::ConfirmingDelete(target) = self.mode else {
            return Err(AppError::NothingPending);
        };

        self.mode = FormMode::Idle;
        self.store.ensure_at(target.position, target.id)?;
        let removed = self.store.remove_at(target.position)?;

        tracing::info!(position = target.position, id = %removed.id, "Activity deleted");
        Ok(removed.activity)
    }
}
