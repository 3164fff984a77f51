//! Deletion confirmation gate
//!
//! ```text
//! Idle ──request──▶ PendingConfirm ──confirm──▶ (delete applied) Idle
//!                        │  ▲
//!                        │  └── request (replaces target)
//!                        └──cancel──▶ Idle
//! ```
//!
//! At most one record is pending; a new request replaces the target.

use serde::Serialize;
use shared::error::AppResult;

use crate::services::CrudService;
use crate::store::Record;
use crate::utils::messages;

/// Record awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingDelete {
    pub id: String,
    /// Display name shown in the prompt
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeletionState {
    #[default]
    Idle,
    PendingConfirm(PendingDelete),
}

/// Confirmation dialog content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletePrompt {
    pub title: &'static str,
    pub body: &'static str,
    pub target: PendingDelete,
}

#[derive(Debug, Clone, Default)]
pub struct DeletionGate {
    state: DeletionState,
}

impl DeletionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DeletionState {
        &self.state
    }

    pub fn pending(&self) -> Option<&PendingDelete> {
        match &self.state {
            DeletionState::PendingConfirm(p) => Some(p),
            DeletionState::Idle => None,
        }
    }

    /// Ask for confirmation of deleting `record`
    pub fn request<R: Record>(&mut self, record: &R) {
        if let Some(previous) = self.pending() {
            tracing::debug!(resource = R::RESOURCE, replaced = %previous.id, id = record.id(), "Pending delete replaced");
        }
        self.state = DeletionState::PendingConfirm(PendingDelete {
            id: record.id().to_string(),
            name: record.name().to_string(),
        });
    }

    /// Drop the pending target without touching the store
    pub fn cancel(&mut self) {
        self.state = DeletionState::Idle;
    }

    /// Apply the pending delete through `service`
    ///
    /// `None` when nothing is pending. The gate returns to Idle whatever the
    /// outcome; a target that vanished meanwhile yields the service's
    /// not-found error.
    pub fn confirm<S: CrudService>(&mut self, service: &S) -> Option<AppResult<S::Record>> {
        match std::mem::take(&mut self.state) {
            DeletionState::Idle => None,
            DeletionState::PendingConfirm(target) => Some(service.delete(&target.id)),
        }
    }

    /// Dialog content while a delete is pending
    pub fn prompt(&self) -> Option<DeletePrompt> {
        self.pending().map(|target| DeletePrompt {
            title: messages::DELETE_PROMPT_TITLE,
            body: messages::DELETE_PROMPT_BODY,
            target: target.clone(),
        })
    }
}
