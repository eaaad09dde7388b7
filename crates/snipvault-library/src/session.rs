use snipvault_core::models::conflict::DuplicateConflicts;
use snipvault_core::models::payload::SavePayload;
use snipvault_core::models::snippet::SnippetId;
use snipvault_storage::kv::KeyValueStore;

use crate::error::LibraryError;
use crate::library::Library;
use crate::outcome::SaveOutcome;

/// Where an editing session stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Idle,
    /// A form is open, for a new snippet (`editing: None`) or an existing one.
    Editing {
        editing: Option<SnippetId>,
        /// Message from the last failed submit, if any.
        error: Option<String>,
    },
    /// The last submit collided with other snippets and awaits a decision.
    PendingConflict {
        payload: SavePayload,
        conflicts: DuplicateConflicts,
        trimmed: bool,
    },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Editing { .. } => "editing",
            Self::PendingConflict { .. } => "pending_conflict",
        }
    }
}

/// Drives the create/edit form flow: `Idle → Editing → PendingConflict → Idle`.
///
/// The library only ever sees payloads; this type remembers which form is
/// open and which payload is waiting on a forced save.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn start_create(&mut self) {
        self.state = SessionState::Editing {
            editing: None,
            error: None,
        };
    }

    pub fn start_edit(&mut self, id: SnippetId) {
        self.state = SessionState::Editing {
            editing: Some(id),
            error: None,
        };
    }

    /// Submit the open form.
    ///
    /// A save returns the session to `Idle`, a conflict parks the payload in
    /// `PendingConflict`, and an error keeps the form open with the message.
    /// The payload must target the snippet the form was opened for: no id
    /// after [`Session::start_create`], the same id after
    /// [`Session::start_edit`].
    pub fn submit<S: KeyValueStore>(
        &mut self,
        library: &mut Library<S>,
        payload: SavePayload,
    ) -> Result<SaveOutcome, LibraryError> {
        let target = match &self.state {
            SessionState::Idle => return Err(self.invalid("submit")),
            SessionState::Editing { editing, .. } => editing.as_ref(),
            SessionState::PendingConflict { payload, .. } => payload.id.as_ref(),
        };
        if payload.id.as_ref() != target {
            return Err(self.invalid("submit for another snippet"));
        }

        match library.save(&payload) {
            Ok(outcome @ SaveOutcome::Saved { .. }) => {
                self.state = SessionState::Idle;
                Ok(outcome)
            }
            Ok(SaveOutcome::Conflict {
                conflicts,
                candidate,
                trimmed,
            }) => {
                self.state = SessionState::PendingConflict {
                    payload,
                    conflicts: conflicts.clone(),
                    trimmed,
                };
                Ok(SaveOutcome::Conflict {
                    conflicts,
                    candidate,
                    trimmed,
                })
            }
            Err(e) => {
                self.state = SessionState::Editing {
                    editing: payload.id,
                    error: Some(e.to_string()),
                };
                Err(e)
            }
        }
    }

    /// Save the parked payload despite its conflicts.
    ///
    /// Does nothing and returns `Ok(None)` unless a conflict is pending.
    pub fn force_save<S: KeyValueStore>(
        &mut self,
        library: &mut Library<S>,
    ) -> Result<Option<SaveOutcome>, LibraryError> {
        let SessionState::PendingConflict { payload, .. } = &self.state else {
            return Ok(None);
        };
        let payload = payload.clone();

        match library.force_save(&payload) {
            Ok(outcome) => {
                self.state = SessionState::Idle;
                Ok(Some(outcome))
            }
            Err(e) => {
                self.state = SessionState::Editing {
                    editing: payload.id,
                    error: Some(e.to_string()),
                };
                Err(e)
            }
        }
    }

    /// Back out of a pending conflict to keep editing.
    pub fn dismiss_conflict(&mut self) -> Result<(), LibraryError> {
        let SessionState::PendingConflict { payload, .. } = &self.state else {
            return Err(self.invalid("dismiss a conflict"));
        };
        self.state = SessionState::Editing {
            editing: payload.id.clone(),
            error: None,
        };
        Ok(())
    }

    pub fn close(&mut self) {
        self.state = SessionState::Idle;
    }

    fn invalid(&self, action: &'static str) -> LibraryError {
        LibraryError::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }
}
