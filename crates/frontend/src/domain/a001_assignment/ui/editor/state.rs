use crate::shared::http::{ApiError, ApiResponse};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Idle,
    Submitting {
        ticket: Ticket,
    },
    Succeeded,
    Failed {
        message: String,
    },
}

/// Identifies one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// What the editor must do after a completion was accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEffect {
    NotifySuccess,
    NotifyFailure(String),
}

/// Submission lifecycle of the editor.
///
/// A completion is applied at most once and only for the ticket currently
/// in flight; after `dismiss` every completion is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorMachine {
    state: EditorState,
    issued: u64,
    dismissed: bool,
}

impl EditorMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, EditorState::Submitting { .. })
    }

    /// None while a submission is in flight or after dismissal
    pub fn begin_submit(&mut self) -> Option<Ticket> {
        if self.dismissed || self.is_submitting() {
            return None;
        }
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.state = EditorState::Submitting { ticket };
        Some(ticket)
    }

    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: &Result<ApiResponse, ApiError>,
    ) -> Option<EditorEffect> {
        if self.dismissed {
            return None;
        }
        match self.state {
            EditorState::Submitting { ticket: current } if current == ticket => {}
            _ => return None,
        }

        match outcome {
            // The hook reports every non-2xx status as an error.
            Ok(_) => {
                self.state = EditorState::Succeeded;
                Some(EditorEffect::NotifySuccess)
            }
            Err(e) => {
                let message = e.to_string();
                self.state = EditorState::Failed {
                    message: message.clone(),
                };
                Some(EditorEffect::NotifyFailure(message))
            }
        }
    }

    /// Close the editor. True when the caller should navigate away, i.e. the
    /// first dismissal that does not follow a success (which already navigated).
    pub fn dismiss(&mut self) -> bool {
        if self.dismissed {
            return false;
        }
        self.dismissed = true;
        let navigate = self.state != EditorState::Succeeded;
        self.state = EditorState::Idle;
        navigate
    }
}
