// ABOUTME: Generation state machine exposed to the UI layer
// ABOUTME: Idle, Loading, Success and Error phases with checked transitions

use serde::Serialize;
use thiserror::Error;

use namecraft_core::NameResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Invalid state transition from {from:?} to {to:?}")]
    InvalidTransition { from: Phase, to: Phase },
}

/// Presentation state for one generator. Results only exist in `Success`
/// and a message only exists in `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum GenerationState {
    #[default]
    Idle,
    Loading,
    Success {
        results: Vec<NameResult>,
    },
    Error {
        message: String,
    },
}

impl GenerationState {
    pub fn phase(&self) -> Phase {
        match self {
            GenerationState::Idle => Phase::Idle,
            GenerationState::Loading => Phase::Loading,
            GenerationState::Success { .. } => Phase::Success,
            GenerationState::Error { .. } => Phase::Error,
        }
    }

    pub fn results(&self) -> &[NameResult] {
        match self {
            GenerationState::Success { results } => results,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            GenerationState::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, GenerationState::Loading)
    }

    /// Enter `Loading`. Allowed from any phase except `Loading`; discards prior results.
    pub fn begin(&mut self) -> Result<(), StateError> {
        if self.is_loading() {
            return Err(StateError::InvalidTransition {
                from: Phase::Loading,
                to: Phase::Loading,
            });
        }
        *self = GenerationState::Loading;
        Ok(())
    }

    pub fn succeed(&mut self, results: Vec<NameResult>) -> Result<(), StateError> {
        self.leave_loading(Phase::Success)?;
        *self = GenerationState::Success { results };
        Ok(())
    }

    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), StateError> {
        self.leave_loading(Phase::Error)?;
        *self = GenerationState::Error {
            message: message.into(),
        };
        Ok(())
    }

    fn leave_loading(&self, to: Phase) -> Result<(), StateError> {
        if self.is_loading() {
            Ok(())
        } else {
            Err(StateError::InvalidTransition {
                from: self.phase(),
                to,
            })
        }
    }
}
