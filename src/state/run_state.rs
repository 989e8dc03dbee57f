//! Run state definitions for the session lifecycle
//!
//! A run moves strictly forward: `NotStarted -> SessionActive -> Closed`.
use crate::ScribeError;
use std::fmt;

/// Represents the current state of a crawl run's browsing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    /// No session has been opened yet
    #[default]
    NotStarted,

    /// The session is open and pages may be fetched
    SessionActive,

    /// The session has been released; nothing further may happen
    Closed,
}

impl RunState {
    /// Returns true if pages may be fetched in this state
    pub fn is_active(&self) -> bool {
        matches!(self, Self::SessionActive)
    }

    /// Returns true if this is the terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns true if moving from `self` to `next` is allowed
    pub fn can_transition_to(&self, next: RunState) -> bool {
        matches!(
            (self, next),
            (Self::NotStarted, Self::SessionActive) | (Self::SessionActive, Self::Closed)
        )
    }

    /// Moves to `next`, or reports the illegal transition
    pub fn transition(&mut self, next: RunState) -> Result<(), ScribeError> {
        if !self.can_transition_to(next) {
            return Err(ScribeError::InvalidTransition {
                from: *self,
                to: next,
            });
        }
        *self = next;
        Ok(())
    }

    /// Short lowercase label used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::SessionActive => "session_active",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
