//! Lifecycle of a single relay call.

use std::fmt;

use crate::clients::{Destination, RelayError};

/// Stage of a relay call.
///
/// ```text
/// Idle -> Fetching -> Responding -> Uploading -> Succeeded
///             |            |            |
///             +------------+------------+-> Failed
/// ```
///
/// Transitions only move forward. A call is one-shot: once it reaches
/// `Succeeded` or `Failed` it is never restarted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UploadState {
    /// Nothing has been sent yet.
    Idle,
    /// Waiting for the origin's response headers.
    Fetching,
    /// Origin headers received; building the upload request.
    Responding,
    /// Streaming the source body to the destination.
    Uploading,
    /// The destination accepted the upload.
    Succeeded,
    /// The call failed.
    Failed,
}

impl UploadState {
    /// Returns `true` if the state allows no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    /// Returns `true` if moving from `self` to `next` is allowed.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Fetching)
                | (Self::Fetching, Self::Responding)
                | (Self::Responding, Self::Uploading)
                | (Self::Uploading, Self::Succeeded)
                | (Self::Fetching | Self::Responding | Self::Uploading, Self::Failed)
        )
    }
}

impl fmt::Display for UploadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
            Self::Responding => "responding",
            Self::Uploading => "uploading",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Tracks and logs the state of one relay call.
#[derive(Debug)]
pub(crate) struct Lifecycle {
    destination: Destination,
    state: UploadState,
}

impl Lifecycle {
    pub(crate) const fn new(destination: Destination) -> Self {
        Self {
            destination,
            state: UploadState::Idle,
        }
    }

    #[cfg(test)]
    pub(crate) const fn state(&self) -> UploadState {
        self.state
    }

    /// Moves to `next`, ignoring transitions the state machine forbids.
    pub(crate) fn advance(&mut self, next: UploadState) {
        if !self.state.can_transition_to(next) {
            tracing::debug!(
                "Ignoring {} relay transition {} -> {}",
                self.destination,
                self.state,
                next
            );
            return;
        }
        tracing::debug!("{} relay: {} -> {}", self.destination, self.state, next);
        self.state = next;
    }

    /// Settles the call from its result.
    pub(crate) fn settle<T>(&mut self, result: &Result<T, RelayError>) {
        match result {
            Ok(_) => self.advance(UploadState::Succeeded),
            Err(e) => {
                tracing::error!("{} relay failed while {}: {}", self.destination, self.state, e);
                self.advance(UploadState::Failed);
            }
        }
    }
}
