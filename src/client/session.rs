//! Client session management
//!
//! Tracks the lifecycle of one connection:
//! `Connecting -> Handshaking -> Active -> Closed`.

use std::fmt;

use log::{debug, warn};

use crate::client::ClientId;

/// Lifecycle state of a single connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepted, nothing sent yet
    Connecting,
    /// Prompt sent, waiting for a name
    Handshaking,
    /// Registered and relaying lines
    Active,
    /// Terminal
    Closed,
}

impl SessionState {
    /// Whether `next` is a legal successor of `self`.
    ///
    /// Any I/O failure before `Active` goes straight to `Closed`.
    pub fn can_transition_to(self, next: SessionState) -> bool {
        use SessionState::*;
        matches!(
            (self, next),
            (Connecting, Handshaking)
                | (Connecting, Closed)
                | (Handshaking, Active)
                | (Handshaking, Closed)
                | (Active, Closed)
        )
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionState::Connecting => "connecting",
            SessionState::Handshaking => "handshaking",
            SessionState::Active => "active",
            SessionState::Closed => "closed",
        };
        f.write_str(label)
    }
}

/// Manages client session lifecycle
#[derive(Debug)]
pub struct ClientSession {
    id: ClientId,
    state: SessionState,
}

impl ClientSession {
    pub fn new(id: ClientId) -> Self {
        Self {
            id,
            state: SessionState::Connecting,
        }
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Moves to `next` if the transition is legal; returns whether it moved.
    pub fn transition(&mut self, next: SessionState) -> bool {
        if !self.state.can_transition_to(next) {
            warn!(
                "Session {} rejected transition {} -> {}",
                self.id, self.state, next
            );
            return false;
        }

        debug!("Session {}: {} -> {}", self.id, self.state, next);
        self.state = next;
        true
    }
}
