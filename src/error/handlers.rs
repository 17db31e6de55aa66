//! Error handlers
//!
//! Provides error reporting for failures that reach the top level.

use crate::error::types::{ServerError, SessionError};
use log::{error, info};

/// Handle a fatal server error
pub fn handle_error(err: &ServerError) {
    error!("Chat Server Error: {}", err);
}

/// Report how a session ended.
///
/// A handshake abort is an ordinary disconnect, not worth an error line.
pub fn handle_session_error(client: &str, err: &SessionError) {
    match err {
        SessionError::HandshakeAborted => {
            info!("Connection {} closed during handshake", client)
        }
        _ => error!("Session {} failed: {}", client, err),
    }
}
