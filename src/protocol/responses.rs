//! Server-to-client messages
//!
//! Defines the prompt and the announcement formats relayed to clients.

/// Sent on connect, without a trailing newline
pub const NAME_PROMPT: &str = "Enter your name: ";

/// Terminates every relayed line
pub const LINE_TERMINATOR: &str = "\n";

/// Format the announcement sent when a client becomes active
pub fn join_announcement(name: &str) -> String {
    format!("{} has joined the chat", name)
}

/// Format the announcement sent when a client disconnects
pub fn leave_announcement(name: &str) -> String {
    format!("{} has left the chat", name)
}

/// Format a chat line relayed on behalf of `name`
pub fn chat_message(name: &str, text: &str) -> String {
    format!("{}: {}", name, text)
}
