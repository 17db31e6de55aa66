//! Chat wire protocol
//!
//! Newline-delimited UTF-8 text: a name prompt, one name line, then chat lines.

pub mod parser;
pub mod responses;

pub use parser::{parse_message, parse_name};
pub use responses::{NAME_PROMPT, chat_message, join_announcement, leave_announcement};
