//! Client input parsing
//!
//! Turns raw lines read from a client into names and chat text.

/// Parse the handshake line into a display name.
///
/// Empty names are accepted as-is.
pub fn parse_name(raw: &str) -> String {
    raw.trim().to_string()
}

/// Parse a chat line, dropping the terminator and surrounding whitespace
pub fn parse_message(raw: &str) -> &str {
    raw.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_trims_line_ending() {
        assert_eq!(parse_name("alice\n"), "alice");
        assert_eq!(parse_name("  bob \r\n"), "bob");
    }

    #[test]
    fn test_parse_name_accepts_empty() {
        assert_eq!(parse_name("\n"), "");
        assert_eq!(parse_name("   "), "");
    }

    #[test]
    fn test_parse_message_keeps_inner_spaces() {
        assert_eq!(parse_message("hello   world\r\n"), "hello   world");
        assert_eq!(parse_message("\t hi \n"), "hi");
    }
}
