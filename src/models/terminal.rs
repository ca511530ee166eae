//! Terminal wire protocol types.
//!
//! Frames on the terminal WebSocket are two-element JSON arrays:
//! outbound input is `["stdin", text]`, inbound output is
//! `[channel, text]` with `text` written verbatim to the widget.

use serde::Deserialize;

/// A terminal session as listed/created by the terminals API.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TerminalModel {
    pub name: String,
}

/// One frame on the terminal socket.
#[derive(Clone, Debug, PartialEq)]
pub struct TerminalFrame {
    pub channel: String,
    pub text: String,
}

impl TerminalFrame {
    /// An outbound input frame.
    pub fn stdin(text: impl Into<String>) -> Self {
        Self {
            channel: "stdin".to_string(),
            text: text.into(),
        }
    }

    /// Encodes the frame as its JSON array wire form.
    pub fn encode(&self) -> String {
        serde_json::to_string(&(self.channel.as_str(), self.text.as_str()))
            .unwrap_or_else(|_| "[\"stdin\",\"\"]".to_string())
    }

    /// Parses an inbound frame.
    ///
    /// Returns `None` for anything that is not a JSON array whose first
    /// two elements are strings; extra elements are ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_str(raw).ok()?;
        let items = value.as_array()?;
        let channel = items.first()?.as_str()?.to_string();
        let text = items.get(1)?.as_str()?.to_string();
        Some(Self { channel, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdin_frame_encodes_verbatim() {
        // The encoded payload carries exactly the text the widget echoed.
        let frame = TerminalFrame::stdin("ls -la\r");
        assert_eq!(frame.encode(), r#"["stdin","ls -la\r"]"#);
    }

    #[test]
    fn test_encode_escapes_json_specials() {
        let frame = TerminalFrame::stdin("echo \"hi\"\r");
        assert_eq!(frame.encode(), r#"["stdin","echo \"hi\"\r"]"#);
        // And it round-trips.
        assert_eq!(TerminalFrame::parse(&frame.encode()), Some(frame));
    }

    #[test]
    fn test_parse_inbound_frame() {
        let frame = TerminalFrame::parse(r#"["stdout", "total 0\r\n"]"#).unwrap();
        assert_eq!(frame.channel, "stdout");
        assert_eq!(frame.text, "total 0\r\n");
    }

    #[test]
    fn test_parse_ignores_trailing_elements() {
        let frame = TerminalFrame::parse(r#"["set_size", "ok", 24, 80]"#).unwrap();
        assert_eq!(frame.channel, "set_size");
        assert_eq!(frame.text, "ok");
    }

    #[test]
    fn test_parse_rejects_malformed_frames() {
        assert_eq!(TerminalFrame::parse("not json"), None);
        assert_eq!(TerminalFrame::parse("{\"a\": 1}"), None);
        assert_eq!(TerminalFrame::parse("[1, \"x\"]"), None);
        assert_eq!(TerminalFrame::parse("[\"stdout\"]"), None);
        assert_eq!(TerminalFrame::parse("[\"stdout\", 42]"), None);
    }

    #[test]
    fn test_single_character_output_is_a_frame() {
        // Echoed keystrokes come back one character at a time.
        let frame = TerminalFrame::parse(r#"["stdout", "l"]"#).unwrap();
        assert_eq!(frame.text, "l");
    }
}
