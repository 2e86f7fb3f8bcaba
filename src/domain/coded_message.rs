//! Status codes carried inside error message text.
//!
//! Any layer may report a failure as `"<status>:<text>"`. The prefix is
//! decoded exactly once, by the exception filter, and the first colon is the
//! separator: `"404:Missing: user"` decodes to status 404 with the text
//! `"Missing: user"`. A prefix that is not an HTTP status decodes to 500, so
//! `"Error: timeout"` becomes status 500 with the text `" timeout"`.

use std::fmt;

use axum::http::StatusCode;

/// Status reported for failures that carry no usable code
pub const DEFAULT_ERROR_STATUS: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

const SEPARATOR: char = ':';

/// An error message, split into its embedded status and visible text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodedMessage {
    /// No separator present; the whole message is user-visible text
    Plain(String),
    /// A `prefix:text` message. `status` is the decoded prefix, or 500 when
    /// the prefix is not a valid HTTP status.
    Coded { status: StatusCode, text: String },
}

impl CodedMessage {
    /// Decode a message using the first-colon rule
    pub fn parse(message: &str) -> Self {
        match message.split_once(SEPARATOR) {
            None => Self::Plain(message.to_string()),
            Some((prefix, text)) => Self::Coded {
                status: decode_status(prefix),
                text: text.to_string(),
            },
        }
    }

    /// Build a message carrying an explicit status
    pub fn coded(status: StatusCode, text: impl Into<String>) -> Self {
        Self::Coded {
            status,
            text: text.into(),
        }
    }

    /// Embedded status, if the message had a prefix
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Plain(_) => None,
            Self::Coded { status, .. } => Some(*status),
        }
    }

    /// User-visible text with any prefix removed
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Coded { text, .. } => text,
        }
    }

    pub fn into_parts(self) -> (Option<StatusCode>, String) {
        match self {
            Self::Plain(text) => (None, text),
            Self::Coded { status, text } => (Some(status), text),
        }
    }
}

impl fmt::Display for CodedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(text) => f.write_str(text),
            Self::Coded { status, text } => write!(f, "{}{}{}", status.as_u16(), SEPARATOR, text),
        }
    }
}

fn decode_status(prefix: &str) -> StatusCode {
    prefix
        .trim()
        .parse::<u16>()
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(DEFAULT_ERROR_STATUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_message_has_no_status() {
        let parsed = CodedMessage::parse("Not found");
        assert_eq!(parsed, CodedMessage::Plain("Not found".to_string()));
        assert_eq!(parsed.status(), None);
        assert_eq!(parsed.text(), "Not found");
    }

    #[test]
    fn test_numeric_prefix_is_decoded() {
        let parsed = CodedMessage::parse("409:a@b.com is already in use.");
        assert_eq!(parsed.status(), Some(StatusCode::CONFLICT));
        assert_eq!(parsed.text(), "a@b.com is already in use.");
    }

    #[test]
    fn test_only_first_colon_separates() {
        let parsed = CodedMessage::parse("400:field: must be set: now");
        assert_eq!(parsed.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(parsed.text(), "field: must be set: now");
    }

    #[test]
    fn test_non_numeric_prefix_falls_back_to_500() {
        // Free text containing a colon is indistinguishable from a coded message
        let parsed = CodedMessage::parse("Error: timeout: retrying");
        assert_eq!(parsed.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(parsed.text(), " timeout: retrying");
    }

    #[test]
    fn test_out_of_range_prefix_falls_back_to_500() {
        for message in ["0:zero", "42:too small", "1000:too big", ":empty prefix"] {
            assert_eq!(
                CodedMessage::parse(message).status(),
                Some(StatusCode::INTERNAL_SERVER_ERROR),
                "{message}"
            );
        }
    }

    #[test]
    fn test_prefix_whitespace_is_ignored() {
        let parsed = CodedMessage::parse(" 404 :gone");
        assert_eq!(parsed.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(parsed.text(), "gone");
    }

    #[test]
    fn test_display_reencodes_status() {
        let message = CodedMessage::coded(StatusCode::BAD_REQUEST, "bad id");
        assert_eq!(message.to_string(), "400:bad id");
        assert_eq!(CodedMessage::parse(&message.to_string()), message);
    }

    #[test]
    fn test_into_parts() {
        assert_eq!(
            CodedMessage::parse("401:who are you").into_parts(),
            (Some(StatusCode::UNAUTHORIZED), "who are you".to_string())
        );
        assert_eq!(
            CodedMessage::parse("plain").into_parts(),
            (None, "plain".to_string())
        );
    }
}
