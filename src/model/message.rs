use serde::Serialize;

/// A single chat message posted to a match.
///
/// The backend stores messages as `"author|body"` strings; the body may
/// itself contain pipes, the author name may not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchMessage {
    pub author: String,
    pub body: String,
}

impl MatchMessage {
    /// Parse one stored message string. A string with no separator is
    /// treated as all body, with an empty author.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('|') {
            Some((author, body)) => Self {
                author: author.to_string(),
                body: body.to_string(),
            },
            None => Self {
                author: String::new(),
                body: raw.to_string(),
            },
        }
    }
}
