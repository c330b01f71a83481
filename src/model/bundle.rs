use serde::{Deserialize, Serialize};

/// Column-oriented match collection, as returned by the match-query calls.
///
/// Each field is one column; index `i` across all columns describes one
/// logical match. The backend omits empty repeated fields from its JSON, so
/// every column defaults to empty when absent. An all-empty bundle is the
/// "no matches" case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchBundle {
    pub singles: Vec<bool>,
    pub date: Vec<String>,
    pub time: Vec<String>,
    pub location: Vec<String>,
    pub players: Vec<String>,
    pub confirmed: Vec<bool>,
    /// Server-side handle for each match. The column may be absent entirely
    /// (older bundles); when present it must line up with the rest.
    pub key: Vec<String>,
}

impl MatchBundle {
    /// Per-column lengths, in declaration order. Used for the equal-length
    /// check and for error reporting.
    pub fn column_lengths(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("singles", self.singles.len()),
            ("date", self.date.len()),
            ("time", self.time.len()),
            ("location", self.location.len()),
            ("players", self.players.len()),
            ("confirmed", self.confirmed.len()),
            ("key", self.key.len()),
        ]
    }

    /// True when every column is empty.
    pub fn is_empty(&self) -> bool {
        self.column_lengths().iter().all(|&(_, n)| n == 0)
    }
}
