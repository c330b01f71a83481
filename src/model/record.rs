use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::Result;

const DATE_FORMAT: &str = "%m/%d/%Y";
const TIME_FORMAT: &str = "%H:%M";

/// One logical match, row-oriented, as bound by the view layer.
///
/// `date`, `time`, `location` and `players` are opaque display strings; the
/// list-building code never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Server-side handle, needed for join/cancel/message calls. `None` when
    /// the source bundle carried no key column.
    pub key: Option<String>,
    /// True for singles play, false for doubles.
    pub singles: bool,
    pub date: String,
    pub time: String,
    pub location: String,
    /// Display string of participants, `", "`-joined entries like
    /// `"Ann Lee (4.0F)"`.
    pub players: String,
    pub confirmed: bool,
}

impl MatchRecord {
    /// Split the `players` display string into its per-player entries.
    pub fn player_list(&self) -> Vec<&str> {
        if self.players.is_empty() {
            return vec![];
        }
        self.players.split(", ").collect()
    }

    /// Combine the `date` and `time` display strings into a
    /// [`NaiveDateTime`]. The wire formats are `MM/DD/YYYY` and `HH:MM`.
    pub fn date_time(&self) -> Result<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT)?;
        let time = NaiveTime::parse_from_str(&self.time, TIME_FORMAT)?;
        Ok(date.and_time(time))
    }
}
