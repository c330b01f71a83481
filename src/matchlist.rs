use itertools::izip;
use serde::Deserialize;

use crate::error::{Result, TennisError};
use crate::model::{MatchBundle, MatchRecord};

/// An ordered list of matches, one record per match.
pub type MatchList = Vec<MatchRecord>;

/// A match collection in either wire shape: the column-oriented bundle the
/// backend sends today (a JSON object of parallel arrays), or a row-oriented
/// list of records.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MatchFeed {
    Columns(MatchBundle),
    Rows(Vec<MatchRecord>),
}

impl MatchFeed {
    /// Normalize either shape into row-oriented records. Column input goes
    /// through [`to_records`] and keeps its equal-length check; row input is
    /// already normalized.
    pub fn into_records(self) -> Result<MatchList> {
        match self {
            MatchFeed::Columns(bundle) => to_records(&bundle),
            MatchFeed::Rows(records) => Ok(records),
        }
    }
}

/// Normalize a column-oriented [`MatchBundle`] into row-oriented records,
/// preserving the bundle's index order.
///
/// An all-empty bundle yields an empty list: the backend sends that for
/// "no matches", so it is not an error. Columns that disagree on length mean
/// the upstream response is broken; the whole bundle is rejected with
/// [`TennisError::MalformedBundle`] instead of being zipped short. The `key`
/// column alone may be absent (length 0), in which case records carry no
/// key.
pub fn to_records(bundle: &MatchBundle) -> Result<MatchList> {
    let n = bundle.singles.len();
    let columns_match = bundle.date.len() == n
        && bundle.time.len() == n
        && bundle.location.len() == n
        && bundle.players.len() == n
        && bundle.confirmed.len() == n;
    let keys_match = bundle.key.is_empty() || bundle.key.len() == n;
    if !columns_match || !keys_match {
        return Err(TennisError::MalformedBundle {
            lengths: bundle.column_lengths(),
        });
    }

    let mut keys = bundle.key.iter().cloned();
    let records = izip!(
        &bundle.singles,
        &bundle.date,
        &bundle.time,
        &bundle.location,
        &bundle.players,
        &bundle.confirmed,
    )
    .map(|(&singles, date, time, location, players, &confirmed)| MatchRecord {
        key: keys.next(),
        singles,
        date: date.clone(),
        time: time.clone(),
        location: location.clone(),
        players: players.clone(),
        confirmed,
    })
    .collect();
    Ok(records)
}

/// Split records into `(confirmed, pending)` by their `confirmed` flag,
/// preserving relative order within each half. Pure and total.
pub fn partition_by_confirmation<I>(records: I) -> (MatchList, MatchList)
where
    I: IntoIterator<Item = MatchRecord>,
{
    records.into_iter().partition(|record| record.confirmed)
}

/// Normalize an available-matches bundle into a single flat list.
///
/// Same conversion as [`to_records`]; the `confirmed` flag passes through
/// but carries no meaning for this list, and no dedup against the user's
/// own matches is attempted.
pub fn to_available_list(bundle: &MatchBundle) -> Result<MatchList> {
    to_records(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_match_bundle() -> MatchBundle {
        MatchBundle {
            singles: vec![true, false],
            date: vec!["01/01/2020".into(), "01/02/2020".into()],
            time: vec!["10:00".into(), "14:00".into()],
            location: vec!["A".into(), "B".into()],
            players: vec!["Ann Lee (4.0F)".into(), "Bob Kim (3.5M), Cat Doe (3.5F)".into()],
            confirmed: vec![true, false],
            key: vec!["k1".into(), "k2".into()],
        }
    }

    #[test]
    fn test_to_records_zips_columns_in_order() {
        let records = to_records(&two_match_bundle()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].key.as_deref(), Some("k1"));
        assert!(records[0].singles);
        assert_eq!(records[0].date, "01/01/2020");
        assert_eq!(records[0].time, "10:00");
        assert_eq!(records[0].location, "A");
        assert!(records[0].confirmed);
        assert!(!records[1].singles);
        assert_eq!(records[1].players, "Bob Kim (3.5M), Cat Doe (3.5F)");
        assert!(!records[1].confirmed);
    }

    #[test]
    fn test_empty_bundle_is_no_matches() {
        let records = to_records(&MatchBundle::default()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_mismatched_columns_fail_fast() {
        let bundle = MatchBundle {
            singles: vec![true, false],
            date: vec!["01/01/2020".into()],
            ..Default::default()
        };

        match to_records(&bundle) {
            Err(TennisError::MalformedBundle { lengths }) => {
                assert!(lengths.contains(&("singles", 2)));
                assert!(lengths.contains(&("date", 1)));
            }
            other => panic!("expected MalformedBundle, got {other:?}"),
        }
    }

    #[test]
    fn test_absent_key_column_yields_keyless_records() {
        let mut bundle = two_match_bundle();
        bundle.key = vec![];

        let records = to_records(&bundle).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.key.is_none()));
    }

    #[test]
    fn test_short_key_column_is_malformed() {
        let mut bundle = two_match_bundle();
        bundle.key = vec!["k1".into()];

        assert!(matches!(
            to_records(&bundle),
            Err(TennisError::MalformedBundle { .. })
        ));
    }

    #[test]
    fn test_to_records_is_idempotent() {
        let bundle = two_match_bundle();
        assert_eq!(to_records(&bundle).unwrap(), to_records(&bundle).unwrap());
    }

    #[test]
    fn test_partition_splits_by_confirmed_flag() {
        let records = to_records(&two_match_bundle()).unwrap();
        let (confirmed, pending) = partition_by_confirmation(records.clone());

        assert_eq!(confirmed, vec![records[0].clone()]);
        assert_eq!(pending, vec![records[1].clone()]);
    }

    #[test]
    fn test_partition_preserves_relative_order() {
        let bundle = MatchBundle {
            singles: vec![true; 4],
            date: vec!["d0".into(), "d1".into(), "d2".into(), "d3".into()],
            time: vec!["t".into(); 4],
            location: vec!["l".into(); 4],
            players: vec!["p".into(); 4],
            confirmed: vec![false, true, false, true],
            key: vec![],
        };
        let (confirmed, pending) = partition_by_confirmation(to_records(&bundle).unwrap());

        assert_eq!(confirmed.len() + pending.len(), 4);
        let confirmed_dates: Vec<_> = confirmed.iter().map(|r| r.date.as_str()).collect();
        let pending_dates: Vec<_> = pending.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(confirmed_dates, vec!["d1", "d3"]);
        assert_eq!(pending_dates, vec!["d0", "d2"]);
    }

    #[test]
    fn test_partition_of_empty_list() {
        let (confirmed, pending) = partition_by_confirmation(vec![]);
        assert!(confirmed.is_empty());
        assert!(pending.is_empty());
    }

    #[test]
    fn test_feed_accepts_column_oriented_objects() {
        let feed: MatchFeed = serde_json::from_str(
            r#"{
                "singles": [true],
                "date": ["01/01/2020"],
                "time": ["10:00"],
                "location": ["A"],
                "players": ["Ann Lee (4.0F)"],
                "confirmed": [true]
            }"#,
        )
        .unwrap();

        let records = feed.into_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].location, "A");
    }

    #[test]
    fn test_feed_accepts_row_oriented_arrays() {
        let feed: MatchFeed = serde_json::from_str(
            r#"[{
                "singles": true,
                "date": "01/01/2020",
                "time": "10:00",
                "location": "A",
                "players": "Ann Lee (4.0F)",
                "confirmed": false
            }]"#,
        )
        .unwrap();

        let records = feed.into_records().unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].key.is_none());
        assert!(!records[0].confirmed);
    }

    #[test]
    fn test_feed_keeps_length_check_for_columns() {
        let feed = MatchFeed::Columns(MatchBundle {
            singles: vec![true, false],
            date: vec!["01/01/2020".into()],
            ..Default::default()
        });
        assert!(matches!(
            feed.into_records(),
            Err(TennisError::MalformedBundle { .. })
        ));
    }

    #[test]
    fn test_available_list_keeps_all_records_flat() {
        let records = to_available_list(&two_match_bundle()).unwrap();

        assert_eq!(records.len(), 2);
        // Confirmed flags pass through untouched even though the available
        // list never splits on them.
        assert!(records[0].confirmed);
        assert!(!records[1].confirmed);
    }
}
