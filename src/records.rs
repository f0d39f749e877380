use crate::hierarchy;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description, Date};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// A single day's submission tally, classified by curriculum position.
/// Supplied externally and never mutated after loading.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ScoreRecord {
    pub(crate) date: Date,
    pub(crate) total_assessments: u32,
    pub(crate) subject: String,
    pub(crate) chapter: String,
    pub(crate) topic: String,
}

// Wire shape of the JSON data file; keys are camelCase to match the exported
// dashboard data.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
struct RawRecord {
    date: String,
    total_assessments: u32,
    subject: String,
    chapter: String,
    topic: String,
}

impl RawRecord {
    fn into_record(self) -> Result<ScoreRecord, DataError> {
        let date = Date::parse(&self.date, &YMD_FMT).map_err(|source| DataError::Date {
            value: self.date.clone(),
            source,
        })?;
        Ok(ScoreRecord {
            date,
            total_assessments: self.total_assessments,
            subject: self.subject,
            chapter: self.chapter,
            topic: self.topic,
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum DataError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {} as JSON", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid date {value:?} in score data")]
    Date {
        value: String,
        source: time::error::Parse,
    },
}

pub(crate) fn load_records(path: &Path) -> Result<Vec<ScoreRecord>, DataError> {
    let text = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_owned(),
        source,
    })?;
    let raw: Vec<RawRecord> = serde_json::from_str(&text).map_err(|source| DataError::Json {
        path: path.to_owned(),
        source,
    })?;
    raw.into_iter().map(RawRecord::into_record).collect()
}

/// Builds the date → record mapping consulted by the grid builder.  Duplicate
/// dates are last-write-wins.
pub(crate) fn score_map<'a, I>(records: I) -> BTreeMap<Date, ScoreRecord>
where
    I: IntoIterator<Item = &'a ScoreRecord>,
{
    records
        .into_iter()
        .map(|r| (r.date, r.clone()))
        .collect()
}

pub(crate) fn format_ymd(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Detail text for a single day cell.
pub(crate) fn tooltip(date: Date, record: Option<&ScoreRecord>) -> String {
    match record {
        Some(r) => format!(
            "{}: {} assessments\nSubject: {}\nChapter: {}\nTopic: {}",
            format_ymd(date),
            r.total_assessments,
            r.subject,
            r.chapter,
            r.topic
        ),
        None => format!("{}: No assessments", format_ymd(date)),
    }
}

/// Deterministic sample data for running without a data file.  Counts cycle
/// through all six buckets and topics cycle through the curriculum leaves.
pub(crate) fn demo_records(year: i32) -> Vec<ScoreRecord> {
    let mut leaves = hierarchy::leaf_topics().cycle();
    let mut records = Vec::new();
    for ordinal in 1..=time::util::days_in_year(year) {
        let date = Date::from_ordinal_date(year, ordinal)
            .expect("ordinal should be within the year");
        let count = (u32::from(ordinal) * 13) % 15;
        if count == 0 {
            continue;
        }
        let (subject, chapter, topic) =
            leaves.next().expect("curriculum should have leaf topics");
        records.push(ScoreRecord {
            date,
            total_assessments: count,
            subject: subject.to_owned(),
            chapter: chapter.to_owned(),
            topic: topic.to_owned(),
        });
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Bucket;
    use std::collections::BTreeSet;
    use time::macros::date;

    fn parse_records(json: &str) -> Result<Vec<ScoreRecord>, DataError> {
        let raw: Vec<RawRecord> = serde_json::from_str(json).unwrap();
        raw.into_iter().map(RawRecord::into_record).collect()
    }

    #[test]
    fn test_parse_record() {
        let records = parse_records(
            r#"[{"date": "2024-01-01", "totalAssessments": 7,
                 "subject": "Algorithms", "chapter": "Backtracking",
                 "topic": "N-Queens"}]"#,
        )
        .unwrap();
        assert_eq!(
            records,
            [ScoreRecord {
                date: date!(2024 - 01 - 01),
                total_assessments: 7,
                subject: "Algorithms".into(),
                chapter: "Backtracking".into(),
                topic: "N-Queens".into(),
            }]
        );
    }

    #[test]
    fn test_parse_bad_date() {
        let r = parse_records(
            r#"[{"date": "01/02/2024", "totalAssessments": 1,
                 "subject": "s", "chapter": "c", "topic": "t"}]"#,
        );
        assert!(matches!(r, Err(DataError::Date { value, .. }) if value == "01/02/2024"));
    }

    #[test]
    fn test_score_map_last_write_wins() {
        let records = parse_records(
            r#"[{"date": "2024-03-05", "totalAssessments": 2,
                 "subject": "a", "chapter": "b", "topic": "c"},
                {"date": "2024-03-05", "totalAssessments": 9,
                 "subject": "x", "chapter": "y", "topic": "z"}]"#,
        )
        .unwrap();
        let map = score_map(&records);
        assert_eq!(map.len(), 1);
        assert_eq!(map[&date!(2024 - 03 - 05)].total_assessments, 9);
        assert_eq!(map[&date!(2024 - 03 - 05)].subject, "x");
    }

    #[test]
    fn test_tooltip_with_record() {
        let record = ScoreRecord {
            date: date!(2024 - 01 - 01),
            total_assessments: 7,
            subject: "Algorithms".into(),
            chapter: "Backtracking".into(),
            topic: "N-Queens".into(),
        };
        assert_eq!(
            tooltip(record.date, Some(&record)),
            "2024-01-01: 7 assessments\nSubject: Algorithms\nChapter: Backtracking\nTopic: N-Queens"
        );
    }

    #[test]
    fn test_tooltip_without_record() {
        assert_eq!(
            tooltip(date!(2024 - 03 - 05), None),
            "2024-03-05: No assessments"
        );
    }

    #[test]
    fn test_format_ymd_pads() {
        assert_eq!(format_ymd(date!(0987 - 06 - 05)), "0987-06-05");
    }

    #[test]
    fn test_demo_records() {
        let records = demo_records(2024);
        assert!(!records.is_empty());
        let mut buckets = BTreeSet::new();
        for r in &records {
            assert_eq!(r.date.year(), 2024);
            assert!(r.total_assessments > 0);
            buckets.insert(Bucket::for_count(r.total_assessments));
        }
        // Every non-zero bucket shows up in the sample year.
        assert_eq!(buckets.len(), 5);
    }
}
