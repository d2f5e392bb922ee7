//! Append-only match history: one JSON record per completed match, keyed
//! by wall-clock timestamp. The engine hands over a finished
//! `MatchResult`; formats and file handling live here.

use anyhow::Result;
use chrono::{DateTime, Utc};
use cm_core::{MarginUnit, MatchResult};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryRecord {
    pub timestamp: DateTime<Utc>,
    pub first_innings_team: String,
    pub second_innings_team: String,
    pub winner: Option<String>,
    pub margin: Option<u32>,
    pub margin_unit: Option<MarginUnit>,
}

impl HistoryRecord {
    pub fn from_result(result: &MatchResult, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            first_innings_team: result.first_innings.team.clone(),
            second_innings_team: result.second_innings.team.clone(),
            winner: result.winner.clone(),
            margin: result.margin.map(|m| m.value),
            margin_unit: result.margin.map(|m| m.unit),
        }
    }
}

pub fn append(path: &Path, result: &MatchResult) -> Result<()> {
    append_record(path, &HistoryRecord::from_result(result, Utc::now()))
}

fn append_record(path: &Path, record: &HistoryRecord) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", serde_json::to_string(record)?)?;
    log::debug!("appended match record to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cm_core::{Margin, TeamScore};

    fn sample_result(winner: Option<&str>) -> MatchResult {
        MatchResult {
            winner: winner.map(str::to_string),
            margin: winner.map(|_| Margin { value: 12, unit: MarginUnit::Runs }),
            man_of_the_match: None,
            first_innings: TeamScore {
                team: "Alpha".to_string(),
                runs: 50,
                wickets: 2,
                balls: 18,
            },
            second_innings: TeamScore {
                team: "Beta".to_string(),
                runs: 38,
                wickets: 3,
                balls: 18,
            },
        }
    }

    #[test]
    fn test_appends_one_line_per_match() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.jsonl");

        append(&path, &sample_result(Some("Alpha"))).unwrap();
        append(&path, &sample_result(None)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let records: Vec<HistoryRecord> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].winner.as_deref(), Some("Alpha"));
        assert_eq!(records[0].margin, Some(12));
        assert_eq!(records[0].margin_unit, Some(MarginUnit::Runs));
        assert!(records[1].winner.is_none());
        assert!(records[1].margin.is_none());
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.jsonl");

        append(&path, &sample_result(Some("Alpha"))).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_record_carries_tie_without_margin() {
        let record = HistoryRecord::from_result(&sample_result(None), Utc::now());
        assert!(record.winner.is_none());
        assert!(record.margin.is_none());
        assert!(record.margin_unit.is_none());
        assert_eq!(record.first_innings_team, "Alpha");
    }
}
