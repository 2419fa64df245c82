//! Import of the legacy NDJSON export (one document per line, Mongo-style ids
//! and dates) into the current friend and record format.

use crate::logic::compute_total_score;
use crate::models::{Friend, MatchRecord, Outcome, ResultLine};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Emoji given to legacy friends that never had one.
pub const LEGACY_DEFAULT_EMOJI: &str = "🐶";

#[derive(Deserialize)]
#[serde(untagged)]
enum LegacyId {
    Plain(String),
    Oid {
        #[serde(rename = "$oid")]
        oid: String,
    },
}

impl LegacyId {
    fn into_string(self) -> String {
        match self {
            LegacyId::Plain(s) => s,
            LegacyId::Oid { oid } => oid,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LegacyDate {
    Plain(String),
    Wrapped {
        #[serde(rename = "$date")]
        date: String,
    },
}

/// Missing or unparseable dates fall back to the import time.
fn legacy_time(date: Option<LegacyDate>) -> DateTime<Utc> {
    let raw = match date {
        Some(LegacyDate::Plain(s)) | Some(LegacyDate::Wrapped { date: s }) => s,
        None => return Utc::now(),
    };
    match DateTime::parse_from_rfc3339(&raw) {
        Ok(t) => t.with_timezone(&Utc),
        Err(e) => {
            log::warn!("Unreadable legacy createTime {:?} ({}), using now", raw, e);
            Utc::now()
        }
    }
}

#[derive(Deserialize)]
struct LegacyFriend {
    #[serde(rename = "_id")]
    id: LegacyId,
    name: String,
    #[serde(default)]
    emoji: Option<String>,
    #[serde(rename = "createTime", default)]
    create_time: Option<LegacyDate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyLine {
    friend_id: LegacyId,
    #[serde(default)]
    friend_name: String,
    #[serde(rename = "type", default)]
    outcome: Option<String>,
    #[serde(default)]
    score: Option<serde_json::Value>,
}

/// Legacy scores were numbers or strings; keep them as text.
fn score_text(score: Option<serde_json::Value>) -> String {
    match score {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[derive(Deserialize)]
struct LegacyRecord {
    #[serde(rename = "_id")]
    id: LegacyId,
    #[serde(rename = "createTime", default)]
    create_time: Option<LegacyDate>,
    #[serde(default)]
    records: Vec<LegacyLine>,
}

/// Parse each non-blank line as a `T`; lines that do not parse are skipped with a warning.
fn parse_lines<T: DeserializeOwned>(content: &str) -> Vec<T> {
    content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .filter_map(|(n, l)| match serde_json::from_str(l) {
            Ok(doc) => Some(doc),
            Err(e) => {
                log::warn!("Skipping legacy line {}: {}", n, e);
                None
            }
        })
        .collect()
}

/// Friends from a legacy NDJSON export.
pub fn parse_legacy_friends(content: &str) -> Vec<Friend> {
    parse_lines::<LegacyFriend>(content)
        .into_iter()
        .map(|f| Friend {
            id: f.id.into_string(),
            name: f.name,
            emoji: f
                .emoji
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| LEGACY_DEFAULT_EMOJI.to_string()),
            create_time: legacy_time(f.create_time),
        })
        .collect()
}

/// Match records from a legacy NDJSON export; `total_score` is recomputed.
pub fn parse_legacy_records(content: &str) -> Vec<MatchRecord> {
    parse_lines::<LegacyRecord>(content)
        .into_iter()
        .map(|r| {
            let lines: Vec<ResultLine> = r
                .records
                .into_iter()
                .map(|l| ResultLine {
                    friend_id: l.friend_id.into_string(),
                    friend_name: l.friend_name,
                    outcome: Outcome::from(l.outcome.unwrap_or_default()),
                    score: score_text(l.score),
                })
                .collect();
            MatchRecord {
                id: r.id.into_string(),
                create_time: legacy_time(r.create_time),
                total_score: compute_total_score(&lines),
                lines,
            }
        })
        .collect()
}

/// Merge `incoming` into `existing` by id: matching ids are replaced in place,
/// new ids are appended in `incoming` order.
pub fn merge_by_id<T, F>(mut existing: Vec<T>, incoming: Vec<T>, id_of: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    for item in incoming {
        match existing.iter().position(|e| id_of(e) == id_of(&item)) {
            Some(idx) => existing[idx] = item,
            None => existing.push(item),
        }
    }
    existing
}

/// Stable sort, newest `create_time` first.
pub fn sort_newest_first(records: &mut [MatchRecord]) {
    records.sort_by(|a, b| b.create_time.cmp(&a.create_time));
}
