//! MatchRecord, ResultLine and Outcome: one recorded game session.

use crate::logic::compute_total_score;
use crate::models::friend::FriendId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Unique identifier for a match record (`record_<uuid>`).
pub type RecordId = String;

/// Whether a participant won or lost the session.
///
/// Stored with the labels the app has always written (`胜` / `负`). Only the
/// exact win label reads as a win; anything else is a loss.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Win => "胜",
            Outcome::Loss => "负",
        }
    }
}

impl From<String> for Outcome {
    fn from(label: String) -> Self {
        if label == Outcome::Win.label() {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }
}

impl From<Outcome> for String {
    fn from(outcome: Outcome) -> Self {
        outcome.label().to_string()
    }
}

/// One participant's result within a match record.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultLine {
    /// Weak reference: the friend may have been deleted since.
    pub friend_id: FriendId,
    /// Name captured when the match was recorded; authoritative for display.
    #[serde(default)]
    pub friend_name: String,
    #[serde(rename = "type")]
    pub outcome: Outcome,
    /// Score as entered. Parsed leniently (see [`crate::logic::parse_score`]).
    #[serde(default, deserialize_with = "score_text")]
    pub score: String,
}

impl ResultLine {
    pub fn new(
        friend_id: impl Into<FriendId>,
        friend_name: impl Into<String>,
        outcome: Outcome,
        score: impl Into<String>,
    ) -> Self {
        Self {
            friend_id: friend_id.into(),
            friend_name: friend_name.into(),
            outcome,
            score: score.into(),
        }
    }
}

/// Accept the score as a JSON string or number; null becomes the empty string.
fn score_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawScore {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<RawScore>::deserialize(deserializer)? {
        Some(RawScore::Text(s)) => s,
        Some(RawScore::Int(n)) => n.to_string(),
        Some(RawScore::Float(f)) => f.to_string(),
        None => String::new(),
    })
}

/// A recorded game session: one result line per participant.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: RecordId,
    pub create_time: DateTime<Utc>,
    #[serde(rename = "records")]
    pub lines: Vec<ResultLine>,
    /// Computed once at creation and never re-derived.
    pub total_score: i64,
}

impl MatchRecord {
    /// New record stamped now, with `total_score` computed from `lines`.
    pub fn new(lines: Vec<ResultLine>) -> Self {
        Self::at(lines, Utc::now())
    }

    /// New record with an explicit creation time.
    pub fn at(lines: Vec<ResultLine>, create_time: DateTime<Utc>) -> Self {
        let total_score = compute_total_score(&lines);
        Self {
            id: format!("record_{}", Uuid::new_v4()),
            create_time,
            lines,
            total_score,
        }
    }

    /// True if any line belongs to `friend_id`.
    pub fn involves(&self, friend_id: &str) -> bool {
        self.lines.iter().any(|l| l.friend_id == friend_id)
    }
}
