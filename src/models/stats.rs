//! Derived statistics views (never persisted).

use crate::models::friend::FriendId;
use serde::{Deserialize, Serialize};

/// Cumulative standing of one friend across all match records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub friend_id: FriendId,
    pub friend_name: String,
    pub total_score: i64,
    pub win_count: u32,
    pub lose_count: u32,
    /// Rounded to two decimals; 0 when no games were played.
    pub win_rate: f64,
}

impl PlayerStats {
    pub fn games_played(&self) -> u32 {
        self.win_count + self.lose_count
    }
}

/// Totals across the whole leaderboard.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    /// Number of match records.
    pub match_count: usize,
    /// Result lines attributed to friends still in the roster.
    pub result_count: u32,
    pub win_count: u32,
    pub lose_count: u32,
}
