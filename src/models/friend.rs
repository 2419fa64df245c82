//! Friend: a tracked player in the roster.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a friend (`friend_<uuid>`).
pub type FriendId = String;

/// Avatar palette used when a friend is created without an emoji.
pub const EMOJI_PALETTE: &[&str] = &[
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮", "🐷", "🐸", "🐵",
    "🐔", "🐧", "🐦", "🐤", "🦆", "🦅", "🦉", "🐺", "🐗", "🐴", "🦄", "🐝", "🐛", "🦋", "🐌",
    "🐞", "🐜", "🐢", "🐍", "🦎", "🦖", "🦕", "🐙", "🦑", "🦐", "🦞", "🦀", "🐡", "🐠", "🐟",
    "🐬", "🐳", "🐋", "🦈", "🐊", "🐅", "🐆", "🦓", "🦍", "🐘", "🦛", "🦏", "🐪", "🦒", "🦘",
    "🐃", "🐂", "🐄", "🐎", "🐖", "🐏", "🐑", "🦙", "🐐", "🦌", "🐕", "🐩", "🐈", "🐓", "🦃",
    "🦚", "🦜", "🦢", "🦩", "🐇", "🦝", "🦨", "🦡", "🦦", "🦥", "🐁", "🐀", "🦔",
];

/// Pick a random avatar from [`EMOJI_PALETTE`].
pub fn random_emoji() -> String {
    EMOJI_PALETTE
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("🐶")
        .to_string()
}

/// A friend in the roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub emoji: String,
    pub create_time: DateTime<Utc>,
}

impl Friend {
    /// Create a friend with a fresh id. An empty `emoji` gets a random one.
    pub fn new(name: impl Into<String>, emoji: Option<String>) -> Self {
        let emoji = emoji
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(random_emoji);
        Self {
            id: format!("friend_{}", Uuid::new_v4()),
            name: name.into(),
            emoji,
            create_time: Utc::now(),
        }
    }
}
