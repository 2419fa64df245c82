//! Canned assistant: there is no model behind it, just a list of tips.

use rand::seq::SliceRandom;
use rand::Rng;

/// Replies the assistant picks from.
pub const CANNED_REPLIES: &[&str] = &[
    "Mahjong is a deep game: keep playing and review your hands afterwards.",
    "A pure one-suit hand is an advanced pattern built from tiles of a single suit.",
    "A kong raises your score, but it also reveals information. Weigh the risk.",
    "When you are ready, count your waits carefully and keep the widest one.",
    "Mahjong is not only luck; it is a contest of strategy and technique.",
];

/// Maximum number of chat entries kept in the log.
pub const CHAT_HISTORY_LIMIT: usize = 100;

/// Pick a reply uniformly at random.
pub fn pick_reply<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CANNED_REPLIES.choose(rng).copied().unwrap_or(CANNED_REPLIES[0])
}
