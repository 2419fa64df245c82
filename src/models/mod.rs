//! Data structures for the score tracker: friends, match records, derived stats, chat.

mod chat;
mod friend;
mod record;
mod stats;

pub use chat::{ChatEntry, ChatReply};
pub use friend::{random_emoji, Friend, FriendId, EMOJI_PALETTE};
pub use record::{MatchRecord, Outcome, RecordId, ResultLine};
pub use stats::{PlayerStats, StatsSummary};
