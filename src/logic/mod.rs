//! Score-tracker business logic: aggregation, history paging, chat, legacy import.

pub mod chat;
pub mod history;
pub mod migrate;
mod stats;

pub use chat::{pick_reply, CANNED_REPLIES, CHAT_HISTORY_LIMIT};
pub use history::{group_by_day, paginate, DayGroup, PageRequest, RecordPage, DEFAULT_PAGE_SIZE};
pub use stats::{compute_stats, compute_total_score, parse_score, round_win_rate, summarize};
