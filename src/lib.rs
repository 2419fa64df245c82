//! Mahjong score tracker web app: library with models, scoring logic, JSON storage and the REST API.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use config::ServerConfig;
pub use logic::{compute_stats, compute_total_score, parse_score, summarize};
pub use models::{
    ChatEntry, ChatReply, Friend, FriendId, MatchRecord, Outcome, PlayerStats, RecordId,
    ResultLine, StatsSummary,
};
pub use store::{AppState, StoreError};
