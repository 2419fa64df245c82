//! Whole-file JSON persistence: each collection is one pretty-printed JSON array
//! that is read in full, changed in memory and written back in full.

mod chats;
mod collection;
mod friends;
mod records;

pub use chats::ChatLog;
pub use collection::JsonCollection;
pub use friends::FriendRegistry;
pub use records::RecordStore;

use std::path::Path;

pub const FRIENDS_FILE: &str = "friends.json";
pub const RECORDS_FILE: &str = "records.json";
pub const CHATS_FILE: &str = "ai_chats.json";

/// Errors from the store and its repositories.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing a data file failed.
    Io(std::io::Error),
    /// A data file does not hold a valid JSON array of the expected entity.
    Json(serde_json::Error),
    /// No entity of this kind with this id.
    NotFound { kind: &'static str, id: String },
    /// Friend name was empty after trimming.
    EmptyName,
    /// A match record needs at least one result line.
    EmptyLines,
}

impl StoreError {
    /// True for errors caused by the request rather than by storage.
    pub fn is_client_error(&self) -> bool {
        matches!(self, StoreError::EmptyName | StoreError::EmptyLines)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "io error: {}", e),
            StoreError::Json(e) => write!(f, "data file is not valid JSON: {}", e),
            StoreError::NotFound { kind, id } => write!(f, "{} {} not found", kind, id),
            StoreError::EmptyName => write!(f, "Friend name must not be empty"),
            StoreError::EmptyLines => write!(f, "A game record needs at least one result"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

/// All collections behind the API.
pub struct AppState {
    pub friends: FriendRegistry,
    pub records: RecordStore,
    pub chats: ChatLog,
}

impl AppState {
    /// Open the collections under `data_dir`, creating the directory and any
    /// missing file (as an empty array).
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = data_dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;
        let state = Self {
            friends: FriendRegistry::new(dir.join(FRIENDS_FILE)),
            records: RecordStore::new(dir.join(RECORDS_FILE)),
            chats: ChatLog::new(dir.join(CHATS_FILE)),
        };
        state.friends.collection().init().await?;
        state.records.collection().init().await?;
        state.chats.collection().init().await?;
        log::debug!("Opened data directory {}", dir.display());
        Ok(state)
    }
}
