//! Chat log: the most recent exchanges with the canned assistant.

use crate::logic::CHAT_HISTORY_LIMIT;
use crate::models::ChatEntry;
use crate::store::{JsonCollection, StoreError};
use std::path::PathBuf;

pub struct ChatLog {
    collection: JsonCollection<ChatEntry>,
}

impl ChatLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }

    pub fn collection(&self) -> &JsonCollection<ChatEntry> {
        &self.collection
    }

    pub async fn list(&self) -> Result<Vec<ChatEntry>, StoreError> {
        self.collection.read_all().await
    }

    /// Store an exchange, dropping the oldest entries beyond [`CHAT_HISTORY_LIMIT`].
    pub async fn append(&self, entry: ChatEntry) -> Result<(), StoreError> {
        self.collection
            .modify(move |entries| {
                entries.push(entry);
                if entries.len() > CHAT_HISTORY_LIMIT {
                    let excess = entries.len() - CHAT_HISTORY_LIMIT;
                    entries.drain(..excess);
                }
                Ok(())
            })
            .await
    }
}
