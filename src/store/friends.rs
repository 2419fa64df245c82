//! Friend registry: the roster of tracked players.

use crate::models::Friend;
use crate::store::{JsonCollection, StoreError};
use std::path::PathBuf;

pub struct FriendRegistry {
    collection: JsonCollection<Friend>,
}

fn not_found(id: &str) -> StoreError {
    StoreError::NotFound {
        kind: "Friend",
        id: id.to_string(),
    }
}

/// `Some` non-blank value, trimmed.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl FriendRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }

    pub fn collection(&self) -> &JsonCollection<Friend> {
        &self.collection
    }

    /// All friends in creation order.
    pub async fn list(&self) -> Result<Vec<Friend>, StoreError> {
        self.collection.read_all().await
    }

    /// Add a friend. The name is trimmed and must not be empty; a missing emoji
    /// gets a random one.
    pub async fn create(&self, name: &str, emoji: Option<String>) -> Result<Friend, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let friend = Friend::new(name, non_blank(emoji));
        let created = friend.clone();
        self.collection
            .modify(move |friends| {
                friends.push(friend);
                Ok(())
            })
            .await?;
        log::info!("Added friend {} ({})", created.name, created.id);
        Ok(created)
    }

    /// Rename and/or change the emoji. Absent or blank fields keep their value.
    pub async fn update(
        &self,
        id: &str,
        name: Option<String>,
        emoji: Option<String>,
    ) -> Result<Friend, StoreError> {
        let name = non_blank(name);
        let emoji = non_blank(emoji);
        self.collection
            .modify(|friends| {
                let friend = friends
                    .iter_mut()
                    .find(|f| f.id == id)
                    .ok_or_else(|| not_found(id))?;
                if let Some(name) = name {
                    friend.name = name;
                }
                if let Some(emoji) = emoji {
                    friend.emoji = emoji;
                }
                Ok(friend.clone())
            })
            .await
    }

    /// Remove a friend. Match records that mention them are left untouched.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.collection
            .modify(|friends| {
                let before = friends.len();
                friends.retain(|f| f.id != id);
                if friends.len() == before {
                    return Err(not_found(id));
                }
                Ok(())
            })
            .await?;
        log::info!("Deleted friend {}", id);
        Ok(())
    }
}
