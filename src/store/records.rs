//! Match record store: append, page through and delete game sessions.

use crate::logic::{paginate, PageRequest, RecordPage};
use crate::models::{MatchRecord, ResultLine};
use crate::store::{JsonCollection, StoreError};
use std::path::PathBuf;

pub struct RecordStore {
    collection: JsonCollection<MatchRecord>,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }

    pub fn collection(&self) -> &JsonCollection<MatchRecord> {
        &self.collection
    }

    /// Every record, unfiltered and unpaginated, in stored order.
    pub async fn list_all(&self) -> Result<Vec<MatchRecord>, StoreError> {
        self.collection.read_all().await
    }

    /// Newest-first page of records, optionally only those involving `friend_id`.
    pub async fn list(
        &self,
        request: PageRequest,
        friend_id: Option<&str>,
    ) -> Result<RecordPage, StoreError> {
        let records = self.collection.read_all().await?;
        Ok(paginate(records, request, friend_id))
    }

    /// Append a new record. Its total score is fixed now and never recomputed.
    pub async fn create(&self, lines: Vec<ResultLine>) -> Result<MatchRecord, StoreError> {
        if lines.is_empty() {
            return Err(StoreError::EmptyLines);
        }
        let record = MatchRecord::new(lines);
        let created = record.clone();
        self.collection
            .modify(move |records| {
                records.push(record);
                Ok(())
            })
            .await?;
        log::info!(
            "Recorded game {} ({} players, total {})",
            created.id,
            created.lines.len(),
            created.total_score
        );
        Ok(created)
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.collection
            .modify(|records| {
                let before = records.len();
                records.retain(|r| r.id != id);
                if records.len() == before {
                    return Err(StoreError::NotFound {
                        kind: "Record",
                        id: id.to_string(),
                    });
                }
                Ok(())
            })
            .await?;
        log::info!("Deleted record {}", id);
        Ok(())
    }
}
