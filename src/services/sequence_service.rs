use bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::error::{Error, Result};
use crate::models::counter::Counter;

pub const COUNTERS_COLLECTION: &str = "counters";

/// Atomic sequence numbers over the `counters` collection. Standalone
/// primitive; user ids come from `ObjectId`, not from here.
#[derive(Clone)]
pub struct SequenceService {
    counters: Collection<Counter>,
}

impl SequenceService {
    pub fn new(db: &Database) -> Self {
        Self {
            counters: db.collection(COUNTERS_COLLECTION),
        }
    }

    /// Increments the named counter by one and returns the post-increment
    /// value. The first call for a name persists the counter at 1.
    pub async fn next(&self, sequence_name: &str) -> Result<i64> {
        let counter = self
            .counters
            .find_one_and_update(
                doc! { "_id": sequence_name },
                doc! { "$inc": { "sequence_value": 1_i64 } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?;

        // Upsert with return-after always yields a document.
        counter
            .map(|c| c.sequence_value)
            .ok_or_else(|| Error::Internal("Counter upsert returned no document".to_string()))
    }
}
