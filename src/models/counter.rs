use serde::{Deserialize, Serialize};

/// A named counter document; `_id` is the sequence name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counter {
    #[serde(rename = "_id")]
    pub id: String,
    pub sequence_value: i64,
}
