use chrono::{DateTime, Utc};

/// Current instant at millisecond resolution, the most a BSON datetime can
/// hold. Stamping records with this keeps stored and in-memory timestamps
/// identical.
pub fn now() -> DateTime<Utc> {
    bson::DateTime::now().to_chrono()
}
