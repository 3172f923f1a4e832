use bson::oid::ObjectId;

use crate::error::{Error, Result};

/// Parses a user-supplied id, rejecting anything that is not a
/// 24-hex-character object id before it reaches storage.
pub fn parse_object_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| Error::InvalidId("Invalid user ID.".to_string()))
}
