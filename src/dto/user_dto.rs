use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::User;

/// Request body for create and update. Names exactly the mutable fields;
/// `id` and `createdDate` are server-assigned and rejected if supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserPayload {
    #[serde(default)]
    pub plant: i32,
    #[serde(default)]
    pub department: i32,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub plant: i32,
    pub department: i32,
    pub position: i32,
    pub email: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub password: String,
    pub created_date: DateTime<Utc>,
    pub roles: Vec<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            plant: user.plant,
            department: user.department,
            position: user.position,
            email: user.email,
            last_name: user.last_name,
            first_name: user.first_name,
            middle_name: user.middle_name,
            password: user.password,
            created_date: user.created_date,
            roles: user.roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_defaults_to_empty_fields() {
        let payload: UserPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.plant, 0);
        assert_eq!(payload.department, 0);
        assert_eq!(payload.position, 0);
        assert_eq!(payload.email, "");
        assert_eq!(payload.last_name, "");
        assert_eq!(payload.first_name, "");
        assert_eq!(payload.middle_name, "");
        assert_eq!(payload.password, "");
        assert!(payload.roles.is_empty());
    }

    #[test]
    fn payload_uses_camel_case_names() {
        let payload: UserPayload = serde_json::from_value(serde_json::json!({
            "firstName": "Ann",
            "lastName": "Lee",
            "middleName": "M",
            "email": "a@x.com",
            "roles": ["hr", "admin"]
        }))
        .unwrap();
        assert_eq!(payload.first_name, "Ann");
        assert_eq!(payload.last_name, "Lee");
        assert_eq!(payload.middle_name, "M");
        assert_eq!(payload.roles, vec!["hr", "admin"]);
    }

    #[test]
    fn payload_rejects_unknown_fields() {
        let result: Result<UserPayload, _> = serde_json::from_value(serde_json::json!({
            "firstName": "Ann",
            "id": "665f1f77bcf86cd799439011"
        }));
        assert!(result.is_err());

        let result: Result<UserPayload, _> = serde_json::from_value(serde_json::json!({
            "createdDate": "2024-01-01T00:00:00Z"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn response_serializes_hex_id_and_camel_case() {
        let user = User {
            id: bson::oid::ObjectId::parse_str("665f1f77bcf86cd799439011").unwrap(),
            plant: 1,
            department: 2,
            position: 3,
            email: "a@x.com".to_string(),
            last_name: "Lee".to_string(),
            first_name: "Ann".to_string(),
            middle_name: String::new(),
            password: String::new(),
            created_date: chrono::Utc::now(),
            roles: vec!["hr".to_string()],
        };

        let value = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(value["id"], "665f1f77bcf86cd799439011");
        assert_eq!(value["firstName"], "Ann");
        assert_eq!(value["lastName"], "Lee");
        assert!(value.get("createdDate").is_some());
        assert!(value.get("created_date").is_none());
    }
}
