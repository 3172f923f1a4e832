use bson::{doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::dto::user_dto::UserPayload;
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::utils::validation::parse_object_id;

pub const USERS_COLLECTION: &str = "users";

#[derive(Clone)]
pub struct UserService {
    users: Collection<User>,
}

impl UserService {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection(USERS_COLLECTION),
        }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let users = self.users.find(doc! {}).await?.try_collect().await?;
        Ok(users)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<User> {
        let object_id = parse_object_id(id)?;
        let user = self.users.find_one(doc! { "_id": object_id }).await?;
        user.ok_or_else(|| Error::NotFound("User not found.".to_string()))
    }

    pub async fn create(&self, payload: UserPayload) -> Result<User> {
        let user = User {
            id: ObjectId::new(),
            plant: payload.plant,
            department: payload.department,
            position: payload.position,
            email: payload.email,
            last_name: payload.last_name,
            first_name: payload.first_name,
            middle_name: payload.middle_name,
            password: payload.password,
            created_date: crate::utils::time::now(),
            roles: payload.roles,
        };
        self.users.insert_one(&user).await?;
        Ok(user)
    }

    /// Replaces every mutable field in one atomic find-and-update; `_id`
    /// and `created_date` are never part of the update document.
    pub async fn update(&self, id: &str, payload: UserPayload) -> Result<User> {
        let object_id = parse_object_id(id)?;
        let update = doc! {
            "$set": {
                "plant": payload.plant,
                "department": payload.department,
                "position": payload.position,
                "email": payload.email,
                "last_name": payload.last_name,
                "first_name": payload.first_name,
                "middle_name": payload.middle_name,
                "password": payload.password,
                "roles": payload.roles,
            }
        };

        let user = self
            .users
            .find_one_and_update(doc! { "_id": object_id }, update)
            .return_document(ReturnDocument::After)
            .await?;
        user.ok_or_else(|| Error::NotFound("User not found.".to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<User> {
        let object_id = parse_object_id(id)?;
        let user = self
            .users
            .find_one_and_delete(doc! { "_id": object_id })
            .await?;
        user.ok_or_else(|| Error::NotFound("User not found.".to_string()))
    }
}
