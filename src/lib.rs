pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{sequence_service::SequenceService, user_service::UserService};
use mongodb::Database;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub user_service: UserService,
    pub sequence_service: SequenceService,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        let user_service = UserService::new(&db);
        let sequence_service = SequenceService::new(&db);

        Self {
            db,
            user_service,
            sequence_service,
        }
    }
}
