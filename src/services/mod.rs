pub mod sequence_service;
pub mod user_service;
