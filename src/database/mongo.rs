use crate::config::get_config;
use crate::error::Result;
use mongodb::{options::ClientOptions, Client, Database};

pub async fn connect() -> Result<Database> {
    let config = get_config();
    let mut options = ClientOptions::parse(&config.mongodb_uri).await?;
    options.app_name = Some("manageapp-backend".to_string());
    options.server_selection_timeout = Some(std::time::Duration::from_secs(30));
    let client = Client::with_options(options)?;
    Ok(client.database(&config.mongodb_database))
}
