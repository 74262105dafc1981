use anyhow::{Context, Result};
use mongodb::Client;

use crate::config::Settings;
use crate::store::MongoLinkStore;

/// Connects to MongoDB, checks the server is reachable and makes sure the
/// unique index on `code` exists.
pub async fn get_link_store(settings: &Settings) -> Result<MongoLinkStore> {
    let client = Client::with_uri_str(&settings.database_url)
        .await
        .context("Failed to parse DATABASE_URL")?;
    let store = MongoLinkStore::new(client.database(&settings.database_name));

    store
        .ping()
        .await
        .context("Failed to reach the database")?;
    log::info!("Connected to database `{}`", settings.database_name);

    store
        .ensure_indexes()
        .await
        .context("Failed to create the unique index on links.code")?;
    log::info!("Unique index on links.code is in place");

    Ok(store)
}
