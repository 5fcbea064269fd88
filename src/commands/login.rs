//! Login command: OAuth code exchange plus user-record sync.

use reqwest::Client;

use crate::{
    identity::{resolve_identity, OauthCredentials},
    storage::FantasyDatabase,
    Result,
};

/// Exchange the authorization code and upsert the local user row.
///
/// Safe to run on every login; the upsert refreshes the display name and
/// avatar without ever duplicating the row.
pub async fn handle_login(code: &str) -> Result<()> {
    let credentials = OauthCredentials::from_env()?;
    let client = Client::new();

    let identity = resolve_identity(&client, &credentials, code).await?;

    let mut db = FantasyDatabase::new()?;
    db.upsert_user(&identity)?;

    println!("✓ Logged in as {} ({})", identity.username, identity.id);
    Ok(())
}
