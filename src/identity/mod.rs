//! Identity gateway boundary: Discord OAuth code exchange.
//!
//! The core never authenticates anyone itself. It hands an authorization
//! code to Discord, gets back a stable user identity, and the login command
//! upserts that into the local `users` table.

use reqwest::Client;
use serde::Deserialize;

use crate::{error::FantasyError, storage::UserIdentity, Result, UserId};

pub const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
pub const DISCORD_ME_URL: &str = "https://discord.com/api/users/@me";

pub const CLIENT_ID_ENV_VAR: &str = "DISCORD_CLIENT_ID";
pub const CLIENT_SECRET_ENV_VAR: &str = "DISCORD_CLIENT_SECRET";
pub const REDIRECT_URI_ENV_VAR: &str = "DISCORD_REDIRECT_URI";

/// OAuth application credentials, read from the environment.
#[derive(Debug, Clone)]
pub struct OauthCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl OauthCredentials {
    /// Load credentials from env vars, naming the first missing one.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client_id: require_env(CLIENT_ID_ENV_VAR)?,
            client_secret: require_env(CLIENT_SECRET_ENV_VAR)?,
            redirect_uri: require_env(REDIRECT_URI_ENV_VAR)?,
        })
    }
}

fn require_env(env_var: &str) -> Result<String> {
    std::env::var(env_var).map_err(|_| FantasyError::MissingCredential {
        env_var: env_var.to_string(),
    })
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct DiscordUser {
    id: String,
    username: String,
    #[serde(default)]
    discriminator: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
}

impl DiscordUser {
    /// Display name: `name#discriminator` for legacy accounts, bare name
    /// once Discord dropped discriminators ("0").
    fn display_name(&self) -> String {
        match self.discriminator.as_deref() {
            Some(d) if d != "0" => format!("{}#{}", self.username, d),
            _ => self.username.clone(),
        }
    }

    fn avatar_url(&self) -> Option<String> {
        self.avatar
            .as_ref()
            .map(|hash| format!("https://cdn.discordapp.com/avatars/{}/{}.png", self.id, hash))
    }
}

/// Exchange an authorization code for the user's identity.
///
/// Two calls against the gateway: code → access token, then token →
/// profile. The returned identity carries only what the roster store needs.
pub async fn resolve_identity(
    client: &Client,
    credentials: &OauthCredentials,
    code: &str,
) -> Result<UserIdentity> {
    let token = client
        .post(DISCORD_TOKEN_URL)
        .form(&[
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", credentials.redirect_uri.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?
        .json::<TokenResponse>()
        .await?;

    let user = client
        .get(DISCORD_ME_URL)
        .bearer_auth(&token.access_token)
        .send()
        .await?
        .error_for_status()?
        .json::<DiscordUser>()
        .await?;

    Ok(UserIdentity {
        id: UserId::new(user.id.clone()),
        username: user.display_name(),
        avatar_url: user.avatar_url(),
    })
}
