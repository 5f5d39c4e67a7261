//! Loading credentials from configuration
//!
//! Credentials may be partially specified in a JSON file or the environment.
//! Presence is only checked when converting into [`OAuth2Credentials`].

use crate::{AuthResult, OAuth2Credentials};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix for credential values
pub const ENV_PREFIX: &str = "GMAILER_";

/// Unvalidated credential configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsConfig {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl CredentialsConfig {
    /// Parse a JSON credentials document
    pub fn from_json(json: &str) -> AuthResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON credentials file
    pub fn from_file(path: impl AsRef<Path>) -> AuthResult<Self> {
        let path = path.as_ref();
        debug!("Loading credentials from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Read `GMAILER_USER`, `GMAILER_CLIENT_ID`, `GMAILER_CLIENT_SECRET`,
    /// `GMAILER_ACCESS_TOKEN` and `GMAILER_REFRESH_TOKEN`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(format!("{}{}", ENV_PREFIX, key)).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            user: lookup("USER"),
            client_id: lookup("CLIENT_ID"),
            client_secret: lookup("CLIENT_SECRET"),
            access_token: lookup("ACCESS_TOKEN"),
            refresh_token: lookup("REFRESH_TOKEN"),
        }
    }

    /// Validate into a credential set; absent values count as missing
    pub fn into_credentials(self) -> AuthResult<OAuth2Credentials> {
        OAuth2Credentials::new(
            self.user.unwrap_or_default(),
            self.client_id.unwrap_or_default(),
            self.client_secret.unwrap_or_default(),
            self.access_token.unwrap_or_default(),
            self.refresh_token.unwrap_or_default(),
        )
    }
}

impl TryFrom<CredentialsConfig> for OAuth2Credentials {
    type Error = crate::AuthError;

    fn try_from(config: CredentialsConfig) -> AuthResult<Self> {
        config.into_credentials()
    }
}
