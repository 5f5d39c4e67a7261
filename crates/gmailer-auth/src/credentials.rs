//! OAuth2 credential set
//!
//! The five values Gmail needs to authenticate a sender without a stored
//! password. A `OAuth2Credentials` either holds all five or does not exist.

use crate::{AuthError, AuthResult};

/// Validated OAuth2 credential set
#[derive(Clone, PartialEq, Eq)]
pub struct OAuth2Credentials {
    user: String,
    client_id: String,
    client_secret: String,
    access_token: String,
    refresh_token: String,
}

impl OAuth2Credentials {
    /// Create a credential set, failing on the first missing field.
    ///
    /// Fields are checked in order: user, client id, client secret,
    /// access token, refresh token. An empty string counts as missing.
    pub fn new(
        user: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> AuthResult<Self> {
        Ok(Self {
            user: require(user.into(), AuthError::MissingUser)?,
            client_id: require(client_id.into(), AuthError::MissingClientId)?,
            client_secret: require(client_secret.into(), AuthError::MissingClientSecret)?,
            access_token: require(access_token.into(), AuthError::MissingAccessToken)?,
            refresh_token: require(refresh_token.into(), AuthError::MissingRefreshToken)?,
        })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

impl std::fmt::Debug for OAuth2Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuth2Credentials")
            .field("user", &self.user)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Presence check shared by every credential field.
fn require(value: String, missing: AuthError) -> AuthResult<String> {
    if value.is_empty() {
        Err(missing)
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(fields: [&str; 5]) -> AuthResult<OAuth2Credentials> {
        OAuth2Credentials::new(fields[0], fields[1], fields[2], fields[3], fields[4])
    }

    #[test]
    fn test_missing_user() {
        let err = build(["", "", "", "", ""]).unwrap_err();
        assert_eq!(err.to_string(), "OAuth2 user is missing");
    }

    #[test]
    fn test_missing_client_id() {
        let err = build(["userName", "", "", "", ""]).unwrap_err();
        assert_eq!(err.to_string(), "OAuth2 client id is missing");
    }

    #[test]
    fn test_missing_client_secret() {
        let err = build(["userName", "clientId", "", "", ""]).unwrap_err();
        assert_eq!(err.to_string(), "OAuth2 client secret is missing");
    }

    #[test]
    fn test_missing_access_token() {
        let err = build(["userName", "clientId", "clientSecret", "", ""]).unwrap_err();
        assert_eq!(err.to_string(), "OAuth2 access token is missing.");
    }

    #[test]
    fn test_missing_refresh_token() {
        let err = build(["userName", "clientId", "clientSecret", "accessToken", ""]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "OAuth2 refresh token is missing. Please obtain refresh token and put in your configuration"
        );
    }

    #[test]
    fn test_earlier_field_wins() {
        // client id and refresh token both missing; client id is checked first
        let err = build(["userName", "", "clientSecret", "accessToken", ""]).unwrap_err();
        assert!(matches!(err, AuthError::MissingClientId));
    }

    #[test]
    fn test_valid_credentials_are_stored_verbatim() {
        let creds = build([
            "userName",
            "clientId",
            "clientSecret",
            "accessToken",
            "refreshToken",
        ])
        .unwrap();

        assert_eq!(creds.user(), "userName");
        assert_eq!(creds.client_id(), "clientId");
        assert_eq!(creds.client_secret(), "clientSecret");
        assert_eq!(creds.access_token(), "accessToken");
        assert_eq!(creds.refresh_token(), "refreshToken");
    }

    #[test]
    fn test_whitespace_is_not_missing() {
        assert!(build([" ", " ", " ", " ", " "]).is_ok());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = build(["userName", "clientId", "s3cret", "ya29.tok", "1//refresh"]).unwrap();
        let printed = format!("{:?}", creds);
        assert!(printed.contains("userName"));
        assert!(!printed.contains("s3cret"));
        assert!(!printed.contains("ya29.tok"));
        assert!(!printed.contains("1//refresh"));
    }
}
