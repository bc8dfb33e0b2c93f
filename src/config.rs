//! # Configuration
//!
//! Credential loading for the Twitter API. Secrets are read once at startup
//! and passed explicitly into client construction; nothing reads the
//! environment after this point.

use crate::error::TrackerError;

/// Environment variable holding the consumer API key
pub const ENV_API_KEY: &str = "TWITTER_API_KEY";
/// Environment variable holding the consumer API secret
pub const ENV_API_SECRET: &str = "TWITTER_API_SECRET";
/// Environment variable holding the v2 bearer token
pub const ENV_BEARER_TOKEN: &str = "TWITTER_BEARER_TOKEN";

/// Twitter API credentials
///
/// All three secrets are required to start a run, though v2 recent search
/// itself authenticates with the bearer token only.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Consumer API key
    pub api_key: String,
    /// Consumer API secret
    pub api_secret: String,
    /// OAuth 2.0 bearer token
    pub bearer_token: String,
}

impl Credentials {
    /// Load credentials from the environment (and a `.env` file if present)
    ///
    /// Returns `TrackerError::MissingCredentials` naming every absent
    /// variable if any of the three is unset or empty.
    pub fn from_env() -> Result<Self, TrackerError> {
        dotenv::dotenv().ok();

        let mut missing = Vec::new();
        let mut get = |name: &str| -> String {
            match std::env::var(name) {
                Ok(value) if !value.trim().is_empty() => value,
                _ => {
                    missing.push(name.to_string());
                    String::new()
                }
            }
        };

        let api_key = get(ENV_API_KEY);
        let api_secret = get(ENV_API_SECRET);
        let bearer_token = get(ENV_BEARER_TOKEN);

        if !missing.is_empty() {
            return Err(TrackerError::MissingCredentials { missing });
        }

        Ok(Self {
            api_key,
            api_secret,
            bearer_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_construction() {
        let creds = Credentials {
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            bearer_token: "bearer".to_string(),
        };
        assert_eq!(creds.bearer_token, "bearer");
    }
}
