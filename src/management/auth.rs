use chrono::Utc;
use reqwest::Client;

use crate::{Result, config::Credentials, spotify::auth, types::Token};

/// Seconds before the advertised expiry at which a token counts as stale.
const EXPIRY_BUFFER: u64 = 240;

/// Keeps the current access token in memory and renews it on demand.
///
/// The client-credentials grant has no refresh token; renewing means running
/// the grant again with the stored credentials.
pub struct TokenManager {
    credentials: Credentials,
    token: Token,
}

impl TokenManager {
    pub fn new(credentials: Credentials, token: Token) -> Self {
        TokenManager { credentials, token }
    }

    /// Returns an access token that is not about to expire, renewing it first
    /// if needed. A failed renewal is returned as an error rather than falling
    /// back to the stale token.
    pub async fn get_valid_token(&mut self, http: &Client, token_url: &str) -> Result<String> {
        if self.is_expired() {
            log::debug!("Access token expired, requesting a new one");
            self.token = auth::client_credentials_token(http, token_url, &self.credentials).await?;
        }

        Ok(self.token.access_token.clone())
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp().max(0) as u64;
        let lifetime = self.token.expires_in.saturating_sub(EXPIRY_BUFFER);
        now >= self.token.obtained_at.saturating_add(lifetime)
    }
}
