use chrono::Utc;
use reqwest::{Client, StatusCode};

use crate::{
    Error, Result,
    config::Credentials,
    types::{Token, TokenResponse},
};

/// Lifetime assumed when the token endpoint does not send `expires_in`.
const DEFAULT_EXPIRES_IN: u64 = 3600;

/// Exchanges application credentials for a bearer token.
///
/// Posts `grant_type=client_credentials` to `token_url`, authenticating with
/// HTTP basic auth (client id / client secret). No user is involved and no
/// refresh token is issued; a new token is obtained by running the grant
/// again.
///
/// # Errors
///
/// Returns [`Error::Auth`] when:
/// - the endpoint cannot be reached
/// - it answers with anything but 200
/// - the body is not JSON, or `access_token` is missing or empty
pub async fn client_credentials_token(
    http: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<Token> {
    log::debug!("Requesting client-credentials token from {token_url}");

    let response = http
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| Error::Auth(format!("token endpoint unreachable: {e}")))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Auth(format!("cannot read token response: {e}")))?;

    if status != StatusCode::OK {
        log::debug!("Token endpoint answered {status}: {body}");
        return Err(Error::Auth(format!("token endpoint answered {status}")));
    }

    token_from_body(&body)
}

fn token_from_body(body: &str) -> Result<Token> {
    let parsed: TokenResponse = serde_json::from_str(body)
        .map_err(|e| Error::Auth(format!("malformed token response: {e}")))?;

    if parsed.access_token.is_empty() {
        return Err(Error::Auth("malformed token response: empty access_token".into()));
    }

    Ok(Token {
        access_token: parsed.access_token,
        token_type: parsed.token_type.unwrap_or_else(|| "Bearer".to_string()),
        expires_in: parsed.expires_in.unwrap_or(DEFAULT_EXPIRES_IN),
        obtained_at: Utc::now().timestamp().max(0) as u64,
    })
}
