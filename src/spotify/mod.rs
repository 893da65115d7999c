//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API that spdump reads. All
//! calls are plain authenticated `GET`s issued one after another; there is no
//! pagination, retry or caching.
//!
//! ```text
//! CLI command
//!     ↓
//! SpotifyClient ── TokenManager ── auth (client-credentials grant)
//!     ↓
//! reqwest (15 s timeout) → api.spotify.com/v1
//! ```
//!
//! ## Submodules
//!
//! - [`auth`] - exchanges the application credentials for a bearer token
//! - [`tracks`], [`albums`], [`playlists`] - single resources by id
//! - [`search`] - combined track/album/playlist search
//!
//! ## Errors
//!
//! Transport failures and non-200 answers become [`Error::Fetch`], bodies
//! that do not decode into the expected record become [`Error::Decode`]. A
//! client is only handed out once a first token has been obtained.

pub mod albums;
pub mod auth;
pub mod playlists;
pub mod search;
pub mod tracks;

use std::{fmt, time::Duration};

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::{
    Error, Result,
    config::{self, Credentials},
    management::TokenManager,
};

/// Applied to every request, the token request included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// The kinds of thing the client fetches, used to label errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Track,
    Album,
    Playlist,
    UserPlaylists,
    Search,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Track => "track",
            Resource::Album => "album",
            Resource::Playlist => "playlist",
            Resource::UserPlaylists => "user playlists",
            Resource::Search => "search",
        };
        write!(f, "{name}")
    }
}

/// Base URLs of the Web API and of the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub api_url: String,
    pub token_url: String,
}

impl Endpoints {
    pub fn new(api_url: impl Into<String>, token_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            token_url: token_url.into(),
        }
    }

    /// Spotify's public endpoints, unless overridden by `SPOTIFY_API_URL` /
    /// `SPOTIFY_API_TOKEN_URL`.
    pub fn from_env() -> Self {
        Self::new(config::spotify_apiurl(), config::spotify_apitoken_url())
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(config::DEFAULT_API_URL, config::DEFAULT_TOKEN_URL)
    }
}

pub struct SpotifyClient {
    http: Client,
    endpoints: Endpoints,
    tokens: Mutex<TokenManager>,
}

impl SpotifyClient {
    /// Builds a client and obtains its first access token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`] when the token endpoint refuses the
    /// credentials or answers with an unusable body; no client is returned in
    /// that case, so no resource request can follow a failed grant.
    pub async fn connect(credentials: Credentials, endpoints: Endpoints) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Auth(format!("cannot build HTTP client: {e}")))?;

        let token =
            auth::client_credentials_token(&http, &endpoints.token_url, &credentials).await?;
        log::debug!("Obtained access token, expires in {}s", token.expires_in);

        Ok(Self {
            http,
            endpoints,
            tokens: Mutex::new(TokenManager::new(credentials, token)),
        })
    }

    /// `GET {api_url}/{path}` with the current bearer token, decoded into `T`.
    ///
    /// `id` only labels errors; callers put it into `path` themselves.
    async fn get<T: DeserializeOwned>(
        &self,
        resource: Resource,
        id: &str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let token = self
            .tokens
            .lock()
            .await
            .get_valid_token(&self.http, &self.endpoints.token_url)
            .await?;

        let url = format!("{}/{}", self.endpoints.api_url, path);
        log::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::fetch(resource, id, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::fetch(resource, id, e))?;

        if status != StatusCode::OK {
            log::debug!("{resource} {id} answered {status}: {body}");
            return Err(Error::fetch(
                resource,
                id,
                format!("unexpected status {status}"),
            ));
        }

        serde_json::from_str(&body).map_err(|source| Error::Decode {
            resource,
            id: id.to_string(),
            source,
        })
    }
}

/// Percent-encodes an id for use as a single path segment.
fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}
