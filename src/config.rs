//! Configuration management for spdump.
//!
//! The Spotify application credentials come from a TOML file with a
//! `[spotify]` table:
//!
//! ```toml
//! [spotify]
//! client_id = "..."
//! client_secret = "..."
//! ```
//!
//! API endpoint URLs default to Spotify's public ones and can be overridden
//! through environment variables, which may also be set in a `.env` file in
//! the working directory.

use std::{
    env, fmt,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{Error, Result};

/// File name looked up in the working directory and in the local data directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Client id and secret of a Spotify developer application.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    spotify: Credentials,
}

/// Loads environment variables from a `.env` file in the working directory.
///
/// A missing `.env` file is fine; the variables it could set all have
/// defaults. A `.env` file that exists but cannot be parsed is a
/// configuration error.
pub fn load_env() -> Result<()> {
    match dotenv::dotenv() {
        Ok(path) => {
            log::debug!("Loaded environment from {}", path.display());
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(Error::Config(format!("cannot load .env: {e}"))),
    }
}

/// Picks the credentials file to read.
///
/// An explicitly given path always wins. Otherwise `config.toml` in the
/// working directory is used when present, and the copy in the platform's
/// local data directory (`~/.local/share/spdump/config.toml` on Linux) when
/// it is not.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return local;
    }

    match dirs::data_local_dir() {
        Some(mut path) => {
            path.push("spdump");
            path.push(CONFIG_FILE_NAME);
            path
        }
        None => local,
    }
}

/// Reads and validates the credentials file at `path`.
///
/// # Errors
///
/// Returns [`Error::Config`] if the file cannot be read, is not valid TOML,
/// lacks `spotify.client_id` / `spotify.client_secret`, holds them with a
/// non-string type, or either value is empty.
pub async fn load_credentials(path: &Path) -> Result<Credentials> {
    let content = async_fs::read_to_string(path)
        .await
        .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;

    let credentials = parse_credentials(&content)?;
    log::debug!(
        "Loaded credentials for client {} from {}",
        credentials.client_id,
        path.display()
    );
    Ok(credentials)
}

/// Parses the contents of a credentials file.
pub fn parse_credentials(content: &str) -> Result<Credentials> {
    let file: ConfigFile = toml::from_str(content)?;
    let credentials = file.spotify;

    if credentials.client_id.trim().is_empty() {
        return Err(Error::Config("spotify.client_id is empty".into()));
    }
    if credentials.client_secret.trim().is_empty() {
        return Err(Error::Config("spotify.client_secret is empty".into()));
    }

    Ok(credentials)
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, falling back to `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    env_or("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Returns the OAuth token endpoint used for the client-credentials grant.
///
/// Reads `SPOTIFY_API_TOKEN_URL`, falling back to
/// `https://accounts.spotify.com/api/token`.
pub fn spotify_apitoken_url() -> String {
    env_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .map(|v| v.trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_secret() {
        let creds = Credentials::new("id", "very-secret");
        let printed = format!("{creds:?}");
        assert!(printed.contains("id"));
        assert!(!printed.contains("very-secret"));
    }

    #[test]
    fn explicit_path_wins() {
        let path = resolve_config_path(Some(PathBuf::from("/etc/spdump.toml")));
        assert_eq!(path, PathBuf::from("/etc/spdump.toml"));
    }

    #[test]
    fn fallback_path_ends_with_config_file_name() {
        let path = resolve_config_path(None);
        assert!(path.ends_with(CONFIG_FILE_NAME));
    }
}
