//! # CLI Module
//!
//! Command implementations behind the `spdump` binary. Every command runs the
//! same strictly sequential pipeline and stops at the first failure:
//!
//! ```text
//! load .env → resolve + read credentials → token grant → GET → translate → print
//! ```
//!
//! ## Commands
//!
//! - [`playlist`] - one playlist as a `MusicPlaylist` JSON document
//! - [`user_playlists`] - the names of a user's playlists, one per line
//! - [`track`] - one track as a `MusicTrack` JSON document
//! - [`album`] - one album, with its tracks, as a `MusicAlbum` JSON document
//! - [`search`] - tracks, albums and playlists matching a query
//!
//! ## Output
//!
//! Handlers write their payload to the writer they are given (stdout in the
//! binary). Progress spinners and status lines go to stderr so the payload
//! can be piped straight into another tool.
//!
//! ```bash
//! spdump playlist 3rpdjX0UZGjjmk3A86FrU3 > road-trip.json
//! spdump user some_user
//! spdump --config ~/spotify.toml album spotify:album:4aawyAB9vmqN3uQ7FjRGTy --pretty
//! ```

mod album;
mod playlist;
mod search;
mod track;
mod user;

use std::path::PathBuf;

pub use album::album;
pub use playlist::playlist;
pub use search::search;
pub use track::track;
pub use user::user_playlists;

use crate::{
    Result, config,
    spotify::{Endpoints, SpotifyClient},
    utils,
};

/// Loads configuration and authenticates, returning a ready client.
///
/// `config_path` is the value of `--config`, if given.
pub async fn connect(config_path: Option<PathBuf>) -> Result<SpotifyClient> {
    config::load_env()?;

    let path = config::resolve_config_path(config_path);
    let credentials = config::load_credentials(&path).await?;

    let pb = utils::spinner("Authenticating with Spotify...");
    let client = SpotifyClient::connect(credentials, Endpoints::from_env()).await;
    pb.finish_and_clear();

    client
}
