//! Spotify Playlist Dump Library
//!
//! This library fetches playlists, albums and tracks from the Spotify Web API
//! using the client-credentials grant and flattens the provider's response
//! shapes into a provider-neutral schema that serializes to JSON.
//!
//! # Modules
//!
//! - `cli` - Command implementations used by the `spdump` binary
//! - `config` - Credentials file, `.env` loading and endpoint URLs
//! - `error` - Error taxonomy shared by every operation
//! - `management` - In-memory token lifecycle
//! - `music` - Provider-neutral output schema and the conversions into it
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Provider-shaped data structures
//! - `utils` - Identifier parsing and console helpers
//!
//! # Example
//!
//! ```
//! use spdump::{config, music::MusicPlaylist, spotify::{Endpoints, SpotifyClient}};
//!
//! #[tokio::main]
//! async fn main() -> spdump::Result<()> {
//!     let credentials = config::load_credentials(&config::resolve_config_path(None)).await?;
//!     let client = SpotifyClient::connect(credentials, Endpoints::from_env()).await?;
//!     let playlist = MusicPlaylist::from(client.playlist("3rpdjX0UZGjjmk3A86FrU3").await?);
//!     println!("{}", serde_json::to_string(&playlist).unwrap());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod music;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for every fallible operation in the crate.
///
/// # Example
///
/// ```
/// use spdump::Result;
///
/// async fn fetch_data() -> Result<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// Status output goes to stderr so that stdout only ever carries the
/// command's payload and can be piped.
///
/// # Example
///
/// ```
/// info!("Fetching playlist {}", id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Fetched {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing. Only the
/// binary uses this; library code returns [`Error`] instead.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Playlist {} has no tracks", id);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
