use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::{Error, Result};

/// Resource kinds an identifier can be given for on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Playlist,
    Track,
    Album,
    User,
}

impl IdKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdKind::Playlist => "playlist",
            IdKind::Track => "track",
            IdKind::Album => "album",
            IdKind::User => "user",
        }
    }
}

/// Extracts a bare Spotify id from user input.
///
/// Accepts the id itself, a `spotify:<kind>:<id>` URI, or an
/// `https://open.spotify.com/<kind>/<id>?...` link (locale prefixes such as
/// `/intl-de/` are fine). Short `spotify.link` share links cannot be resolved
/// offline and are rejected.
pub fn extract_id(kind: IdKind, input: &str) -> std::result::Result<String, String> {
    let trimmed = input.trim();
    let kind_name = kind.as_str();

    if trimmed.is_empty() {
        return Err(format!("{kind_name} id cannot be empty"));
    }

    if let Some(rest) = trimmed.strip_prefix("spotify:") {
        return match rest.split_once(':') {
            Some((k, id)) if k == kind_name && !id.is_empty() => check_id(kind, id),
            _ => Err(format!("'{trimmed}' is not a spotify {kind_name} URI")),
        };
    }

    if trimmed.contains("spotify.link/") {
        return Err(
            "share links are not supported, use the full open.spotify.com URL".to_string(),
        );
    }

    if trimmed.contains("open.spotify.com/") {
        let marker = format!("/{kind_name}/");
        return trimmed
            .split_once(marker.as_str())
            .and_then(|(_, rest)| rest.split(['?', '#', '/']).next())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .ok_or_else(|| format!("could not find a {kind_name} id in '{trimmed}'"));
    }

    check_id(kind, trimmed)
}

fn check_id(kind: IdKind, id: &str) -> std::result::Result<String, String> {
    if id
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#'))
    {
        return Err(format!("invalid {} id '{id}'", kind.as_str()));
    }

    Ok(id.to_string())
}

pub fn parse_playlist_id(s: &str) -> std::result::Result<String, String> {
    extract_id(IdKind::Playlist, s)
}

pub fn parse_track_id(s: &str) -> std::result::Result<String, String> {
    extract_id(IdKind::Track, s)
}

pub fn parse_album_id(s: &str) -> std::result::Result<String, String> {
    extract_id(IdKind::Album, s)
}

pub fn parse_user_id(s: &str) -> std::result::Result<String, String> {
    extract_id(IdKind::User, s)
}

/// Serializes an output document, compact by default.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map_err(Error::Encode)
}

/// Spinner drawn on stderr while a request is in flight. Hidden
/// automatically when stderr is not a terminal.
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
