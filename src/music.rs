//! Provider-neutral output schema.
//!
//! Everything in here is built from the provider-shaped records in
//! [`crate::types`] through `From` conversions and is only ever serialized.
//! Field names follow the schema downstream consumers already read
//! (`Name`, `IntegrationID`, `AlbumArt`, ...).

use serde::Serialize;

use crate::types::{Album, Artist, Image, Playlist, SearchResponse, Track};

/// Source tag stamped on every track.
pub const SOURCE: &str = "spotify";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MusicTrack {
    pub name: String,
    #[serde(rename = "PreviewURL")]
    pub preview_url: String,
    pub album_name: String,
    pub album_art: Vec<Image>,
    pub album_release_date: String,
    #[serde(rename = "IntegrationID")]
    pub integration_id: String,
    pub source: String,
    #[serde(rename = "ExternalURL")]
    pub external_url: String,
    /// Artist names joined with `", "`, in source order.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub artists: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MusicAlbum {
    pub name: String,
    pub album_art: Vec<Image>,
    pub release_date: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub artists: Vec<MusicArtist>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<MusicTrack>>,
    #[serde(rename = "IntegrationID")]
    pub integration_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MusicPlaylist {
    pub name: String,
    pub playlist_art: Vec<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<MusicTrack>>,
    #[serde(rename = "IntegrationID")]
    pub integration_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MusicArtist {
    pub name: String,
    #[serde(rename = "IntegrationID")]
    pub integration_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MusicSearchResult {
    pub tracks: Vec<MusicTrack>,
    pub albums: Vec<MusicAlbum>,
    pub playlists: Vec<MusicPlaylist>,
}

impl From<Artist> for MusicArtist {
    fn from(artist: Artist) -> Self {
        MusicArtist {
            name: artist.name,
            integration_id: artist.id,
        }
    }
}

impl From<Track> for MusicTrack {
    fn from(track: Track) -> Self {
        let artists = track.combine_artists();
        MusicTrack {
            name: track.name,
            preview_url: track.preview_url,
            album_name: track.album.name,
            album_art: track.album.images,
            album_release_date: track.album.release_date,
            integration_id: track.id,
            source: SOURCE.to_string(),
            external_url: track.external_urls.spotify,
            artists,
        }
    }
}

impl From<Album> for MusicAlbum {
    fn from(album: Album) -> Self {
        let Album {
            name,
            images,
            uri,
            external_urls,
            id,
            release_date,
            artists,
            tracks,
        } = album;

        // Tracks nested in an album payload carry no album of their own, so
        // they get a copy of the parent (minus its track list) before mapping.
        let parent = Album {
            name: name.clone(),
            images: images.clone(),
            uri,
            external_urls,
            id: id.clone(),
            release_date: release_date.clone(),
            artists: artists.clone(),
            tracks: Default::default(),
        };
        let tracks = non_empty(tracks.items, |mut track| {
            track.album = parent.clone();
            MusicTrack::from(track)
        });

        MusicAlbum {
            name,
            album_art: images,
            release_date,
            artists: artists.into_iter().map(MusicArtist::from).collect(),
            tracks,
            integration_id: id,
        }
    }
}

impl From<Playlist> for MusicPlaylist {
    fn from(playlist: Playlist) -> Self {
        MusicPlaylist {
            name: playlist.name,
            playlist_art: playlist.images,
            tracks: non_empty(playlist.tracks.items, |item| MusicTrack::from(item.track)),
            integration_id: playlist.id,
        }
    }
}

impl From<SearchResponse> for MusicSearchResult {
    fn from(search: SearchResponse) -> Self {
        MusicSearchResult {
            tracks: search.tracks.items.into_iter().map(MusicTrack::from).collect(),
            albums: search.albums.items.into_iter().map(MusicAlbum::from).collect(),
            playlists: search
                .playlists
                .items
                .into_iter()
                .map(MusicPlaylist::from)
                .collect(),
        }
    }
}

fn non_empty<T, U>(items: Vec<T>, f: impl FnMut(T) -> U) -> Option<Vec<U>> {
    if items.is_empty() {
        None
    } else {
        Some(items.into_iter().map(f).collect())
    }
}
