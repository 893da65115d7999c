use crate::{
    Result,
    types::{Playlist, UserPlaylistsResponse},
};

use super::{Resource, SpotifyClient, segment};

impl SpotifyClient {
    /// Fetches a playlist by its Spotify id (`GET /playlists/{id}`).
    ///
    /// Only the first page of the nested track collection is returned, as
    /// delivered by the API's default page size. Longer playlists are
    /// truncated.
    pub async fn playlist(&self, id: &str) -> Result<Playlist> {
        let playlist: Playlist = self
            .get(
                Resource::Playlist,
                id,
                &format!("playlists/{}", segment(id)),
                &[],
            )
            .await?;

        if let Some(total) = playlist.tracks.total {
            let fetched = playlist.tracks.items.len() as u64;
            if total > fetched {
                log::warn!(
                    "Playlist {id} has {total} tracks, only the first {fetched} are included"
                );
            }
        }

        Ok(playlist)
    }

    /// Fetches the first page of a user's public playlists
    /// (`GET /users/{user_id}/playlists`).
    ///
    /// The entries are simplified playlists: their track collection holds a
    /// count but no items.
    pub async fn user_playlists(&self, user_id: &str) -> Result<UserPlaylistsResponse> {
        self.get(
            Resource::UserPlaylists,
            user_id,
            &format!("users/{}/playlists", segment(user_id)),
            &[],
        )
        .await
    }
}
