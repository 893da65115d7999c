use crate::{Result, types::Album};

use super::{Resource, SpotifyClient, segment};

impl SpotifyClient {
    /// Fetches an album by its Spotify id (`GET /albums/{id}`).
    ///
    /// The response carries the first page of the album's tracks. Those
    /// tracks omit their `album` field; [`crate::music::MusicAlbum`] fills it
    /// back in from the parent.
    pub async fn album(&self, id: &str) -> Result<Album> {
        self.get(Resource::Album, id, &format!("albums/{}", segment(id)), &[])
            .await
    }
}
