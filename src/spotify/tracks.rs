use crate::{Result, types::Track};

use super::{Resource, SpotifyClient, segment};

impl SpotifyClient {
    /// Fetches a single track by its Spotify id (`GET /tracks/{id}`).
    ///
    /// The returned record embeds the track's album, which is where the
    /// album name, art and release date of the output come from.
    pub async fn track(&self, id: &str) -> Result<Track> {
        self.get(Resource::Track, id, &format!("tracks/{}", segment(id)), &[])
            .await
    }
}
