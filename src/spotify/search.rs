use crate::{Result, types::SearchResponse};

use super::{Resource, SpotifyClient};

/// Market used when the caller does not pass one.
pub const DEFAULT_MARKET: &str = "US";

/// Maximum page size the search endpoint accepts.
pub const SEARCH_LIMIT: &str = "50";

impl SpotifyClient {
    /// Searches tracks, albums and playlists in one request
    /// (`GET /search?type=track,album,playlist`).
    ///
    /// `market` is an ISO 3166-1 alpha-2 country code; an empty value falls
    /// back to [`DEFAULT_MARKET`]. Results are never cached.
    pub async fn search(&self, query: &str, market: &str) -> Result<SearchResponse> {
        let market = if market.trim().is_empty() {
            DEFAULT_MARKET
        } else {
            market
        };

        self.get(
            Resource::Search,
            query,
            "search",
            &[
                ("q", query),
                ("type", "track,album,playlist"),
                ("market", market),
                ("limit", SEARCH_LIMIT),
            ],
        )
        .await
    }
}
