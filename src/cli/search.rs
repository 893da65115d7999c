use std::io::Write;

use crate::{Result, info, music::MusicSearchResult, spotify::SpotifyClient, utils};

/// Runs a combined search and writes the `MusicSearchResult` document.
pub async fn search(
    client: &SpotifyClient,
    query: &str,
    market: &str,
    pretty: bool,
    out: &mut impl Write,
) -> Result<()> {
    let pb = utils::spinner(format!("Searching for \"{query}\"..."));
    let fetched = client.search(query, market).await;
    pb.finish_and_clear();

    let result = MusicSearchResult::from(fetched?);
    info!(
        "Found {} tracks, {} albums, {} playlists",
        result.tracks.len(),
        result.albums.len(),
        result.playlists.len()
    );

    writeln!(out, "{}", utils::to_json(&result, pretty)?)?;
    Ok(())
}
