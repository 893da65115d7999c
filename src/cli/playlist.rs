use std::io::Write;

use crate::{Result, music::MusicPlaylist, spotify::SpotifyClient, utils, warning};

/// Fetches playlist `id` and writes it as a single `MusicPlaylist` document.
pub async fn playlist(
    client: &SpotifyClient,
    id: &str,
    pretty: bool,
    out: &mut impl Write,
) -> Result<()> {
    let pb = utils::spinner(format!("Fetching playlist {id}..."));
    let fetched = client.playlist(id).await;
    pb.finish_and_clear();

    let playlist = MusicPlaylist::from(fetched?);
    if playlist.tracks.is_none() {
        warning!("Playlist {} has no tracks", playlist.name);
    }

    writeln!(out, "{}", utils::to_json(&playlist, pretty)?)?;
    Ok(())
}
