use std::io::Write;

use crate::{Result, spotify::SpotifyClient, utils};

/// Writes the name of each of the user's playlists on its own line.
///
/// Only the first page the API returns is listed.
pub async fn user_playlists(
    client: &SpotifyClient,
    user_id: &str,
    out: &mut impl Write,
) -> Result<()> {
    let pb = utils::spinner(format!("Fetching playlists of {user_id}..."));
    let fetched = client.user_playlists(user_id).await;
    pb.finish_and_clear();

    for playlist in fetched?.items {
        writeln!(out, "{}", playlist.name)?;
    }
    Ok(())
}
