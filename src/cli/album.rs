use std::io::Write;

use crate::{Result, music::MusicAlbum, spotify::SpotifyClient, utils};

pub async fn album(
    client: &SpotifyClient,
    id: &str,
    pretty: bool,
    out: &mut impl Write,
) -> Result<()> {
    let pb = utils::spinner(format!("Fetching album {id}..."));
    let fetched = client.album(id).await;
    pb.finish_and_clear();

    let album = MusicAlbum::from(fetched?);
    writeln!(out, "{}", utils::to_json(&album, pretty)?)?;
    Ok(())
}
