use std::io::Write;

use crate::{Result, music::MusicTrack, spotify::SpotifyClient, utils};

pub async fn track(
    client: &SpotifyClient,
    id: &str,
    pretty: bool,
    out: &mut impl Write,
) -> Result<()> {
    let pb = utils::spinner(format!("Fetching track {id}..."));
    let fetched = client.track(id).await;
    pb.finish_and_clear();

    let track = MusicTrack::from(fetched?);
    writeln!(out, "{}", utils::to_json(&track, pretty)?)?;
    Ok(())
}
