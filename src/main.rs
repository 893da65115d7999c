use std::{io, path::PathBuf};

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use log::LevelFilter;

use spdump::{cli, error, spotify::search::DEFAULT_MARKET, utils};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Credentials file (defaults to ./config.toml, then the local data directory)
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Dump a playlist as JSON
    Playlist(PlaylistOptions),

    /// List the names of a user's playlists
    User(UserOptions),

    /// Dump a single track as JSON
    Track(TrackOptions),

    /// Dump an album and its tracks as JSON
    Album(AlbumOptions),

    /// Search tracks, albums and playlists
    Search(SearchOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Playlist id, spotify:playlist: URI or open.spotify.com link
    #[clap(value_parser = utils::parse_playlist_id)]
    pub id: String,

    /// Pretty-print the JSON output
    #[clap(long)]
    pub pretty: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct UserOptions {
    /// Spotify user id, spotify:user: URI or open.spotify.com link
    #[clap(value_parser = utils::parse_user_id)]
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct TrackOptions {
    #[clap(value_parser = utils::parse_track_id)]
    pub id: String,

    #[clap(long)]
    pub pretty: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumOptions {
    #[clap(value_parser = utils::parse_album_id)]
    pub id: String,

    #[clap(long)]
    pub pretty: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    pub query: String,

    /// ISO 3166-1 alpha-2 market code
    #[clap(long, default_value = DEFAULT_MARKET)]
    pub market: String,

    #[clap(long)]
    pub pretty: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_logger(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut io::stdout());
        return;
    }

    let client = match cli::connect(cli.config).await {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };

    let mut out = io::stdout().lock();
    let result = match cli.command {
        Command::Playlist(opt) => cli::playlist(&client, &opt.id, opt.pretty, &mut out).await,
        Command::User(opt) => cli::user_playlists(&client, &opt.id, &mut out).await,
        Command::Track(opt) => cli::track(&client, &opt.id, opt.pretty, &mut out).await,
        Command::Album(opt) => cli::album(&client, &opt.id, opt.pretty, &mut out).await,
        Command::Search(opt) => {
            cli::search(&client, &opt.query, &opt.market, opt.pretty, &mut out).await
        }
        Command::Completions(_) => Ok(()),
    };

    if let Err(e) = result {
        error!("{}", e);
    }
}
