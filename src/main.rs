mod api;
mod app;
mod catalog;
mod config;
mod input;
mod lyrics;
mod player;
mod storage;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "nocturne", version, about = "Terminal client for a personal music server")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Search the catalog and print tracks to stdout (headless).
    Search {
        query: String,
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
    /// Print favorite tracks to stdout (headless).
    Favorites,
    /// List playlists to stdout (headless).
    Playlists,
    /// Print a playlist's tracks to stdout (headless).
    Playlist { playlist_id: i64 },
    /// Ask the server to rescan its music directory.
    Scan,

    /// Edit persisted client settings.
    Config {
        #[command(subcommand)]
        setting: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Set the music server base URL.
    ServerUrl { url: String },
    /// Set the music directory and push it to the server.
    MusicFolder { path: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let cfg_path = match cli.config.clone() {
        Some(p) => p,
        None => config::default_config_path().context("default config path")?,
    };

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let mut terminal = tui::TerminalGuard::enter().context("init terminal")?;
            let mut app = app::App::new(cfg, cfg_path)?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Search { query, limit } => {
            let client = api::ServerClient::new(&cfg.server.url)?;
            let tracks = client.search(&query, limit).await?;
            print_tracks(&tracks);
        }
        Command::Favorites => {
            let client = api::ServerClient::new(&cfg.server.url)?;
            for (i, t) in client.favorites().await?.iter().enumerate() {
                let added = t
                    .added_at
                    .as_deref()
                    .map(|d| format!("  added {d}"))
                    .unwrap_or_default();
                println!(
                    "{:02}. {} — {}  (id={}){}",
                    i + 1,
                    t.title,
                    t.artist_or_unknown(),
                    t.id,
                    added
                );
            }
        }
        Command::Playlists => {
            let client = api::ServerClient::new(&cfg.server.url)?;
            for p in client.playlists().await? {
                let count = p
                    .track_count
                    .map(|c| format!(" ({c} tracks)"))
                    .unwrap_or_default();
                let created = p
                    .created_at
                    .as_deref()
                    .map(|d| format!("  created {d}"))
                    .unwrap_or_default();
                println!("{:>4}  {}{}{}", p.id, p.name, count, created);
            }
        }
        Command::Playlist { playlist_id } => {
            let client = api::ServerClient::new(&cfg.server.url)?;
            let playlist = client.playlist(playlist_id).await?;
            println!("{} ({} tracks)", playlist.name, playlist.tracks.len());
            print_tracks(&playlist.tracks);
        }
        Command::Scan => {
            let client = api::ServerClient::new(&cfg.server.url)?;
            client.scan().await?;
            println!("Library rescan started.");
        }
        Command::Config { setting } => {
            let mut cfg = cfg;
            match setting {
                ConfigCommand::ServerUrl { url } => {
                    cfg.server.url = url.trim_end_matches('/').to_string();
                    config::save(&cfg, cli.config.as_deref()).context("save config")?;
                    println!("Server URL set to {}", cfg.server.url);
                }
                ConfigCommand::MusicFolder { path } => {
                    cfg.server.music_folder = Some(path.clone());
                    config::save(&cfg, cli.config.as_deref()).context("save config")?;
                    // Best effort: the server may not be up right now.
                    let client = api::ServerClient::new(&cfg.server.url)?;
                    match client.set_music_directory(&path).await {
                        Ok(()) => println!("Music folder set to {path}"),
                        Err(e) => {
                            tracing::warn!("could not update server settings: {e:#}");
                            println!("Saved locally; server not updated ({e:#})");
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_tracks(tracks: &[api::models::Track]) {
    for (i, t) in tracks.iter().enumerate() {
        println!(
            "{:02}. {} — {}  (id={})",
            i + 1,
            t.title,
            t.artist_or_unknown(),
            t.id
        );
    }
}
