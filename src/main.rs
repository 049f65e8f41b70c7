//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nba_tracker::{
    cli::{Commands, Tracker},
    commands::{
        player::{handle_player, PlayerParams},
        roster::handle_roster,
        schedule::handle_schedule,
        session::handle_session,
    },
};
use tracing::Level;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Tracker::parse();

    let level = if app.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let source = &app.source;
    match app.command {
        Commands::Schedule { json } => handle_schedule(source, json)
            .await
            .context("failed to load the schedule")?,

        Commands::Roster { team, toggle } => handle_roster(source, team, toggle)
            .await
            .context("failed to load the roster")?,

        Commands::Player {
            id,
            stat,
            games,
            line,
            mode,
            json,
            svg,
            refresh,
        } => handle_player(
            source,
            PlayerParams {
                id,
                stat,
                games,
                line,
                mode,
                as_json: json,
                svg,
                refresh,
            },
        )
        .await
        .with_context(|| format!("failed to load player {}", id))?,

        Commands::Session => handle_session(source)
            .await
            .context("session ended with an error")?,
    }

    Ok(())
}
