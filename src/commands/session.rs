//! Interactive session: one dashboard, driven line by line from stdin.

use std::str::FromStr;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::{
    cli::{
        parse_line,
        types::{DisplayMode, GameWindow, PlayerId, StatCategory, TeamCode},
        SourceOptions,
    },
    error::TrackerError,
    nba::DataSource,
    state::Dashboard,
    Result,
};

use super::{build_source, render};

const HELP: &str = "\
select ID     load a player
clear         drop the active player
stat CAT      PTS REB AST PTS+REB PTS+AST REB+AST PRA
line X        set the comparison line
mode MODE     dist eff def cmb
games N       5 10 15
toggle TEAM   expand or collapse a team
teams         show the team sidebar
show          show the player dashboard
quit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Select(PlayerId),
    Clear,
    Stat(StatCategory),
    Line(f64),
    Mode(DisplayMode),
    Games(GameWindow),
    Toggle(TeamCode),
    Teams,
    Show,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TrackerError::InvalidCommand {
            input: s.trim().to_string(),
        };
        let mut parts = s.split_whitespace();
        let verb = parts.next().ok_or_else(invalid)?.to_lowercase();
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }

        match (verb.as_str(), arg) {
            ("select" | "player", Some(id)) => Ok(Self::Select(id.parse()?)),
            ("stat", Some(cat)) => Ok(Self::Stat(cat.parse()?)),
            ("line", Some(x)) => parse_line(x).map(Self::Line).map_err(|_| invalid()),
            ("mode", Some(mode)) => Ok(Self::Mode(mode.parse()?)),
            ("games", Some(n)) => Ok(Self::Games(n.parse()?)),
            ("toggle", Some(team)) => Ok(Self::Toggle(team.parse()?)),
            ("clear", None) => Ok(Self::Clear),
            ("teams", None) => Ok(Self::Teams),
            ("show", None) => Ok(Self::Show),
            ("help" | "?", None) => Ok(Self::Help),
            ("quit" | "exit", None) => Ok(Self::Quit),
            _ => Err(invalid()),
        }
    }
}

/// Apply one command and return the lines to print.
pub async fn execute<D>(dashboard: &mut Dashboard<D>, command: SessionCommand) -> Result<Vec<String>>
where
    D: DataSource + Send + Sync + 'static,
{
    match command {
        SessionCommand::Select(id) => {
            dashboard.select_player(id).await?;
            render::dashboard_lines(dashboard.state())
        }
        SessionCommand::Clear => {
            dashboard.state_mut().clear_player();
            Ok(vec!["no player selected".to_string()])
        }
        SessionCommand::Stat(category) => {
            dashboard.state_mut().set_stat_category(category);
            Ok(render::chart_lines(&dashboard.state().chart()))
        }
        SessionCommand::Line(value) => {
            dashboard.state_mut().set_comparison_line(value);
            Ok(render::chart_lines(&dashboard.state().chart()))
        }
        SessionCommand::Games(window) => {
            dashboard.state_mut().set_game_window(window);
            Ok(render::chart_lines(&dashboard.state().chart()))
        }
        SessionCommand::Mode(mode) => {
            dashboard.state_mut().set_display_mode(mode);
            let heatmap = dashboard.state().heatmap().ok_or(TrackerError::NoData)?;
            Ok(render::heatmap_lines(&heatmap))
        }
        SessionCommand::Toggle(team) => {
            dashboard.state_mut().toggle_team_expanded(team.clone());
            Ok(render::roster_lines(dashboard.state(), Some(&team)))
        }
        SessionCommand::Teams => Ok(render::roster_lines(dashboard.state(), None)),
        SessionCommand::Show => render::dashboard_lines(dashboard.state()),
        SessionCommand::Help => Ok(HELP.lines().map(str::to_string).collect()),
        SessionCommand::Quit => Ok(Vec::new()),
    }
}

/// Handle the session command
pub async fn handle_session(options: &SourceOptions) -> Result<()> {
    let mut dashboard = Dashboard::new(build_source(options, false)?);

    // a missing default player is not fatal; the user can select another
    match dashboard.start().await {
        Ok(()) => {
            for line in render::dashboard_lines(dashboard.state())? {
                println!("{}", line);
            }
        }
        Err(e) => eprintln!("{}", e),
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(input) = lines.next_line().await? {
        if input.trim().is_empty() {
            continue;
        }
        let command = match input.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{} (type `help`)", e);
                continue;
            }
        };
        if command == SessionCommand::Quit {
            debug!(cached = dashboard.source().len(), "session ended");
            break;
        }
        match execute(&mut dashboard, command).await {
            Ok(output) => {
                for line in output {
                    println!("{}", line);
                }
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(())
}
