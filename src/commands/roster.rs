//! Roster command implementation

use crate::{cli::SourceOptions, state::Dashboard, Result, TeamCode};

use super::{build_source, render};

/// Handle the roster command
pub async fn handle_roster(
    options: &SourceOptions,
    team: Option<TeamCode>,
    toggle: Vec<TeamCode>,
) -> Result<()> {
    let mut dashboard = Dashboard::new(build_source(options, false)?);
    dashboard.bootstrap().await;

    let state = dashboard.state_mut();
    for code in toggle {
        state.toggle_team_expanded(code);
    }
    if let Some(code) = &team {
        if !state.is_expanded(code) {
            state.toggle_team_expanded(code.clone());
        }
    }

    let lines = render::roster_lines(dashboard.state(), team.as_ref());
    if lines.is_empty() {
        println!("No players found.");
    }
    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
