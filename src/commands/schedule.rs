//! Schedule command implementation

use crate::{cli::SourceOptions, state::Dashboard, Result};

use super::{build_source, render};

/// Handle the schedule command
pub async fn handle_schedule(options: &SourceOptions, as_json: bool) -> Result<()> {
    let mut dashboard = Dashboard::new(build_source(options, false)?);
    dashboard.bootstrap().await;

    let rows = render::schedule_rows(dashboard.state());
    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if rows.is_empty() {
        println!("No teams found.");
    } else {
        for line in render::schedule_lines(&rows) {
            println!("{}", line);
        }
    }

    Ok(())
}
