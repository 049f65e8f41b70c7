//! Command implementations for the NBA tracker CLI

pub mod player;
pub mod render;
pub mod roster;
pub mod schedule;
pub mod session;

use tracing::debug;

use crate::{
    cli::SourceOptions,
    nba::{cache::CachedSource, http::{NbaClient, DEFAULT_API_URL}},
    Result, API_URL_ENV_VAR,
};


/// The data source every command reads from.
pub type Source = CachedSource<NbaClient>;

/// Resolve the API base URL: flag, then environment, then the local default.
pub fn resolve_api_url(api_url: Option<String>) -> String {
    api_url
        .or_else(|| std::env::var(API_URL_ENV_VAR).ok().filter(|s| !s.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Build the cached HTTP source from CLI options.
pub fn build_source(options: &SourceOptions, refresh_players: bool) -> Result<Source> {
    let url = resolve_api_url(options.api_url.clone());
    debug!(%url, cache_size = options.cache_size, "using stats API");
    let client = NbaClient::new(url)?;
    Ok(CachedSource::new(client, options.cache_size).with_refresh_players(refresh_players))
}
