//! Error types for the NBA tracker

use thiserror::Error;


pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse player ID: {0}")]
    InvalidPlayerId(#[from] std::num::ParseIntError),

    /// Non-success response from the stats API. `message` is the `error`
    /// field of the body when the server sent one.
    #[error("Stats API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Unknown court zone: {key}")]
    UnknownZone { key: String },

    #[error("Invalid stat category: {category}")]
    InvalidStatCategory { category: String },

    #[error("Invalid display mode: {mode}")]
    InvalidDisplayMode { mode: String },

    #[error("Invalid game window: {count} (expected 5, 10 or 15)")]
    InvalidGameWindow { count: String },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: String },

    #[error("No player data loaded")]
    NoData,

    #[error("Invalid command: {input}")]
    InvalidCommand { input: String },
}
