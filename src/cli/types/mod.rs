//! Type-safe wrappers and enums for NBA tracker data.

pub mod ids;
pub mod mode;
pub mod stat;
pub mod window;

pub use ids::{PlayerId, TeamCode};
pub use mode::DisplayMode;
pub use stat::StatCategory;
pub use window::GameWindow;
