//! Session state: selection machine, derived views and the fetch driver.

pub mod dashboard;
pub mod games;
pub mod selection;

pub use dashboard::Dashboard;
pub use games::{Chart, ChartBar, MatchupRow};
pub use selection::SelectionState;
