//! State Management
//!
//! Global application state and per-view series fetching.

pub mod global;
pub mod series;

pub use global::{provide_global_state, GlobalState};
pub use series::spawn_series_fetch;
