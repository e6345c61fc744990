//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod series;

pub use home::Home;
pub use series::{ActualPage, PredictionsPage, SeriesPage};
