//! UI Components
//!
//! Reusable Leptos components for the chart views.

pub mod nav;
pub mod chart;
pub mod loading;
pub mod toast;

pub use nav::Nav;
pub use chart::Chart;
pub use loading::Loading;
pub use toast::Toast;
