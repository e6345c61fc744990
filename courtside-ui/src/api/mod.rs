//! API access

pub mod client;

pub use client::{fetch_series, get_api_base, set_api_base};
