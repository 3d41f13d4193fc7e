//! LinkHub - Personal Link Bookmarking Manager
//!
//! A REST service persisting link records in SQLite, plus the link
//! manager client core (state container and HTTP client).

pub mod api;
pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod state;

pub use config::config;
pub use error::{Error, Result};
pub use state::AppState;
