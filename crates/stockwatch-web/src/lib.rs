//! # Stockwatch Web
//!
//! HTTP front end over [`stockwatch_core`]: current prices, historical closes,
//! an in-memory favorites list and a fixed watchlist summary, all as JSON.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::{AppConfig, ConfigError};
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
