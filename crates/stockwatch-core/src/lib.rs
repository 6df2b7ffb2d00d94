//! # Stockwatch Core
//!
//! Domain types and provider contracts behind the stockwatch HTTP service.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters (Yahoo Finance chart API) |
//! | [`clock`] | Injectable source of the current time |
//! | [`data_source`] | `QuoteProvider` trait and source errors |
//! | [`domain`] | Symbols, price points, price series, date ranges |
//! | [`error`] | Validation errors |
//! | [`favorites`] | In-process favorites store |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`watchlist`] | Watchlist configuration and trailing profit |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │  HTTP handlers  │────▶│ Favorites store  │
//! └────────┬────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Quote provider  │────▶│ HTTP client      │
//! │ (adapter trait) │     │ (reqwest)        │
//! └─────────────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Domain models   │
//! │ (PriceSeries)   │
//! └─────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Provider calls return [`SourceError`], classified by [`SourceErrorKind`]:
//!
//! ```rust
//! use stockwatch_core::{SourceError, SourceErrorKind};
//!
//! fn describe(error: &SourceError) -> &'static str {
//!     match error.kind() {
//!         SourceErrorKind::NotFound => "unknown symbol",
//!         SourceErrorKind::RateLimited => "throttled",
//!         SourceErrorKind::Unavailable => "upstream down",
//!         SourceErrorKind::InvalidRequest | SourceErrorKind::Internal => "other",
//!     }
//! }
//! ```

pub mod adapters;
pub mod clock;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod favorites;
pub mod http_client;
pub mod watchlist;

pub use adapters::{YahooAdapter, YahooConfig};

pub use clock::{Clock, FixedClock, SystemClock};

pub use data_source::{QuoteProvider, SourceError, SourceErrorKind, SourceFuture};

pub use domain::{
    parse_calendar_date, DateRange, PricePoint, PriceSeries, Symbol, UtcDateTime, DATE_FORMAT,
    DEFAULT_HISTORY_DAYS,
};

pub use error::ValidationError;

pub use favorites::{FavoritesStore, InMemoryFavorites};

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use watchlist::{
    summarize, TrailingProfit, Watchlist, WatchlistEntry, WatchlistOutcome, WatchlistReport,
};
