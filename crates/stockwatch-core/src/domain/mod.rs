//! # Domain Models
//!
//! Canonical domain types for stockwatch market data.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Normalized ticker symbol |
//! | [`PricePoint`] | Closing price for a calendar date |
//! | [`PriceSeries`] | Ascending closing prices for one symbol |
//! | [`DateRange`] | Time window for historical lookups |
//! | [`UtcDateTime`] | UTC timestamp |

mod models;
mod range;
mod symbol;
mod timestamp;

pub use models::{PricePoint, PriceSeries};
pub use range::{parse_calendar_date, DateRange, DATE_FORMAT, DEFAULT_HISTORY_DAYS};
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
