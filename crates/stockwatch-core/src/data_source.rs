//! Quote provider trait and its error type.
//!
//! This module defines the adapter contract (`QuoteProvider`) that every
//! upstream market data source implements.
//!
//! | Operation | Input | Output |
//! |-----------|-------|--------|
//! | [`live_price`](QuoteProvider::live_price) | [`Symbol`] | latest traded price |
//! | [`history`](QuoteProvider::history) | [`Symbol`], [`DateRange`] | [`PriceSeries`] |
//!
//! # Example
//!
//! ```rust,ignore
//! use stockwatch_core::{QuoteProvider, SourceError, Symbol, YahooAdapter};
//!
//! async fn print_price(adapter: &YahooAdapter) -> Result<(), SourceError> {
//!     let symbol = Symbol::parse("AAPL")?;
//!     let price = adapter.live_price(&symbol).await?;
//!     println!("{symbol}: ${price:.2}");
//!     Ok(())
//! }
//! ```

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{DateRange, PriceSeries, Symbol, ValidationError};

/// Boxed future returned by provider calls.
pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SourceError>> + Send + 'a>>;

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    NotFound,
    Unavailable,
    RateLimited,
    InvalidRequest,
    Internal,
}

/// Structured provider error.
///
/// The message is what the upstream (or the transport) reported, and is
/// passed to API callers unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::RateLimited,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::NotFound => "source.not_found",
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::RateLimited => "source.rate_limited",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

impl From<ValidationError> for SourceError {
    fn from(error: ValidationError) -> Self {
        Self::invalid_request(error.to_string())
    }
}

/// Quote provider contract.
///
/// Implementations must be `Send + Sync`; one instance is shared by every
/// request handler.
pub trait QuoteProvider: Send + Sync {
    /// Short provider identifier used in logs and the health endpoint.
    fn id(&self) -> &'static str;

    /// Latest known traded price for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the symbol is unknown, the upstream is
    /// unreachable or throttling, or the payload cannot be understood.
    fn live_price<'a>(&'a self, symbol: &'a Symbol) -> SourceFuture<'a, f64>;

    /// Daily closing prices for `symbol` within `range`, ascending by date.
    ///
    /// A range too narrow to contain a trading day yields an empty series,
    /// not an error.
    fn history<'a>(&'a self, symbol: &'a Symbol, range: DateRange) -> SourceFuture<'a, PriceSeries>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_stable_code() {
        let error = SourceError::not_found("No data found, symbol may be delisted");
        assert_eq!(
            error.to_string(),
            "No data found, symbol may be delisted (source.not_found)"
        );
        assert_eq!(error.message(), "No data found, symbol may be delisted");
    }

    #[test]
    fn validation_errors_become_invalid_requests() {
        let error = SourceError::from(ValidationError::EmptySymbol);
        assert_eq!(error.kind(), SourceErrorKind::InvalidRequest);
        assert_eq!(error.message(), "symbol cannot be empty");
    }
}
