//! Watchlist summary: current price plus trailing profit for a fixed list of
//! symbols.
//!
//! Each symbol is priced independently. A failing symbol is reported as
//! [`WatchlistOutcome::Omitted`] and never fails the whole summary, unlike the
//! favorites listing which is all-or-nothing.
//!
//! The trailing window is 365 calendar days and a profit is only computed when
//! it holds at least [`MIN_HISTORY_POINTS`] closes. That threshold is roughly a
//! quarter of trading days, not two years.

use serde::Serialize;
use tracing::{debug, warn};

use crate::data_source::{QuoteProvider, SourceError};
use crate::{DateRange, PriceSeries, Symbol, UtcDateTime, ValidationError};

/// Calendar days of history fetched per watchlist symbol.
pub const HISTORY_WINDOW_DAYS: i64 = 365;

/// Closes required before a trailing profit is reported.
pub const MIN_HISTORY_POINTS: usize = 60;

pub const DEFAULT_SYMBOLS: [&str; 10] = [
    "AAPL", "GOOGL", "MSFT", "AMZN", "META", "TSLA", "GS", "DJIA", "SPX", "COMP",
];

/// Fixed, ordered list of symbols summarized by the watchlist endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Watchlist {
    symbols: Vec<Symbol>,
}

impl Watchlist {
    pub fn new(symbols: Vec<Symbol>) -> Result<Self, ValidationError> {
        if symbols.is_empty() {
            return Err(ValidationError::EmptyWatchlist);
        }
        Ok(Self { symbols })
    }

    pub fn parse<S: AsRef<str>>(symbols: &[S]) -> Result<Self, ValidationError> {
        let symbols = symbols
            .iter()
            .map(|symbol| Symbol::parse(symbol.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(symbols)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl Default for Watchlist {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS
                .iter()
                .filter_map(|symbol| Symbol::parse(symbol).ok())
                .collect(),
        }
    }
}

/// Trailing percentage change over a price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "f64")]
pub enum TrailingProfit {
    /// Percent change between the first and last close, rounded to cents.
    Computed(f64),
    /// Too few closes (or a zero base price) to compute a change.
    InsufficientHistory { points: usize },
}

impl TrailingProfit {
    /// Wire value: insufficient history is reported as zero.
    pub fn percent(self) -> f64 {
        match self {
            Self::Computed(value) => value,
            Self::InsufficientHistory { .. } => 0.0,
        }
    }
}

impl From<TrailingProfit> for f64 {
    fn from(value: TrailingProfit) -> Self {
        value.percent()
    }
}

/// Percent change from the first to the last close of `series`.
pub fn trailing_profit(series: &PriceSeries) -> TrailingProfit {
    let points = series.len();
    if points < MIN_HISTORY_POINTS {
        return TrailingProfit::InsufficientHistory { points };
    }

    match (series.first_close(), series.last_close()) {
        (Some(first), Some(last)) if first > 0.0 => {
            TrailingProfit::Computed(round_to_cents((last - first) / first * 100.0))
        }
        _ => TrailingProfit::InsufficientHistory { points },
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One priced watchlist row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchlistEntry {
    pub symbol: Symbol,
    pub price: f64,
    pub profit: TrailingProfit,
}

/// Per-symbol result of a watchlist summary.
#[derive(Debug, Clone, PartialEq)]
pub enum WatchlistOutcome {
    Priced(WatchlistEntry),
    Omitted { symbol: Symbol, error: SourceError },
}

/// Outcomes for every configured symbol, in watchlist order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WatchlistReport {
    pub outcomes: Vec<WatchlistOutcome>,
}

impl WatchlistReport {
    /// Successfully priced rows; omitted symbols are skipped.
    pub fn entries(&self) -> Vec<WatchlistEntry> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                WatchlistOutcome::Priced(entry) => Some(entry.clone()),
                WatchlistOutcome::Omitted { .. } => None,
            })
            .collect()
    }

    pub fn omitted(&self) -> impl Iterator<Item = &Symbol> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            WatchlistOutcome::Omitted { symbol, .. } => Some(symbol),
            WatchlistOutcome::Priced(_) => None,
        })
    }
}

/// Price one symbol: live price, then the trailing history.
pub async fn summarize_symbol(
    provider: &dyn QuoteProvider,
    symbol: &Symbol,
    now: UtcDateTime,
) -> Result<WatchlistEntry, SourceError> {
    let price = provider.live_price(symbol).await?;
    let range = DateRange::trailing_days(now, HISTORY_WINDOW_DAYS);
    let series = provider.history(symbol, range).await?;
    let profit = trailing_profit(&series);

    debug!(%symbol, price, points = series.len(), ?profit, "watchlist symbol priced");

    Ok(WatchlistEntry {
        symbol: symbol.clone(),
        price,
        profit,
    })
}

/// Summarize every watchlist symbol sequentially.
pub async fn summarize(
    provider: &dyn QuoteProvider,
    watchlist: &Watchlist,
    now: UtcDateTime,
) -> WatchlistReport {
    let mut outcomes = Vec::with_capacity(watchlist.symbols().len());

    for symbol in watchlist.symbols() {
        let outcome = match summarize_symbol(provider, symbol, now).await {
            Ok(entry) => WatchlistOutcome::Priced(entry),
            Err(error) => {
                warn!(%symbol, code = error.code(), "error fetching data for {symbol}: {}", error.message());
                WatchlistOutcome::Omitted {
                    symbol: symbol.clone(),
                    error,
                }
            }
        };
        outcomes.push(outcome);
    }

    WatchlistReport { outcomes }
}
