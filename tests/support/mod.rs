//! Scripted quote provider shared by the integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use stockwatch_core::{
    DateRange, PricePoint, PriceSeries, QuoteProvider, SourceError, SourceFuture, Symbol,
};
use time::macros::date;
use time::Duration;

/// Provider answering from fixed tables and recording every history range.
#[derive(Debug, Default)]
pub struct FakeProvider {
    prices: HashMap<String, f64>,
    closes: HashMap<String, Vec<f64>>,
    failures: HashMap<String, String>,
    history_requests: Mutex<Vec<(Symbol, DateRange)>>,
    price_requests: Mutex<Vec<Symbol>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(mut self, symbol: &str, price: f64) -> Self {
        self.prices.insert(symbol.to_owned(), price);
        self
    }

    pub fn with_closes(mut self, symbol: &str, closes: Vec<f64>) -> Self {
        self.closes.insert(symbol.to_owned(), closes);
        self
    }

    pub fn failing(mut self, symbol: &str, message: &str) -> Self {
        self.failures.insert(symbol.to_owned(), message.to_owned());
        self
    }

    pub fn history_requests(&self) -> Vec<(Symbol, DateRange)> {
        self.history_requests
            .lock()
            .expect("request log should not be poisoned")
            .clone()
    }

    pub fn price_requests(&self) -> Vec<Symbol> {
        self.price_requests
            .lock()
            .expect("request log should not be poisoned")
            .clone()
    }

    fn failure(&self, symbol: &Symbol) -> Option<SourceError> {
        self.failures
            .get(symbol.as_str())
            .map(|message| SourceError::not_found(message.clone()))
    }
}

impl QuoteProvider for FakeProvider {
    fn id(&self) -> &'static str {
        "fake"
    }

    fn live_price<'a>(&'a self, symbol: &'a Symbol) -> SourceFuture<'a, f64> {
        Box::pin(async move {
            self.price_requests
                .lock()
                .expect("request log should not be poisoned")
                .push(symbol.clone());

            if let Some(error) = self.failure(symbol) {
                return Err(error);
            }
            self.prices.get(symbol.as_str()).copied().ok_or_else(|| {
                SourceError::not_found(format!("{symbol}: No data found, symbol may be delisted"))
            })
        })
    }

    fn history<'a>(&'a self, symbol: &'a Symbol, range: DateRange) -> SourceFuture<'a, PriceSeries> {
        Box::pin(async move {
            self.history_requests
                .lock()
                .expect("request log should not be poisoned")
                .push((symbol.clone(), range));

            if let Some(error) = self.failure(symbol) {
                return Err(error);
            }
            let closes = self.closes.get(symbol.as_str()).cloned().unwrap_or_default();
            Ok(daily_series(symbol.clone(), &closes))
        })
    }
}

/// Consecutive daily points starting 2024-01-02.
pub fn daily_series(symbol: Symbol, closes: &[f64]) -> PriceSeries {
    let start = date!(2024 - 01 - 02);
    let points = closes
        .iter()
        .enumerate()
        .map(|(index, &close)| {
            PricePoint::new(start + Duration::days(index as i64), close).expect("valid point")
        })
        .collect();
    PriceSeries::new(symbol, points)
}

/// `len` closes starting at `first` and ending at `last`, flat in between.
pub fn closes_between(len: usize, first: f64, last: f64) -> Vec<f64> {
    let mut closes = vec![first; len];
    if let Some(end) = closes.last_mut() {
        *end = last;
    }
    closes
}

pub fn symbol(value: &str) -> Symbol {
    Symbol::parse(value).expect("valid symbol")
}
