use serde::{Deserialize, Serialize};
use time::Date;

use crate::domain::range::calendar_date;
use crate::{Symbol, ValidationError};

/// Daily closing price for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(with = "calendar_date")]
    pub date: Date,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: Date, close: f64) -> Result<Self, ValidationError> {
        validate_non_negative("close", close)?;
        Ok(Self { date, close })
    }
}

/// Ascending-by-date closing prices for a single symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: Symbol,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Builds a series, sorting points by date. Duplicate dates are kept as the
    /// provider delivered them.
    pub fn new(symbol: Symbol, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|point| point.date);
        Self { symbol, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_close(&self) -> Option<f64> {
        self.points.first().map(|point| point.close)
    }

    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|point| point.close)
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn rejects_negative_close() {
        let err = PricePoint::new(date!(2024 - 01 - 02), -1.0).expect_err("must fail");
        assert_eq!(err, ValidationError::NegativeValue { field: "close" });
    }

    #[test]
    fn rejects_nan_close() {
        let err = PricePoint::new(date!(2024 - 01 - 02), f64::NAN).expect_err("must fail");
        assert_eq!(err, ValidationError::NonFiniteValue { field: "close" });
    }

    #[test]
    fn series_orders_points_ascending() {
        let symbol = Symbol::parse("AAPL").expect("valid symbol");
        let series = PriceSeries::new(
            symbol,
            vec![
                PricePoint::new(date!(2024 - 01 - 03), 12.0).expect("valid"),
                PricePoint::new(date!(2024 - 01 - 02), 10.0).expect("valid"),
            ],
        );

        assert_eq!(series.first_close(), Some(10.0));
        assert_eq!(series.last_close(), Some(12.0));
    }

    #[test]
    fn price_point_serializes_date_and_close_only() {
        let point = PricePoint::new(date!(2024 - 02 - 29), 181.5).expect("valid");
        let json = serde_json::to_value(point).expect("serializable");
        assert_eq!(json, serde_json::json!({"date": "2024-02-29", "close": 181.5}));
    }
}
