use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::data_source::{QuoteProvider, SourceError, SourceFuture};
use crate::http_client::{HttpClient, HttpRequest, HttpResponse, DEFAULT_TIMEOUT_MS};
use crate::{DateRange, PricePoint, PriceSeries, Symbol, UtcDateTime};

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Endpoint settings for [`YahooAdapter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YahooConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Quote provider backed by the Yahoo Finance v8 chart endpoint.
///
/// Both operations hit `/v8/finance/chart/{symbol}`: the live price comes from
/// the chart metadata, history from the daily close indicator.
#[derive(Clone)]
pub struct YahooAdapter {
    http_client: Arc<dyn HttpClient>,
    config: YahooConfig,
}

impl YahooAdapter {
    pub fn new(http_client: Arc<dyn HttpClient>, config: YahooConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        Self::new(http_client, YahooConfig::default())
    }

    fn chart_url(&self, symbol: &Symbol, query: &str) -> String {
        format!(
            "{}/v8/finance/chart/{}?{}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(symbol.as_str()),
            query
        )
    }

    async fn fetch_chart(&self, url: String) -> Result<YahooChartResult, SourceError> {
        debug!(%url, "requesting yahoo chart");
        let request = HttpRequest::get(url)
            .with_header("referer", "https://finance.yahoo.com/")
            .with_timeout_ms(self.config.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|e| {
            if e.timed_out() {
                SourceError::unavailable(format!("yahoo request timed out: {}", e.message()))
            } else {
                SourceError::unavailable(format!("yahoo transport error: {}", e.message()))
            }
        })?;

        parse_chart_response(&response)
    }
}

impl QuoteProvider for YahooAdapter {
    fn id(&self) -> &'static str {
        "yahoo"
    }

    fn live_price<'a>(&'a self, symbol: &'a Symbol) -> SourceFuture<'a, f64> {
        Box::pin(async move {
            let url = self.chart_url(symbol, "range=1d&interval=1d");
            let chart = self.fetch_chart(url).await?;

            chart
                .meta
                .as_ref()
                .and_then(|meta| meta.regular_market_price)
                .or_else(|| chart.closes().into_iter().rev().flatten().next())
                .filter(|price| price.is_finite())
                .ok_or_else(|| {
                    SourceError::not_found(format!("no price data found for symbol {symbol}"))
                })
        })
    }

    fn history<'a>(&'a self, symbol: &'a Symbol, range: DateRange) -> SourceFuture<'a, PriceSeries> {
        Box::pin(async move {
            let query = format!(
                "period1={}&period2={}&interval=1d&events=div%2Csplits",
                range.start.unix_timestamp(),
                range.end.unix_timestamp()
            );
            let chart = self.fetch_chart(self.chart_url(symbol, &query)).await?;

            let closes = chart.closes();
            let timestamps = chart.timestamp.unwrap_or_default();

            // Rows without a close (halts, partial sessions) are skipped.
            let points = timestamps
                .iter()
                .zip(closes)
                .filter_map(|(&ts, close)| {
                    let date = UtcDateTime::from_unix_timestamp(ts).ok()?.date();
                    PricePoint::new(date, close?).ok()
                })
                .collect();

            Ok(PriceSeries::new(symbol.clone(), points))
        })
    }
}

fn parse_chart_response(response: &HttpResponse) -> Result<YahooChartResult, SourceError> {
    let parsed = serde_json::from_str::<YahooChartResponse>(&response.body);

    if !response.is_success() {
        let description = parsed
            .ok()
            .and_then(|body| body.chart.error)
            .map(|error| error.description);

        return Err(match (response.status, description) {
            (429, _) => SourceError::rate_limited("yahoo rate limited the request (status 429)"),
            (404, Some(description)) => SourceError::not_found(description),
            (_, Some(description)) => SourceError::unavailable(description),
            (status, None) => SourceError::unavailable(format!("yahoo returned status {status}")),
        });
    }

    let chart = parsed
        .map_err(|e| SourceError::internal(format!("failed to parse yahoo chart: {e}")))?
        .chart;

    if let Some(error) = chart.error {
        return Err(SourceError::not_found(error.description));
    }

    chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| SourceError::not_found("no chart data in response"))
}

// Yahoo Finance chart response structures
#[derive(Debug, Clone, Deserialize)]
struct YahooChartResponse {
    chart: YahooChartData,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartData {
    #[serde(default)]
    result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    error: Option<YahooChartError>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartError {
    #[serde(default)]
    description: String,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResult {
    #[serde(default)]
    meta: Option<YahooChartMeta>,
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    #[serde(default)]
    indicators: Option<YahooChartIndicators>,
}

impl YahooChartResult {
    fn closes(&self) -> Vec<Option<f64>> {
        self.indicators
            .as_ref()
            .and_then(|indicators| indicators.quote.first())
            .map(|quote| quote.close.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartMeta {
    #[serde(rename = "regularMarketPrice", default)]
    regular_market_price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartIndicators {
    #[serde(default)]
    quote: Vec<YahooChartQuote>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}
