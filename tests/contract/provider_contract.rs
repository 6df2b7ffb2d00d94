//! Contract tests for quote provider adapters.
//!
//! Every adapter must satisfy the same observable behavior regardless of the
//! upstream it talks to. The Yahoo adapter is driven through a scripted HTTP
//! transport so no network access is needed.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use stockwatch_core::{
    DateRange, HttpClient, HttpError, HttpRequest, HttpResponse, QuoteProvider, SourceErrorKind,
    Symbol, YahooAdapter,
};
use time::macros::date;

/// Transport returning queued responses in order.
#[derive(Debug, Default)]
struct ScriptedHttpClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    urls: Mutex<Vec<String>>,
}

impl ScriptedHttpClient {
    fn new(mut responses: Vec<Result<HttpResponse, HttpError>>) -> Arc<Self> {
        responses.reverse();
        Arc::new(Self {
            responses: Mutex::new(responses),
            urls: Mutex::new(Vec::new()),
        })
    }

    fn urls(&self) -> Vec<String> {
        self.urls.lock().expect("url log").clone()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.urls.lock().expect("url log").push(request.url);
        let response = self
            .responses
            .lock()
            .expect("response queue")
            .pop()
            .unwrap_or_else(|| Err(HttpError::new("no scripted response left")));
        Box::pin(async move { response })
    }
}

fn chart(timestamps: &[i64], closes: &[Option<f64>], price: Option<f64>) -> HttpResponse {
    let body = serde_json::json!({
        "chart": {
            "result": [{
                "meta": {"regularMarketPrice": price},
                "timestamp": timestamps,
                "indicators": {"quote": [{"close": closes}]}
            }],
            "error": null
        }
    });
    HttpResponse::ok_json(body.to_string())
}

fn symbol(value: &str) -> Symbol {
    Symbol::parse(value).expect("valid symbol")
}

#[tokio::test]
async fn history_is_ascending_even_when_upstream_is_not() {
    // 2024-01-04, 2024-01-02, 2024-01-03 at 14:30 UTC
    let client = ScriptedHttpClient::new(vec![Ok(chart(
        &[1704378600, 1704205800, 1704292200],
        &[Some(3.0), Some(1.0), Some(2.0)],
        Some(3.0),
    ))]);
    let provider: Arc<dyn QuoteProvider> = Arc::new(YahooAdapter::with_http_client(client));

    let range = DateRange::from_dates(date!(2024 - 01 - 01), date!(2024 - 01 - 05));
    let series = provider
        .history(&symbol("AAPL"), range)
        .await
        .expect("series");

    let closes = series.points.iter().map(|p| p.close).collect::<Vec<_>>();
    assert_eq!(closes, vec![1.0, 2.0, 3.0]);
    assert_eq!(series.symbol, symbol("AAPL"));
}

#[tokio::test]
async fn each_call_is_a_fresh_upstream_request() {
    let client = ScriptedHttpClient::new(vec![
        Ok(chart(&[1704205800], &[Some(10.0)], Some(10.0))),
        Ok(chart(&[1704205800], &[Some(11.0)], Some(11.0))),
    ]);
    let provider = YahooAdapter::with_http_client(client.clone());

    let first = provider.live_price(&symbol("AAPL")).await.expect("price");
    let second = provider.live_price(&symbol("AAPL")).await.expect("price");

    assert_eq!((first, second), (10.0, 11.0));
    assert_eq!(client.urls().len(), 2);
}

#[tokio::test]
async fn failures_are_not_retried() {
    let client = ScriptedHttpClient::new(vec![
        Err(HttpError::new("connection failed: refused")),
        Ok(chart(&[1704205800], &[Some(10.0)], Some(10.0))),
    ]);
    let provider = YahooAdapter::with_http_client(client.clone());

    let error = provider
        .live_price(&symbol("AAPL"))
        .await
        .expect_err("first call fails");

    assert_eq!(error.kind(), SourceErrorKind::Unavailable);
    assert!(error.message().contains("connection failed: refused"));
    assert_eq!(client.urls().len(), 1);
}

#[tokio::test]
async fn server_errors_without_a_chart_body_report_the_status() {
    let client = ScriptedHttpClient::new(vec![Ok(HttpResponse::with_status(503, "upstream"))]);
    let provider = YahooAdapter::with_http_client(client);

    let error = provider
        .history(
            &symbol("AAPL"),
            DateRange::from_dates(date!(2024 - 01 - 01), date!(2024 - 02 - 01)),
        )
        .await
        .expect_err("must fail");

    assert_eq!(error.kind(), SourceErrorKind::Unavailable);
    assert_eq!(error.message(), "yahoo returned status 503");
}

#[tokio::test]
async fn provider_identifies_itself() {
    let provider = YahooAdapter::with_http_client(ScriptedHttpClient::new(vec![]));
    assert_eq!(provider.id(), "yahoo");
}
