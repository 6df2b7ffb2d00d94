use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use stockwatch_core::{DateRange, PricePoint, Symbol};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PriceQuery {
    pub symbol: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub price: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub symbol: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub data: Vec<PricePoint>,
}

fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

pub(crate) fn required_symbol(symbol: Option<&str>) -> Result<Symbol, ApiError> {
    let symbol = symbol.ok_or_else(ApiError::missing_symbol)?;
    Ok(Symbol::parse(symbol)?)
}

/// `GET /current_price?symbol=...`
pub async fn current_price(
    State(state): State<AppState>,
    query: Result<Query<PriceQuery>, QueryRejection>,
) -> Result<Json<PriceResponse>, ApiError> {
    let query = query_params(query)?;
    let symbol = required_symbol(query.symbol.as_deref())?;
    let price = state.provider.live_price(&symbol).await?;
    Ok(Json(PriceResponse { price }))
}

/// `GET /historical_data?symbol=...&start_date=YYYY-MM-DD&end_date=YYYY-MM-DD`
///
/// Without either date the trailing 180 days are returned; supplying one
/// date makes both required.
pub async fn historical_data(
    State(state): State<AppState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let query = query_params(query)?;
    let symbol = required_symbol(query.symbol.as_deref())?;
    let range = DateRange::resolve(
        query.start_date.as_deref(),
        query.end_date.as_deref(),
        state.clock.now(),
    )?;

    let series = state.provider.history(&symbol, range).await?;
    Ok(Json(HistoryResponse {
        data: series.points,
    }))
}
