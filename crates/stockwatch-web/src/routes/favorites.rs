use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use stockwatch_core::Symbol;

use crate::error::ApiError;
use crate::routes::quotes::required_symbol;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AddFavoriteRequest {
    pub symbol: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FavoritesResponse<T> {
    pub favorites: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct FavoriteQuote {
    pub symbol: Symbol,
    pub price: f64,
}

/// `POST /favorites` with `{"symbol": "..."}`.
///
/// Responds 201 with the full list whether or not the symbol was new.
pub async fn add_favorite(
    State(state): State<AppState>,
    body: Result<Json<AddFavoriteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FavoritesResponse<Symbol>>), ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let symbol = required_symbol(body.symbol.as_deref())?;

    let favorites = state.favorites.add(symbol);
    Ok((StatusCode::CREATED, Json(FavoritesResponse { favorites })))
}

/// `GET /favorites`
///
/// Prices every favorite. The first provider failure fails the whole request.
pub async fn list_favorites(
    State(state): State<AppState>,
) -> Result<Json<FavoritesResponse<FavoriteQuote>>, ApiError> {
    let symbols = state.favorites.list();
    let mut favorites = Vec::with_capacity(symbols.len());

    for symbol in symbols {
        let price = state.provider.live_price(&symbol).await?;
        favorites.push(FavoriteQuote { symbol, price });
    }

    Ok(Json(FavoritesResponse { favorites }))
}
