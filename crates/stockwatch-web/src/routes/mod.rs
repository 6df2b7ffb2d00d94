//! HTTP routes.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/current_price` | [`quotes::current_price`] |
//! | GET | `/historical_data` | [`quotes::historical_data`] |
//! | GET | `/favorites` | [`favorites::list_favorites`] |
//! | POST | `/favorites` | [`favorites::add_favorite`] |
//! | GET | `/watchlist` | [`watchlist::watchlist`] |
//! | GET | `/health` | [`health`] |

pub mod favorites;
pub mod quotes;
pub mod watchlist;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router. Cross-origin requests are allowed from any
/// origin.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/current_price", get(quotes::current_price))
        .route("/historical_data", get(quotes::historical_data))
        .route(
            "/favorites",
            get(favorites::list_favorites).post(favorites::add_favorite),
        )
        .route("/watchlist", get(watchlist::watchlist))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub provider: &'static str,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        provider: state.provider.id(),
    })
}
