use axum::extract::State;
use axum::Json;
use serde::Serialize;
use stockwatch_core::{summarize, WatchlistEntry};
use tracing::info;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct WatchlistResponse {
    pub watchlist: Vec<WatchlistEntry>,
}

/// `GET /watchlist`
///
/// Symbols whose lookups fail are logged and left out of the response.
pub async fn watchlist(State(state): State<AppState>) -> Json<WatchlistResponse> {
    let report = summarize(state.provider.as_ref(), &state.watchlist, state.clock.now()).await;

    let omitted = report.omitted().count();
    if omitted > 0 {
        info!(omitted, total = report.outcomes.len(), "watchlist served with omissions");
    }

    Json(WatchlistResponse {
        watchlist: report.entries(),
    })
}
