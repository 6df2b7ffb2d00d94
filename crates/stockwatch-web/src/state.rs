use std::sync::Arc;

use stockwatch_core::{
    Clock, FavoritesStore, InMemoryFavorites, QuoteProvider, SystemClock, Watchlist,
};

/// Shared handler state. Cloned per request; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn QuoteProvider>,
    pub favorites: Arc<dyn FavoritesStore>,
    pub watchlist: Arc<Watchlist>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// State with an empty in-memory favorites store and the wall clock.
    pub fn new(provider: Arc<dyn QuoteProvider>, watchlist: Watchlist) -> Self {
        Self {
            provider,
            favorites: Arc::new(InMemoryFavorites::new()),
            watchlist: Arc::new(watchlist),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_favorites(mut self, favorites: Arc<dyn FavoritesStore>) -> Self {
        self.favorites = favorites;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}
