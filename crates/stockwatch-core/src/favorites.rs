//! In-process favorites store.
//!
//! The store is owned by the application state and injected into handlers.
//! Entries live for the lifetime of the process and are never removed.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::Symbol;

/// Ordered, duplicate-free collection of favorite symbols.
pub trait FavoritesStore: Send + Sync {
    /// Appends `symbol` unless it is already present, then returns the full
    /// list in insertion order.
    fn add(&self, symbol: Symbol) -> Vec<Symbol>;

    /// Snapshot of the favorites in insertion order.
    fn list(&self) -> Vec<Symbol>;
}

/// Mutex-guarded in-memory favorites.
///
/// Each call holds the lock for the whole check-then-append, so concurrent
/// adds of the same symbol still store it once.
#[derive(Debug, Default)]
pub struct InMemoryFavorites {
    symbols: Mutex<Vec<Symbol>>,
}

impl InMemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Symbol>> {
        // A panic while holding the lock cannot leave the Vec half-written.
        self.symbols.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FavoritesStore for InMemoryFavorites {
    fn add(&self, symbol: Symbol) -> Vec<Symbol> {
        let mut symbols = self.lock();
        if !symbols.contains(&symbol) {
            symbols.push(symbol);
        }
        symbols.clone()
    }

    fn list(&self) -> Vec<Symbol> {
        self.lock().clone()
    }
}
