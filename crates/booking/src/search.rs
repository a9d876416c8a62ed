//! # Debounced Search
//!
//! Rapid filter input would recompute the catalog filter on every
//! keystroke; instead each change schedules a delayed evaluation and a newer
//! change supersedes any pending one. Last writer wins: a superseded call
//! resolves to `None` and produces no observable effect.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use slotbook_core::models::Provider;
use tokio::time::sleep;

use crate::handlers::catalog::{ProviderFilter, filter_providers};

/// Delay before a filter result becomes visible.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Last-writer-wins debounce around the catalog filter.
///
/// Each [`filter`](Self::filter) call takes a fresh generation number; after
/// the delay the call only publishes its result if no newer call has started
/// in the meantime.
pub struct DebouncedSearch {
    delay: Duration,
    generation: AtomicU64,
}

impl DebouncedSearch {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: AtomicU64::new(0),
        }
    }

    /// Evaluates the catalog filter after the configured delay.
    ///
    /// Returns `None` when this call was superseded during the delay.
    pub async fn filter(
        &self,
        providers: Vec<Provider>,
        filter: ProviderFilter,
    ) -> Option<Vec<Provider>> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        sleep(self.delay).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!("Filter run {} superseded, dropping result", generation);
            return None;
        }

        Some(filter_providers(&providers, &filter))
    }
}

impl Default for DebouncedSearch {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
