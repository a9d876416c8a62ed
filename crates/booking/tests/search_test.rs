use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use slotbook_booking::handlers::catalog::{ProviderFilter, filter_providers};
use slotbook_booking::search::{DEFAULT_DEBOUNCE, DebouncedSearch};
use slotbook_core::catalog::providers;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_result_matches_the_undebounced_filter() {
    let search = DebouncedSearch::new(DEFAULT_DEBOUNCE);
    let filter = ProviderFilter {
        query: "cairo".to_string(),
        ..ProviderFilter::default()
    };

    let result = search.filter(providers(), filter.clone()).await;

    assert_eq!(result, Some(filter_providers(&providers(), &filter)));
}

#[tokio::test(start_paused = true)]
async fn test_nothing_resolves_before_the_delay() {
    let search = DebouncedSearch::new(Duration::from_millis(500));
    let start = Instant::now();

    let result = search.filter(providers(), ProviderFilter::default()).await;

    assert!(result.is_some());
    assert!(start.elapsed() >= Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn test_superseded_call_produces_no_result() {
    let search = Arc::new(DebouncedSearch::new(Duration::from_millis(500)));

    let first = tokio::spawn({
        let search = Arc::clone(&search);
        async move {
            search
                .filter(providers(), ProviderFilter::default())
                .await
        }
    });
    // Let the first call claim its generation and park in the delay before
    // the second call starts.
    tokio::task::yield_now().await;

    let second = search.filter(
        providers(),
        ProviderFilter {
            query: "cairo".to_string(),
            ..ProviderFilter::default()
        },
    );

    let (first, second) = tokio::join!(first, second);

    assert_eq!(first.unwrap(), None);
    assert!(second.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_sequential_calls_each_publish_a_result() {
    let search = DebouncedSearch::new(Duration::from_millis(500));

    let first = search.filter(providers(), ProviderFilter::default()).await;
    let second = search.filter(providers(), ProviderFilter::default()).await;

    assert!(first.is_some());
    assert!(second.is_some());
}
