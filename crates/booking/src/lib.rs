//! # Slotbook Booking
//!
//! The service layer of the slotbook provider directory. It implements the
//! operations a rendering layer drives: filtering the provider catalog,
//! enumerating bookable time slots for a (provider, date) selection,
//! confirming and cancelling appointments, and partitioning stored
//! appointments into upcoming and past.
//!
//! ## Architecture
//!
//! This crate follows a layered structure:
//!
//! - **Handlers**: implement the user-intent processing logic
//! - **Search**: the debounced wrapper around the catalog filter
//! - **Config**: environment configuration
//!
//! There is no network surface; callers hold a [`BookingState`] and invoke
//! handlers directly. All operations run to completion on the caller's task,
//! so the state has exactly one logical owner and needs no locking.

/// Environment configuration
pub mod config;
/// User-intent handlers
pub mod handlers;
/// Debounced catalog search
pub mod search;

use eyre::Result;
use slotbook_core::catalog;
use slotbook_core::models::Provider;
use slotbook_store::open_store;
use slotbook_store::store::AppointmentStore;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crate::config::BookingConfig;
use crate::search::DebouncedSearch;

/// Process-wide owner of all mutable state.
///
/// The catalog is loaded once and never changes; the store is the only
/// mutable member and every mutation persists through its repository.
pub struct BookingState {
    pub catalog: Vec<Provider>,
    pub store: AppointmentStore,
    pub search: DebouncedSearch,
}

/// Initializes logging, loads the catalog, and rehydrates the appointment
/// store from the configured storage path.
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use slotbook_booking::{config::BookingConfig, init};
///
/// # async fn example() -> Result<()> {
/// let config = BookingConfig::from_env()?;
/// let state = init(config).await?;
/// println!("{} providers loaded", state.catalog.len());
/// # Ok(())
/// # }
/// ```
pub async fn init(config: BookingConfig) -> Result<BookingState> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let catalog = catalog::providers();
    let store = open_store(&config.storage_path).await;

    info!(
        "Loaded {} providers and {} stored appointments",
        catalog.len(),
        store.appointments().len()
    );

    Ok(BookingState {
        catalog,
        store,
        search: DebouncedSearch::new(config.debounce()),
    })
}
