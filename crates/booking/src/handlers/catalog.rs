//! # Catalog Filtering
//!
//! Intersection of the three directory filters: specialty, availability
//! today, and free-text search. The result preserves catalog order — a
//! stable filter, never a re-sort.

use serde::{Deserialize, Serialize};
use slotbook_core::catalog::ALL_SPECIALTIES;
use slotbook_core::models::Provider;

/// Marker substring in a provider's availability text that the `Today`
/// filter matches on.
const TODAY_MARKER: &str = "today";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityFilter {
    All,
    Today,
}

/// The active directory filters.
///
/// `specialty` set to the [`ALL_SPECIALTIES`] sentinel disables the
/// specialty predicate; a blank `query` disables the text predicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderFilter {
    pub specialty: String,
    pub availability: AvailabilityFilter,
    pub query: String,
}

impl Default for ProviderFilter {
    fn default() -> Self {
        Self {
            specialty: ALL_SPECIALTIES.to_string(),
            availability: AvailabilityFilter::All,
            query: String::new(),
        }
    }
}

/// Applies every active predicate, keeping providers that satisfy all of
/// them, in catalog order.
pub fn filter_providers(providers: &[Provider], filter: &ProviderFilter) -> Vec<Provider> {
    let mut filtered: Vec<Provider> = providers.to_vec();

    if filter.specialty != ALL_SPECIALTIES {
        filtered.retain(|provider| provider.specialty == filter.specialty);
    }

    if filter.availability == AvailabilityFilter::Today {
        filtered.retain(|provider| provider.availability_text.contains(TODAY_MARKER));
    }

    let query = filter.query.trim().to_lowercase();
    if !query.is_empty() {
        filtered.retain(|provider| {
            provider.name.to_lowercase().contains(&query)
                || provider.specialty.to_lowercase().contains(&query)
                || provider.location.to_lowercase().contains(&query)
        });
    }

    filtered
}
