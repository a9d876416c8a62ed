use std::collections::HashSet;

use pretty_assertions::assert_eq;
use slotbook_core::catalog::{ALL_SPECIALTIES, SPECIALTIES, providers};

#[test]
fn test_catalog_has_eight_providers_with_unique_ids() {
    let catalog = providers();
    assert_eq!(catalog.len(), 8);

    let ids: HashSet<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn test_catalog_is_stable_across_calls() {
    assert_eq!(providers(), providers());
}

#[test]
fn test_specialty_list_starts_with_sentinel() {
    assert_eq!(SPECIALTIES[0], ALL_SPECIALTIES);

    let unique: HashSet<&str> = SPECIALTIES.iter().copied().collect();
    assert_eq!(unique.len(), SPECIALTIES.len());
}

#[test]
fn test_every_provider_specialty_is_selectable() {
    for provider in providers() {
        assert!(
            SPECIALTIES.contains(&provider.specialty.as_str()),
            "specialty {} of provider {} is not in the specialty list",
            provider.specialty,
            provider.id
        );
    }
}

#[test]
fn test_every_provider_has_working_days() {
    for provider in providers() {
        assert!(!provider.available_days.is_empty());
        assert!(!provider.availability_text.is_empty());
    }
}
