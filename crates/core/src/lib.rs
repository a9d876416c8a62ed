//! # Slotbook Core
//!
//! Domain types for the slotbook provider directory: the provider catalog,
//! time slots, appointments, and the shared error taxonomy. Everything here
//! is plain data — slot generation, classification, and persistence live in
//! the `slotbook-booking` and `slotbook-store` crates.

/// Static provider catalog and specialty list
pub mod catalog;
/// Shared error types
pub mod errors;
/// Domain models
pub mod models;
