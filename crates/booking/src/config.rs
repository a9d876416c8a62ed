//! # Configuration Module
//!
//! Loads booking-layer configuration from environment variables, with
//! defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `SLOTBOOK_STORAGE_PATH`: file holding the persisted appointment list
//!   (default: "appointments.json")
//! - `SLOTBOOK_DEBOUNCE_MS`: search debounce delay in milliseconds
//!   (default: 500)
//! - `LOG_LEVEL`: logging level (default: "info")

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use eyre::{Result, WrapErr};
use tracing::Level;

/// Configuration for the booking layer.
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// Path of the durable appointment slot
    pub storage_path: PathBuf,

    /// Search debounce delay in milliseconds
    pub debounce_ms: u64,

    /// Log level for the application
    pub log_level: Level,
}

impl BookingConfig {
    /// Creates a new BookingConfig from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when `SLOTBOOK_DEBOUNCE_MS` is set but cannot be
    /// parsed as a u64.
    pub fn from_env() -> Result<Self> {
        // Storage settings
        let storage_path = env::var("SLOTBOOK_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("appointments.json"));

        // Search settings
        let debounce_ms = env::var("SLOTBOOK_DEBOUNCE_MS")
            .unwrap_or_else(|_| "500".to_string())
            .parse()
            .wrap_err("Invalid SLOTBOOK_DEBOUNCE_MS value")?;

        // Logging settings
        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            storage_path,
            debounce_ms,
            log_level,
        })
    }

    /// The debounce delay as a [`Duration`].
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
