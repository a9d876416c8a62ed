pub mod file;

use async_trait::async_trait;
use eyre::Result;

/// A durable key-value slot holding the JSON-encoded appointment list.
///
/// The store serializes the whole list on every mutation and hands the
/// payload here; backends only move bytes. There is no schema version and
/// no migration path.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Returns the stored payload, or `None` when nothing has been written yet.
    async fn read(&self) -> Result<Option<String>>;

    /// Replaces the stored payload.
    async fn write(&self, payload: &str) -> Result<()>;
}
