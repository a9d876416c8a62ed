pub mod repositories;
pub mod store;

pub mod mock;

use std::path::PathBuf;

use crate::repositories::file::FileRepository;
use crate::store::AppointmentStore;

/// Opens the appointment store backed by the JSON file at `path`.
///
/// Missing or malformed stored state yields an empty store; it is never an
/// error to open.
pub async fn open_store(path: impl Into<PathBuf>) -> AppointmentStore {
    AppointmentStore::load(Box::new(FileRepository::new(path))).await
}
