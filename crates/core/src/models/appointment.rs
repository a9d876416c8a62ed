use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
    Cancelled,
    Completed,
}

/// A user's booking record.
///
/// `provider_id` is a foreign reference into the catalog, not ownership —
/// referential integrity is not enforced. `time_slot` stores the display
/// label of the chosen slot ("9:00 AM"), not a slot id. The only status
/// transition ever written is confirmed → cancelled; `Completed` is inferred
/// at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub provider_id: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub status: AppointmentStatus,
}
