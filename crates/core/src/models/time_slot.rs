use serde::{Deserialize, Serialize};

/// A single bookable 30-minute window on a provider's day.
///
/// Slots are ephemeral: they are recomputed for every (provider, date)
/// selection and never persisted. `time` is the 12-hour display label
/// (e.g. "9:30 AM"); the label, not the slot id, is what ends up on an
/// appointment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    pub time: String,
    pub is_available: bool,
}
