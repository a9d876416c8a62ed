use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// A bookable service provider in the catalog.
///
/// Providers are immutable once loaded; the catalog is the single source of
/// truth and appointments reference providers by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub location: String,
    pub rating: f64,
    pub availability_text: String,
    pub available_days: Vec<Weekday>,
}

impl Provider {
    /// Whether this provider takes bookings on the given weekday.
    pub fn is_available_on(&self, day: Weekday) -> bool {
        self.available_days.contains(&day)
    }
}

/// Full English name for a weekday, as used in slot ids and date pickers.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
