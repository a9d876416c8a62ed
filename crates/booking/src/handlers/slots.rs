//! # Slot Generation
//!
//! Enumerates the bookable time slots a provider offers on a given weekday.
//!
//! ## Algorithm
//!
//! The schedule is synthetic but deterministic: the same (provider, weekday)
//! pair always yields the same slots, so a reloaded page shows the same
//! availability.
//!
//! 1. Enumerate every 30-minute boundary from 09:00 inclusive to 17:00
//!    exclusive, in ascending order — 16 slots per day.
//! 2. Select one of four fixed 8-element availability patterns by the
//!    numeric provider id modulo 4 (non-numeric ids fall back to pattern 0).
//! 3. Mark slot `i` available iff `pattern[i mod 8]` — the pattern repeats
//!    across the morning and the afternoon halves of the day.
//!
//! There is no clock dependency and no randomness anywhere in this module.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use slotbook_core::models::provider::weekday_name;
use slotbook_core::models::{Provider, TimeSlot};

/// First bookable hour of the day, 09:00.
const FIRST_HOUR: u32 = 9;

/// End of the bookable day, exclusive, 17:00.
const END_HOUR: u32 = 17;

/// How many consecutive dates the booking window offers.
const BOOKING_WINDOW_DAYS: u64 = 7;

/// Fixed availability patterns, selected by numeric provider id modulo 4.
const AVAILABILITY_PATTERNS: [[bool; 8]; 4] = [
    [true, true, false, true, false, true, true, false],
    [true, false, true, true, false, false, true, true],
    [false, true, true, false, true, false, true, false],
    [true, false, false, true, true, false, true, true],
];

/// Generates the ordered slot list for a provider on a weekday.
///
/// Slot ids are synthesized as `{provider_id}-{WeekdayName}-{H:MM}` with a
/// 24-hour time; display labels are 12-hour with AM/PM. The result is always
/// exactly 16 slots, ascending.
pub fn generate_time_slots(provider_id: &str, weekday: Weekday) -> Vec<TimeSlot> {
    let pattern_index =
        provider_id.parse::<usize>().unwrap_or(0) % AVAILABILITY_PATTERNS.len();
    let pattern = &AVAILABILITY_PATTERNS[pattern_index];
    let day = weekday_name(weekday);

    let mut slots = Vec::with_capacity(((END_HOUR - FIRST_HOUR) * 2) as usize);
    for hour in FIRST_HOUR..END_HOUR {
        for minute in [0, 30] {
            let slot_index = ((hour - FIRST_HOUR) * 2 + u32::from(minute == 30)) as usize;
            slots.push(TimeSlot {
                id: format!("{provider_id}-{day}-{hour}:{minute:02}"),
                time: display_time(hour, minute),
                is_available: pattern[slot_index % pattern.len()],
            });
        }
    }

    slots
}

/// The consecutive calendar dates offered for booking, starting at `today`.
pub fn booking_dates(today: NaiveDate) -> Vec<NaiveDate> {
    (0..BOOKING_WINDOW_DAYS)
        .map(|offset| today + Days::new(offset))
        .collect()
}

/// Slots for a provider on a concrete date.
///
/// Empty when the provider does not work on that date's weekday; the date
/// itself carries no other information, availability is keyed by weekday.
pub fn slots_for_date(provider: &Provider, date: NaiveDate) -> Vec<TimeSlot> {
    let weekday = date.weekday();
    if !provider.is_available_on(weekday) {
        return Vec::new();
    }

    generate_time_slots(&provider.id, weekday)
}

/// 12-hour display label; noon and later render as PM, hour unpadded.
fn display_time(hour: u32, minute: u32) -> String {
    let display_hour = if hour > 12 { hour - 12 } else { hour };
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    format!("{display_hour}:{minute:02} {meridiem}")
}
