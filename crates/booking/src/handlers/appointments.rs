//! # Appointment Handlers
//!
//! Booking, cancellation, and the upcoming/past partition of a user's
//! appointments.
//!
//! ## Classification Rule
//!
//! An appointment is **upcoming** iff its composed instant — calendar date
//! plus the parsed 12-hour slot label — lies strictly after the reference
//! instant AND its status is not cancelled. Everything else is **past**:
//! elapsed appointments regardless of status, cancelled appointments
//! regardless of date, and appointments whose slot label does not parse
//! (treated as elapsed). The partition is total; every appointment lands in
//! exactly one bucket.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use slotbook_core::errors::{BookingError, BookingResult};
use slotbook_core::models::{Appointment, AppointmentStatus, Provider};
use slotbook_store::store::AppointmentStore;
use uuid::Uuid;

/// Partition of an appointment list relative to a reference instant.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedAppointments {
    pub upcoming: Vec<Appointment>,
    pub past: Vec<Appointment>,
}

/// An appointment joined with its catalog provider for display.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentView {
    pub appointment: Appointment,
    pub provider: Provider,
}

/// Splits `appointments` into upcoming and past relative to `now`.
///
/// Relative order within each bucket follows the input. The
/// completed/cancelled distinction for past items is whatever status is
/// stored; it is never recomputed here.
pub fn classify(appointments: &[Appointment], now: NaiveDateTime) -> ClassifiedAppointments {
    let mut upcoming = Vec::new();
    let mut past = Vec::new();

    for appointment in appointments {
        let is_upcoming = appointment.status != AppointmentStatus::Cancelled
            && appointment_instant(appointment).is_some_and(|instant| instant > now);

        if is_upcoming {
            upcoming.push(appointment.clone());
        } else {
            past.push(appointment.clone());
        }
    }

    ClassifiedAppointments { upcoming, past }
}

/// Looks up the provider a booking intent refers to.
pub fn provider_by_id<'a>(
    providers: &'a [Provider],
    provider_id: &str,
) -> BookingResult<&'a Provider> {
    providers
        .iter()
        .find(|provider| provider.id == provider_id)
        .ok_or_else(|| BookingError::NotFound(format!("Provider with id {provider_id} not found")))
}

/// Confirms a booking: appends a confirmed appointment with a fresh opaque
/// id and persists it.
///
/// The provider reference is recorded as given — the catalog is not
/// consulted, so a dangling id is representable (and later omitted from
/// display with a diagnostic).
pub async fn confirm_booking(
    store: &mut AppointmentStore,
    provider_id: &str,
    date: NaiveDate,
    time_slot: &str,
) -> BookingResult<Appointment> {
    if time_slot.trim().is_empty() {
        return Err(BookingError::Validation(
            "A time slot must be selected".to_string(),
        ));
    }

    let appointment = Appointment {
        id: format!("appt-{}", Uuid::new_v4()),
        provider_id: provider_id.to_string(),
        date,
        time_slot: time_slot.to_string(),
        status: AppointmentStatus::Confirmed,
    };

    store
        .add(appointment.clone())
        .await
        .map_err(BookingError::Storage)?;

    tracing::info!(
        "Booked appointment {} with provider {} on {}",
        appointment.id,
        provider_id,
        date
    );

    Ok(appointment)
}

/// Cancels an appointment by id. Unknown ids are a silent no-op.
pub async fn cancel_appointment(
    store: &mut AppointmentStore,
    appointment_id: &str,
) -> BookingResult<()> {
    store
        .cancel(appointment_id)
        .await
        .map_err(BookingError::Storage)
}

/// Joins appointments with their catalog providers for display.
///
/// An appointment whose provider id has no catalog entry is omitted from
/// the result; the integrity violation is logged rather than surfaced.
pub fn appointment_views(
    appointments: &[Appointment],
    providers: &[Provider],
) -> Vec<AppointmentView> {
    appointments
        .iter()
        .filter_map(|appointment| {
            match providers
                .iter()
                .find(|provider| provider.id == appointment.provider_id)
            {
                Some(provider) => Some(AppointmentView {
                    appointment: appointment.clone(),
                    provider: provider.clone(),
                }),
                None => {
                    tracing::warn!(
                        "Appointment {} references unknown provider {}, omitting from display",
                        appointment.id,
                        appointment.provider_id
                    );
                    None
                }
            }
        })
        .collect()
}

// Bookings store the display label ("9:00 AM"), not a structured time, so
// composition has to parse it back.
fn appointment_instant(appointment: &Appointment) -> Option<NaiveDateTime> {
    NaiveTime::parse_from_str(&appointment.time_slot, "%I:%M %p")
        .ok()
        .map(|time| appointment.date.and_time(time))
}
