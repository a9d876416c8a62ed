use chrono::{NaiveDate, Weekday};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, to_string};
use serde_test::{Token, assert_tokens};
use slotbook_core::models::{
    appointment::{Appointment, AppointmentStatus},
    provider::Provider,
    time_slot::TimeSlot,
};

#[test]
fn test_provider_serialization() {
    let provider = Provider {
        id: "1".to_string(),
        name: "Dr. Sarah Johnson".to_string(),
        specialty: "Cardiology".to_string(),
        location: "Cairo Medical Center".to_string(),
        rating: 4.8,
        availability_text: "Available today".to_string(),
        available_days: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
    };

    let json = to_string(&provider).expect("Failed to serialize provider");
    let deserialized: Provider = from_str(&json).expect("Failed to deserialize provider");

    assert_eq!(deserialized.id, provider.id);
    assert_eq!(deserialized.name, provider.name);
    assert_eq!(deserialized.specialty, provider.specialty);
    assert_eq!(deserialized.location, provider.location);
    assert_eq!(deserialized.rating, provider.rating);
    assert_eq!(deserialized.availability_text, provider.availability_text);
    assert_eq!(deserialized.available_days, provider.available_days);
}

#[test]
fn test_time_slot_serialization() {
    let slot = TimeSlot {
        id: "2-Tuesday-9:30".to_string(),
        time: "9:30 AM".to_string(),
        is_available: true,
    };

    let json = to_string(&slot).expect("Failed to serialize time slot");
    let deserialized: TimeSlot = from_str(&json).expect("Failed to deserialize time slot");

    assert_eq!(deserialized, slot);
}

#[test]
fn test_appointment_serialization() {
    let appointment = Appointment {
        id: "appt-1234".to_string(),
        provider_id: "3".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
        time_slot: "10:00 AM".to_string(),
        status: AppointmentStatus::Confirmed,
    };

    let json = to_string(&appointment).expect("Failed to serialize appointment");
    let deserialized: Appointment = from_str(&json).expect("Failed to deserialize appointment");

    assert_eq!(deserialized.id, appointment.id);
    assert_eq!(deserialized.provider_id, appointment.provider_id);
    assert_eq!(deserialized.date, appointment.date);
    assert_eq!(deserialized.time_slot, appointment.time_slot);
    assert_eq!(deserialized.status, appointment.status);
}

#[test]
fn test_appointment_date_uses_iso_format() {
    let appointment = Appointment {
        id: "appt-1".to_string(),
        provider_id: "1".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
        time_slot: "9:00 AM".to_string(),
        status: AppointmentStatus::Confirmed,
    };

    let json = to_string(&appointment).expect("Failed to serialize appointment");
    assert!(json.contains("\"2026-01-05\""));
}

#[rstest]
#[case(AppointmentStatus::Confirmed, "confirmed")]
#[case(AppointmentStatus::Cancelled, "cancelled")]
#[case(AppointmentStatus::Completed, "completed")]
fn test_appointment_status_tokens(#[case] status: AppointmentStatus, #[case] name: &'static str) {
    assert_tokens(&status, &[Token::UnitVariant { name: "AppointmentStatus", variant: name }]);
    assert_eq!(to_string(&status).unwrap(), format!("\"{name}\""));
}

#[rstest]
#[case(Weekday::Mon, true)]
#[case(Weekday::Wed, true)]
#[case(Weekday::Tue, false)]
#[case(Weekday::Sun, false)]
fn test_provider_is_available_on(#[case] day: Weekday, #[case] expected: bool) {
    let provider = Provider {
        id: "1".to_string(),
        name: "Dr. Sarah Johnson".to_string(),
        specialty: "Cardiology".to_string(),
        location: "Cairo Medical Center".to_string(),
        rating: 4.8,
        availability_text: "Available today".to_string(),
        available_days: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
    };

    assert_eq!(provider.is_available_on(day), expected);
}

#[rstest]
#[case(Weekday::Mon, "Monday")]
#[case(Weekday::Tue, "Tuesday")]
#[case(Weekday::Sat, "Saturday")]
#[case(Weekday::Sun, "Sunday")]
fn test_weekday_name(#[case] day: Weekday, #[case] expected: &str) {
    assert_eq!(slotbook_core::models::provider::weekday_name(day), expected);
}
