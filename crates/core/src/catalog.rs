//! The static provider catalog.
//!
//! The directory is a fixed in-memory dataset loaded once at startup; there
//! is no backing service. Filtering and slot generation operate over these
//! records by value.

use chrono::Weekday::{Fri, Mon, Sat, Thu, Tue, Wed};

use crate::models::Provider;

/// Sentinel specialty that disables the specialty filter.
pub const ALL_SPECIALTIES: &str = "All Specialties";

/// Selectable specialties, sentinel first.
pub const SPECIALTIES: [&str; 12] = [
    "All Specialties",
    "Cardiology",
    "Dermatology",
    "Family Medicine",
    "Gastroenterology",
    "Neurology",
    "Obstetrics & Gynecology",
    "Ophthalmology",
    "Orthopedics",
    "Pediatrics",
    "Psychiatry",
    "Urology",
];

/// Returns the full provider catalog, in directory order.
pub fn providers() -> Vec<Provider> {
    vec![
        Provider {
            id: "1".to_string(),
            name: "Dr. Sarah Johnson".to_string(),
            specialty: "Cardiology".to_string(),
            location: "Cairo Medical Center".to_string(),
            rating: 4.8,
            availability_text: "Available today".to_string(),
            available_days: vec![Mon, Wed, Fri],
        },
        Provider {
            id: "2".to_string(),
            name: "Dr. Ahmed Hassan".to_string(),
            specialty: "Dermatology".to_string(),
            location: "Alexandria Clinic".to_string(),
            rating: 4.7,
            availability_text: "Next available: Tomorrow".to_string(),
            available_days: vec![Tue, Thu, Sat],
        },
        Provider {
            id: "3".to_string(),
            name: "Dr. Michael Chen".to_string(),
            specialty: "Family Medicine".to_string(),
            location: "Cairo Family Health".to_string(),
            rating: 4.9,
            availability_text: "Available today".to_string(),
            available_days: vec![Mon, Tue, Wed, Fri],
        },
        Provider {
            id: "4".to_string(),
            name: "Dr. Emily Rodriguez".to_string(),
            specialty: "Pediatrics".to_string(),
            location: "Children's Care Clinic".to_string(),
            rating: 4.9,
            availability_text: "Next available: Thursday".to_string(),
            available_days: vec![Thu, Fri, Sat],
        },
        Provider {
            id: "5".to_string(),
            name: "Dr. Fatima Al-Zahrawi".to_string(),
            specialty: "Obstetrics & Gynecology".to_string(),
            location: "Women's Health Center".to_string(),
            rating: 4.7,
            availability_text: "Available today".to_string(),
            available_days: vec![Mon, Wed, Thu],
        },
        Provider {
            id: "6".to_string(),
            name: "Dr. James Wilson".to_string(),
            specialty: "Orthopedics".to_string(),
            location: "Sports Medicine Clinic".to_string(),
            rating: 4.6,
            availability_text: "Next available: Friday".to_string(),
            available_days: vec![Tue, Fri, Sat],
        },
        Provider {
            id: "7".to_string(),
            name: "Dr. Layla Ibrahim".to_string(),
            specialty: "Neurology".to_string(),
            location: "Neurological Institute".to_string(),
            rating: 4.8,
            availability_text: "Available today".to_string(),
            available_days: vec![Mon, Thu, Fri],
        },
        Provider {
            id: "8".to_string(),
            name: "Dr. Robert Kim".to_string(),
            specialty: "Psychiatry".to_string(),
            location: "Mental Health Center".to_string(),
            rating: 4.5,
            availability_text: "Next available: Wednesday".to_string(),
            available_days: vec![Wed, Thu, Fri],
        },
    ]
}
