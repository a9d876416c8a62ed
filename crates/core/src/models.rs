pub mod appointment;
pub mod provider;
pub mod time_slot;

pub use appointment::{Appointment, AppointmentStatus};
pub use provider::Provider;
pub use time_slot::TimeSlot;
