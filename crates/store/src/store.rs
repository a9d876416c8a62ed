use eyre::{Result, WrapErr};
use slotbook_core::models::{Appointment, AppointmentStatus};

use crate::repositories::AppointmentRepository;

/// Owner of the ordered appointment list.
///
/// All mutation goes through [`add`](Self::add) and
/// [`cancel`](Self::cancel); each successful mutation re-serializes the full
/// list and writes it through the injected repository, so the durable slot
/// always reflects the in-memory state.
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
    repository: Box<dyn AppointmentRepository>,
}

impl AppointmentStore {
    /// Rehydrates the store from the repository.
    ///
    /// An absent payload, an unreadable backend, or malformed JSON all
    /// initialize the store empty. That is the only recovery behavior; the
    /// condition is logged and never surfaced.
    pub async fn load(repository: Box<dyn AppointmentRepository>) -> Self {
        let appointments = match repository.read().await {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Appointment>>(&payload) {
                Ok(appointments) => {
                    tracing::debug!("Restored {} stored appointments", appointments.len());
                    appointments
                }
                Err(err) => {
                    tracing::warn!("Failed to parse saved appointments, starting empty: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!("Failed to read saved appointments, starting empty: {err}");
                Vec::new()
            }
        };

        Self {
            appointments,
            repository,
        }
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Appends an appointment and persists the updated list.
    ///
    /// No de-duplication and no id uniqueness check: ids are the caller's
    /// responsibility.
    pub async fn add(&mut self, appointment: Appointment) -> Result<()> {
        tracing::debug!(
            "Adding appointment: id={}, provider_id={}, date={}",
            appointment.id,
            appointment.provider_id,
            appointment.date
        );

        self.appointments.push(appointment);
        self.persist().await
    }

    /// Sets the first appointment with a matching id to cancelled and
    /// persists. Silent no-op when no appointment matches.
    pub async fn cancel(&mut self, appointment_id: &str) -> Result<()> {
        match self
            .appointments
            .iter_mut()
            .find(|appointment| appointment.id == appointment_id)
        {
            Some(appointment) => {
                tracing::debug!("Cancelling appointment: id={}", appointment_id);
                appointment.status = AppointmentStatus::Cancelled;
                self.persist().await
            }
            None => {
                tracing::debug!("Cancel of unknown appointment id={}, ignoring", appointment_id);
                Ok(())
            }
        }
    }

    async fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.appointments)
            .wrap_err("Failed to serialize appointments")?;
        self.repository.write(&payload).await
    }
}
