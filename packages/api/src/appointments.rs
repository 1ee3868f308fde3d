use store::{Appointment, AppointmentStatus, AppointmentUpdate, NewAppointment};

use crate::client::{push_opt, Query};
use crate::{ApiClient, ApiError};

/// Server-side narrowing for `GET /appointments`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppointmentQuery {
    pub customer_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub status: Option<AppointmentStatus>,
}

impl AppointmentQuery {
    pub fn for_customer(customer_id: i64) -> Self {
        Self {
            customer_id: Some(customer_id),
            ..Self::default()
        }
    }

    pub fn for_doctor(doctor_id: i64) -> Self {
        Self {
            doctor_id: Some(doctor_id),
            ..Self::default()
        }
    }

    fn to_query(&self) -> Query {
        let mut query = Query::new();
        push_opt(&mut query, "customer_id", self.customer_id);
        push_opt(&mut query, "doctor_id", self.doctor_id);
        push_opt(&mut query, "status", self.status.map(|s| s.as_str()));
        query
    }
}

impl ApiClient {
    pub async fn list_appointments(
        &self,
        query: &AppointmentQuery,
    ) -> Result<Vec<Appointment>, ApiError> {
        self.get_query("/appointments", &query.to_query()).await
    }

    pub async fn get_appointment(&self, id: i64) -> Result<Appointment, ApiError> {
        self.get(&format!("/appointments/{id}")).await
    }

    pub async fn create_appointment(&self, new: &NewAppointment) -> Result<Appointment, ApiError> {
        let appt: Appointment = self.post("/appointments", new).await?;
        tracing::info!("Booked appointment {} at {}", appt.id, appt.scheduled_at);
        Ok(appt)
    }

    pub async fn update_appointment(
        &self,
        id: i64,
        update: &AppointmentUpdate,
    ) -> Result<Appointment, ApiError> {
        self.put(&format!("/appointments/{id}"), update).await
    }

    /// Cancel keeps the row and flips its status.
    pub async fn cancel_appointment(&self, id: i64) -> Result<Appointment, ApiError> {
        tracing::info!("Cancelling appointment {}", id);
        self.update_appointment(id, &AppointmentUpdate::status(AppointmentStatus::Cancelled))
            .await
    }

    pub async fn delete_appointment(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/appointments/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_skips_unset_fields() {
        assert!(AppointmentQuery::default().to_query().is_empty());
        let q = AppointmentQuery {
            doctor_id: Some(4),
            status: Some(AppointmentStatus::NoShow),
            ..Default::default()
        };
        assert_eq!(
            q.to_query(),
            vec![("doctor_id", "4".to_string()), ("status", "no_show".to_string())]
        );
    }
}
