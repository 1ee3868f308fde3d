use store::{Clinic, Doctor, Schedule, ScheduleInput};

use crate::client::{push_opt, Query};
use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn list_clinics(&self) -> Result<Vec<Clinic>, ApiError> {
        self.get("/clinics").await
    }

    pub async fn list_doctors(&self, clinic_id: Option<i64>) -> Result<Vec<Doctor>, ApiError> {
        let mut query = Query::new();
        push_opt(&mut query, "clinic_id", clinic_id);
        self.get_query("/doctors", &query).await
    }

    pub async fn list_schedules(&self, doctor_id: Option<i64>) -> Result<Vec<Schedule>, ApiError> {
        let mut query = Query::new();
        push_opt(&mut query, "doctor_id", doctor_id);
        self.get_query("/schedules", &query).await
    }

    pub async fn create_schedule(&self, input: &ScheduleInput) -> Result<Schedule, ApiError> {
        self.post("/schedules", input).await
    }

    pub async fn update_schedule(&self, id: i64, input: &ScheduleInput) -> Result<Schedule, ApiError> {
        self.put(&format!("/schedules/{id}"), input).await
    }

    pub async fn delete_schedule(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/schedules/{id}")).await
    }
}
