use store::{MedicalRecord, MedicalRecordInput};

use crate::client::{push_opt, Query};
use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn list_medical_records(
        &self,
        customer_id: Option<i64>,
    ) -> Result<Vec<MedicalRecord>, ApiError> {
        let mut query = Query::new();
        push_opt(&mut query, "customer_id", customer_id);
        self.get_query("/medical-records", &query).await
    }

    pub async fn get_medical_record(&self, id: i64) -> Result<MedicalRecord, ApiError> {
        self.get(&format!("/medical-records/{id}")).await
    }

    pub async fn create_medical_record(
        &self,
        input: &MedicalRecordInput,
    ) -> Result<MedicalRecord, ApiError> {
        self.post("/medical-records", input).await
    }

    pub async fn update_medical_record(
        &self,
        id: i64,
        input: &MedicalRecordInput,
    ) -> Result<MedicalRecord, ApiError> {
        self.put(&format!("/medical-records/{id}"), input).await
    }

    pub async fn delete_medical_record(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/medical-records/{id}")).await
    }
}
