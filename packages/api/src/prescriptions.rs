use store::{Medication, Prescription, PrescriptionInput};

use crate::client::{push_opt, Query};
use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn list_prescriptions(
        &self,
        customer_id: Option<i64>,
    ) -> Result<Vec<Prescription>, ApiError> {
        let mut query = Query::new();
        push_opt(&mut query, "customer_id", customer_id);
        self.get_query("/prescriptions", &query).await
    }

    pub async fn create_prescription(
        &self,
        input: &PrescriptionInput,
    ) -> Result<Prescription, ApiError> {
        self.post("/prescriptions", input).await
    }

    pub async fn update_prescription(
        &self,
        id: i64,
        input: &PrescriptionInput,
    ) -> Result<Prescription, ApiError> {
        self.put(&format!("/prescriptions/{id}"), input).await
    }

    pub async fn delete_prescription(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/prescriptions/{id}")).await
    }

    /// Medication catalogue lookup. An empty search returns the full list.
    pub async fn search_medications(&self, search: &str) -> Result<Vec<Medication>, ApiError> {
        let mut query = Query::new();
        let search = search.trim();
        if !search.is_empty() {
            query.push(("search", search.to_string()));
        }
        self.get_query("/medications", &query).await
    }
}
