use store::{LabTest, LabTestInput, LabTestType};

use crate::client::{push_opt, Query};
use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn list_lab_tests(&self, customer_id: Option<i64>) -> Result<Vec<LabTest>, ApiError> {
        let mut query = Query::new();
        push_opt(&mut query, "customer_id", customer_id);
        self.get_query("/lab-tests", &query).await
    }

    pub async fn create_lab_test(&self, input: &LabTestInput) -> Result<LabTest, ApiError> {
        self.post("/lab-tests", input).await
    }

    pub async fn update_lab_test(&self, id: i64, input: &LabTestInput) -> Result<LabTest, ApiError> {
        self.put(&format!("/lab-tests/{id}"), input).await
    }

    pub async fn delete_lab_test(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/lab-tests/{id}")).await
    }

    pub async fn list_lab_test_types(&self) -> Result<Vec<LabTestType>, ApiError> {
        self.get("/lab-test-types").await
    }
}
