use store::{Customer, NewCustomer};

use crate::client::Query;
use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn create_customer(&self, new: &NewCustomer) -> Result<Customer, ApiError> {
        let customer: Customer = self.post("/customers", new).await?;
        tracing::info!("Registered customer {}", customer.id);
        Ok(customer)
    }

    pub async fn list_customers(&self, search: &str) -> Result<Vec<Customer>, ApiError> {
        let mut query = Query::new();
        let search = search.trim();
        if !search.is_empty() {
            query.push(("search", search.to_string()));
        }
        self.get_query("/customers", &query).await
    }
}
