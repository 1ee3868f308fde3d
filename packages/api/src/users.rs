use store::{PasswordChange, ProfileUpdate, User};

use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get("/users/me").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.put("/users/me", update).await
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        let _: Option<serde_json::Value> = self.put("/users/me/password", change).await?;
        Ok(())
    }
}
