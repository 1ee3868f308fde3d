//! Sign-in, sign-up and password recovery. These calls go out without a
//! bearer token; the returned [`AuthSession`] carries the new one.

use store::{
    AuthSession, ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterRequest,
    ResetPasswordRequest,
};

use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let body = LoginRequest {
            email: email.trim().to_lowercase(),
            password: password.to_string(),
        };
        let session: AuthSession = self.post("/auth/login", &body).await?;
        tracing::info!("Signed in as user {} ({:?})", session.user.id, session.user.role);
        Ok(session)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthSession, ApiError> {
        let body = RegisterRequest {
            name: request.name.trim().to_string(),
            email: request.email.trim().to_lowercase(),
            password: request.password.clone(),
            phone: request.phone.clone(),
        };
        self.post("/auth/register", &body).await
    }

    /// Ask the backend to email a reset link. The response text is shown as-is.
    pub async fn forgot_password(&self, email: &str) -> Result<String, ApiError> {
        let body = ForgotPasswordRequest {
            email: email.trim().to_lowercase(),
        };
        let resp: Option<MessageResponse> = self.post("/auth/forgot-password", &body).await?;
        Ok(resp
            .map(|r| r.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "If that address is registered, a reset link is on its way.".to_string()))
    }

    pub async fn reset_password(&self, token: &str, password: &str) -> Result<String, ApiError> {
        let body = ResetPasswordRequest {
            token: token.to_string(),
            password: password.to_string(),
        };
        let resp: Option<MessageResponse> = self.post("/auth/reset-password", &body).await?;
        Ok(resp
            .map(|r| r.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "Password updated. You can sign in now.".to_string()))
    }
}
