//! Auth endpoints and the [`AuthBackend`] wiring.

use warden_auth::{AuthBackend, Credentials, LoginResponse, UserAccount};
use warden_core::ApiResult;

use crate::gateway::ApiClient;

impl ApiClient {
    /// `POST /auth/login`. A 401 here is a credentials error, not session
    /// expiry; the caller (the login form) owns its presentation.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        self.post_login("/auth/login", credentials).await
    }

    pub async fn logout(&self) -> ApiResult<()> {
        self.post_empty("/auth/logout").await
    }

    pub async fn current_user(&self) -> ApiResult<UserAccount> {
        self.get_json("/auth/me", &[]).await
    }

    pub async fn validate_session(&self) -> ApiResult<()> {
        self.get_ok("/auth/validate").await
    }
}

impl AuthBackend for ApiClient {
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        ApiClient::login(self, credentials).await
    }

    async fn logout(&self) -> ApiResult<()> {
        ApiClient::logout(self).await
    }

    async fn current_user(&self) -> ApiResult<UserAccount> {
        ApiClient::current_user(self).await
    }

    async fn validate_session(&self) -> ApiResult<()> {
        ApiClient::validate_session(self).await
    }
}
