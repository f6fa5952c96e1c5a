//! User administration endpoints.

use warden_auth::UserAccount;
use warden_core::{ApiResult, Page, PageRequest, UserId};

use crate::dto::{NewUser, UpdateUser, UserStats};
use crate::gateway::ApiClient;

impl ApiClient {
    pub async fn list_users(&self, page: PageRequest) -> ApiResult<Page<UserAccount>> {
        self.get_json("/users", &page.to_query()).await
    }

    pub async fn get_user(&self, id: UserId) -> ApiResult<UserAccount> {
        self.get_json(&format!("/users/{id}"), &[]).await
    }

    pub async fn create_user(&self, user: &NewUser) -> ApiResult<UserAccount> {
        user.validate()?;
        self.post_json("/users", user).await
    }

    pub async fn update_user(&self, id: UserId, update: &UpdateUser) -> ApiResult<UserAccount> {
        self.put_json(&format!("/users/{id}"), update).await
    }

    pub async fn delete_user(&self, id: UserId) -> ApiResult<()> {
        self.delete(&format!("/users/{id}")).await
    }

    pub async fn user_stats(&self) -> ApiResult<UserStats> {
        self.get_json("/users/stats/summary", &[]).await
    }
}
