//! Managed client endpoints.

use warden_core::{ApiResult, ClientId, ClientStats, ManagedClient, Page, PageRequest};

use crate::dto::UpdateClient;
use crate::gateway::ApiClient;

impl ApiClient {
    pub async fn list_clients(&self, page: PageRequest) -> ApiResult<Page<ManagedClient>> {
        self.get_json("/clients", &page.to_query()).await
    }

    pub async fn get_client(&self, id: ClientId) -> ApiResult<ManagedClient> {
        self.get_json(&format!("/clients/{id}"), &[]).await
    }

    /// Clients enroll through the agent; the console only updates metadata.
    pub async fn update_client(
        &self,
        id: ClientId,
        update: &UpdateClient,
    ) -> ApiResult<ManagedClient> {
        self.put_json(&format!("/clients/{id}"), update).await
    }

    pub async fn client_stats(&self) -> ApiResult<ClientStats> {
        self.get_json("/clients/stats/summary", &[]).await
    }
}
