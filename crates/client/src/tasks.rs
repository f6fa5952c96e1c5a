//! Task endpoints.

use warden_core::{ApiResult, Page, PageRequest, Task, TaskId, TaskStats};

use crate::dto::NewTask;
use crate::gateway::ApiClient;

impl ApiClient {
    pub async fn list_tasks(&self, page: PageRequest) -> ApiResult<Page<Task>> {
        self.get_json("/tasks", &page.to_query()).await
    }

    pub async fn get_task(&self, id: TaskId) -> ApiResult<Task> {
        self.get_json(&format!("/tasks/{id}"), &[]).await
    }

    /// Validates client-side first: a task without a command never reaches
    /// the network.
    pub async fn create_task(&self, task: &NewTask) -> ApiResult<Task> {
        task.validate()?;
        self.post_json("/tasks", task).await
    }

    pub async fn cancel_task(&self, id: TaskId) -> ApiResult<()> {
        self.post_empty(&format!("/tasks/{id}/cancel")).await
    }

    pub async fn task_stats(&self) -> ApiResult<TaskStats> {
        self.get_json("/tasks/stats/summary", &[]).await
    }
}
