//! Scheduled protection operations bound to a trigger

use serde_json::{json, Value};

use crate::api::http::HttpClient;
use crate::error::Result;
use crate::resource::{Findable, ListParams, Resource, ResourceKind, ResourceManager};

#[derive(Clone)]
pub struct ScheduledOperationManager {
    base: ResourceManager,
}

impl ScheduledOperationManager {
    pub fn new(http: HttpClient) -> Self {
        Self {
            base: ResourceManager::new(http, ResourceKind::ScheduledOperation),
        }
    }

    pub async fn create(
        &self,
        name: &str,
        operation_type: &str,
        trigger_id: &str,
        operation_definition: Value,
    ) -> Result<Resource> {
        let body = json!({
            "scheduled_operation": {
                "name": name,
                "operation_type": operation_type,
                "trigger_id": trigger_id,
                "operation_definition": operation_definition,
            }
        });
        self.base
            .create(
                "/scheduled_operations",
                Some(&body),
                Some("scheduled_operation"),
            )
            .await
    }

    pub async fn delete(&self, scheduled_operation_id: &str) -> Result<()> {
        self.base
            .delete(&format!("/scheduled_operations/{scheduled_operation_id}"))
            .await
    }

    pub async fn get(
        &self,
        scheduled_operation_id: &str,
        session_id: Option<&str>,
    ) -> Result<Resource> {
        self.base
            .get(
                &format!("/scheduled_operations/{scheduled_operation_id}"),
                Some("scheduled_operation"),
                session_id,
            )
            .await
    }

    /// List scheduled operations. The service nests the collection under
    /// `operations`, not `scheduled_operations`.
    pub async fn list(&self, detailed: bool, params: &ListParams) -> Result<Vec<Resource>> {
        let url = self
            .base
            .list_url("scheduled_operations", detailed, params)?;
        self.base.list(&url, "operations").await
    }
}

impl Findable for ScheduledOperationManager {
    fn kind(&self) -> ResourceKind {
        self.base.kind()
    }

    async fn get_by_id(&self, id: &str) -> Result<Resource> {
        self.get(id, None).await
    }

    async fn list_all(&self) -> Result<Vec<Resource>> {
        self.list(false, &ListParams::default()).await
    }
}
