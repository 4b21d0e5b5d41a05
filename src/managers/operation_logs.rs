//! Operation logs recorded by finished protection operations

use crate::api::http::HttpClient;
use crate::error::Result;
use crate::resource::{Findable, ListParams, Resource, ResourceKind, ResourceManager};

#[derive(Clone)]
pub struct OperationLogManager {
    base: ResourceManager,
}

impl OperationLogManager {
    pub fn new(http: HttpClient) -> Self {
        Self {
            base: ResourceManager::new(http, ResourceKind::OperationLog),
        }
    }

    pub async fn get(
        &self,
        operation_log_id: &str,
        session_id: Option<&str>,
    ) -> Result<Resource> {
        self.base
            .get(
                &format!("/operation_logs/{operation_log_id}"),
                Some("operation_log"),
                session_id,
            )
            .await
    }

    pub async fn list(&self, detailed: bool, params: &ListParams) -> Result<Vec<Resource>> {
        let url = self.base.list_url("operation_logs", detailed, params)?;
        self.base.list(&url, "operation_logs").await
    }
}

impl Findable for OperationLogManager {
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
