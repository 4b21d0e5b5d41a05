//! Restore operations replaying a checkpoint onto a target

use serde_json::{json, Value};

use crate::api::http::HttpClient;
use crate::error::Result;
use crate::resource::{Findable, ListParams, Resource, ResourceKind, ResourceManager};

#[derive(Clone)]
pub struct RestoreManager {
    base: ResourceManager,
}

impl RestoreManager {
    pub fn new(http: HttpClient) -> Self {
        Self {
            base: ResourceManager::new(http, ResourceKind::Restore),
        }
    }

    pub async fn create(
        &self,
        provider_id: &str,
        checkpoint_id: &str,
        restore_target: Option<&str>,
        parameters: Value,
        restore_auth: Option<Value>,
    ) -> Result<Resource> {
        let body = json!({
            "restore": {
                "provider_id": provider_id,
                "checkpoint_id": checkpoint_id,
                "restore_target": restore_target,
                "restore_auth": restore_auth,
                "parameters": parameters,
            }
        });
        self.base
            .create("/restores", Some(&body), Some("restore"))
            .await
    }

    pub async fn get(&self, restore_id: &str, session_id: Option<&str>) -> Result<Resource> {
        self.base
            .get(&format!("/restores/{restore_id}"), Some("restore"), session_id)
            .await
    }

    pub async fn list(&self, detailed: bool, params: &ListParams) -> Result<Vec<Resource>> {
        let url = self.base.list_url("restores", detailed, params)?;
        self.base.list(&url, "restores").await
    }
}

impl Findable for RestoreManager {
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
