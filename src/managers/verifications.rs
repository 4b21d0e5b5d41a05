//! Checkpoint verifications

use serde_json::{json, Value};

use crate::api::http::HttpClient;
use crate::error::Result;
use crate::resource::{Findable, ListParams, Resource, ResourceKind, ResourceManager};

#[derive(Clone)]
pub struct VerificationManager {
    base: ResourceManager,
}

impl VerificationManager {
    pub fn new(http: HttpClient) -> Self {
        Self {
            base: ResourceManager::new(http, ResourceKind::Verification),
        }
    }

    pub async fn create(
        &self,
        provider_id: &str,
        checkpoint_id: &str,
        parameters: Value,
    ) -> Result<Resource> {
        let body = json!({
            "verification": {
                "provider_id": provider_id,
                "checkpoint_id": checkpoint_id,
                "parameters": parameters,
            }
        });
        self.base
            .create("/verifications", Some(&body), Some("verification"))
            .await
    }

    pub async fn get(
        &self,
        verification_id: &str,
        session_id: Option<&str>,
    ) -> Result<Resource> {
        self.base
            .get(
                &format!("/verifications/{verification_id}"),
                Some("verification"),
                session_id,
            )
            .await
    }

    pub async fn list(&self, detailed: bool, params: &ListParams) -> Result<Vec<Resource>> {
        let url = self.base.list_url("verifications", detailed, params)?;
        self.base.list(&url, "verifications").await
    }
}

impl Findable for VerificationManager {
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
