//! Protection plans

use serde_json::{json, Value};

use crate::api::http::HttpClient;
use crate::error::Result;
use crate::resource::{Findable, ListParams, Resource, ResourceKind, ResourceManager};

#[derive(Clone)]
pub struct PlanManager {
    base: ResourceManager,
}

impl PlanManager {
    pub fn new(http: HttpClient) -> Self {
        Self {
            base: ResourceManager::new(http, ResourceKind::Plan),
        }
    }

    pub async fn create(
        &self,
        name: &str,
        provider_id: &str,
        resources: Value,
        parameters: Value,
        description: Option<&str>,
    ) -> Result<Resource> {
        let body = json!({
            "plan": {
                "name": name,
                "description": description,
                "provider_id": provider_id,
                "resources": resources,
                "parameters": parameters,
            }
        });
        self.base.create("/plans", Some(&body), Some("plan")).await
    }

    pub async fn update(&self, plan_id: &str, data: Value) -> Result<Option<Resource>> {
        let body = json!({ "plan": data });
        self.base
            .update(&format!("/plans/{plan_id}"), &body, Some("plan"))
            .await
    }

    pub async fn delete(&self, plan_id: &str) -> Result<()> {
        self.base.delete(&format!("/plans/{plan_id}")).await
    }

    pub async fn get(&self, plan_id: &str, session_id: Option<&str>) -> Result<Resource> {
        self.base
            .get(&format!("/plans/{plan_id}"), Some("plan"), session_id)
            .await
    }

    /// List plans, optionally detailed, honoring filters, pagination, and
    /// sorting from `params`.
    pub async fn list(&self, detailed: bool, params: &ListParams) -> Result<Vec<Resource>> {
        let url = self.base.list_url("plans", detailed, params)?;
        self.base.list(&url, "plans").await
    }
}

impl Findable for PlanManager {
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
