//! Protection providers (read-only)

use crate::api::http::HttpClient;
use crate::error::Result;
use crate::resource::{Findable, ListParams, Resource, ResourceKind, ResourceManager};

#[derive(Clone)]
pub struct ProviderManager {
    base: ResourceManager,
}

impl ProviderManager {
    pub fn new(http: HttpClient) -> Self {
        Self {
            base: ResourceManager::new(http, ResourceKind::Provider),
        }
    }

    pub async fn get(&self, provider_id: &str, session_id: Option<&str>) -> Result<Resource> {
        self.base
            .get(
                &format!("/providers/{provider_id}"),
                Some("provider"),
                session_id,
            )
            .await
    }

    pub async fn list(&self, detailed: bool, params: &ListParams) -> Result<Vec<Resource>> {
        let url = self.base.list_url("providers", detailed, params)?;
        self.base.list(&url, "providers").await
    }
}

impl Findable for ProviderManager {
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
