//! Protection service workers (admin surface)

use serde_json::json;

use crate::api::http::HttpClient;
use crate::error::Result;
use crate::resource::{ListParams, Resource, ResourceKind, ResourceManager};

#[derive(Clone)]
pub struct ServiceManager {
    base: ResourceManager,
}

impl ServiceManager {
    pub fn new(http: HttpClient) -> Self {
        Self {
            base: ResourceManager::new(http, ResourceKind::Service),
        }
    }

    /// Enable the service specified by the service ID.
    pub async fn enable(&self, service_id: &str) -> Result<Option<Resource>> {
        let body = json!({ "status": "enabled" });
        self.base
            .update(&format!("/os-services/{service_id}"), &body, Some("service"))
            .await
    }

    /// Disable the service specified by the service ID.
    pub async fn disable(&self, service_id: &str) -> Result<Option<Resource>> {
        let body = json!({ "status": "disabled" });
        self.base
            .update(&format!("/os-services/{service_id}"), &body, Some("service"))
            .await
    }

    /// Disable the service and record why.
    pub async fn disable_log_reason(
        &self,
        service_id: &str,
        reason: &str,
    ) -> Result<Option<Resource>> {
        let body = json!({
            "status": "disabled",
            "disabled_reason": reason,
        });
        self.base
            .update(&format!("/os-services/{service_id}"), &body, Some("service"))
            .await
    }

    /// List service workers, optionally narrowed to one host or binary.
    pub async fn list(&self, host: Option<&str>, binary: Option<&str>) -> Result<Vec<Resource>> {
        let mut params = ListParams::default();
        if let Some(host) = host {
            params = params.filter("host", host);
        }
        if let Some(binary) = binary {
            params = params.filter("binary", binary);
        }
        let url = self.base.list_url("os-services", false, &params)?;
        self.base.list(&url, "services").await
    }
}
