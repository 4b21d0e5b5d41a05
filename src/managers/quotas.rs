//! Per-project quotas

use serde_json::{json, Value};

use crate::api::http::HttpClient;
use crate::error::Result;
use crate::resource::{Resource, ResourceKind, ResourceManager};

/// Value written when a caller clears the plans quota with an explicit
/// null.
// TODO: derive this from GET /quotas/{id}/defaults instead of hardcoding
// the service's current default.
pub const DEFAULT_PLANS_QUOTA: i64 = 50;

/// An explicit `"plans": null` in an update body means "reset to default".
pub(crate) fn substitute_default_plans(data: &mut Value) {
    if data.get("plans") == Some(&Value::Null) {
        data["plans"] = json!(DEFAULT_PLANS_QUOTA);
    }
}

#[derive(Clone)]
pub struct QuotaManager {
    base: ResourceManager,
}

impl QuotaManager {
    pub fn new(http: HttpClient) -> Self {
        Self {
            base: ResourceManager::new(http, ResourceKind::Quota),
        }
    }

    /// The project this client is scoped to, for callers that omit one.
    pub fn project_id(&self) -> &str {
        self.base.project_id()
    }

    pub async fn update(&self, project_id: &str, mut data: Value) -> Result<Option<Resource>> {
        substitute_default_plans(&mut data);
        let body = json!({ "quota": data });
        self.base
            .update(&format!("/quotas/{project_id}"), &body, Some("quota"))
            .await
    }

    pub async fn get(
        &self,
        project_id: &str,
        detail: bool,
        session_id: Option<&str>,
    ) -> Result<Resource> {
        let url = if detail {
            format!("/quotas/{project_id}/detail")
        } else {
            format!("/quotas/{project_id}")
        };
        self.base.get(&url, Some("quota"), session_id).await
    }

    pub async fn defaults(&self, project_id: &str, session_id: Option<&str>) -> Result<Resource> {
        self.base
            .get(
                &format!("/quotas/{project_id}/defaults"),
                Some("quota"),
                session_id,
            )
            .await
    }
}
