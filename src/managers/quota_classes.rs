//! Quota classes (defaults applied to projects without overrides)

use serde_json::{json, Value};

use crate::api::http::HttpClient;
use crate::error::Result;
use crate::managers::quotas::substitute_default_plans;
use crate::resource::{Resource, ResourceKind, ResourceManager};

#[derive(Clone)]
pub struct QuotaClassManager {
    base: ResourceManager,
}

impl QuotaClassManager {
    pub fn new(http: HttpClient) -> Self {
        Self {
            base: ResourceManager::new(http, ResourceKind::QuotaClass),
        }
    }

    pub async fn update(&self, class_name: &str, mut data: Value) -> Result<Option<Resource>> {
        substitute_default_plans(&mut data);
        let body = json!({ "quota_class": data });
        self.base
            .update(
                &format!("/quota_classes/{class_name}"),
                &body,
                Some("quota_class"),
            )
            .await
    }

    pub async fn get(&self, class_name: &str, session_id: Option<&str>) -> Result<Resource> {
        self.base
            .get(
                &format!("/quota_classes/{class_name}"),
                Some("quota_class"),
                session_id,
            )
            .await
    }
}
