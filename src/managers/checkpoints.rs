//! Checkpoints, nested under their protection provider

use serde_json::{json, Value};

use crate::api::http::HttpClient;
use crate::error::Result;
use crate::resource::query::encode_list_query;
use crate::resource::{Findable, ListParams, Resource, ResourceKind, ResourceManager};

#[derive(Clone)]
pub struct CheckpointManager {
    base: ResourceManager,
}

impl CheckpointManager {
    pub fn new(http: HttpClient) -> Self {
        Self {
            base: ResourceManager::new(http, ResourceKind::Checkpoint),
        }
    }

    pub async fn create(
        &self,
        provider_id: &str,
        plan_id: &str,
        extra_info: Option<Value>,
    ) -> Result<Resource> {
        // the wire key really is hyphenated
        let body = json!({
            "checkpoint": {
                "plan_id": plan_id,
                "extra-info": extra_info,
            }
        });
        let url = format!("/providers/{provider_id}/checkpoints");
        self.base.create(&url, Some(&body), Some("checkpoint")).await
    }

    /// Reset a checkpoint's state (admin operation).
    pub async fn reset_state(
        &self,
        provider_id: &str,
        checkpoint_id: &str,
        state: &str,
    ) -> Result<Option<Resource>> {
        let body = json!({ "os-resetState": { "state": state } });
        self.update(provider_id, checkpoint_id, &body).await
    }

    pub async fn update(
        &self,
        provider_id: &str,
        checkpoint_id: &str,
        values: &Value,
    ) -> Result<Option<Resource>> {
        let url = format!("/providers/{provider_id}/checkpoints/{checkpoint_id}");
        self.base.update(&url, values, None).await
    }

    pub async fn delete(&self, provider_id: &str, checkpoint_id: &str) -> Result<()> {
        let url = format!("/providers/{provider_id}/checkpoints/{checkpoint_id}");
        self.base.delete(&url).await
    }

    pub async fn get(
        &self,
        provider_id: &str,
        checkpoint_id: &str,
        session_id: Option<&str>,
    ) -> Result<Resource> {
        let url = format!("/providers/{provider_id}/checkpoints/{checkpoint_id}");
        self.base.get(&url, Some("checkpoint"), session_id).await
    }

    /// List a provider's checkpoints. Same query semantics as top-level
    /// collections, with the provider id spliced into the path.
    pub async fn list(&self, provider_id: &str, params: &ListParams) -> Result<Vec<Resource>> {
        let query = encode_list_query(self.base.sort_encoder(), params)?;
        let url = format!("/providers/{provider_id}/checkpoints{query}");
        self.base.list(&url, "checkpoints").await
    }

    /// Complete a partially-loaded checkpoint.
    ///
    /// The refetch needs the provider id, which lives inside the object's
    /// own `protection_plan` attribute; without it there is nothing to do.
    pub async fn complete(&self, checkpoint: &mut Resource) -> Result<()> {
        if checkpoint.is_loaded() {
            return Ok(());
        }
        checkpoint.set_loaded(true);

        let Some(provider_id) = checkpoint
            .attr("protection_plan")
            .and_then(|plan| plan.get("provider_id"))
            .and_then(Value::as_str)
            .map(str::to_string)
        else {
            return Ok(());
        };

        let id = checkpoint.id()?;
        let fresh = self.get(&provider_id, &id, None).await?;
        checkpoint.merge(fresh.to_map());
        Ok(())
    }

    /// View of this manager scoped to one provider, so checkpoint lookups
    /// can run through the generic name-or-id resolution.
    pub fn scoped<'a>(&'a self, provider_id: &'a str) -> ProviderCheckpoints<'a> {
        ProviderCheckpoints {
            manager: self,
            provider_id,
        }
    }
}

pub struct ProviderCheckpoints<'a> {
    manager: &'a CheckpointManager,
    provider_id: &'a str,
}

impl Findable for ProviderCheckpoints<'_> {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Checkpoint
    }

    async fn get_by_id(&self, id: &str) -> Result<Resource> {
        self.manager.get(self.provider_id, id, None).await
    }

    async fn list_all(&self) -> Result<Vec<Resource>> {
        self.manager
            .list(self.provider_id, &ListParams::default())
            .await
    }
}
