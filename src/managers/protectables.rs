//! Protectable types and their instances

use std::collections::BTreeMap;

use serde_json::Map;

use crate::api::http::HttpClient;
use crate::error::Result;
use crate::resource::query::{encode_list_query, encode_query};
use crate::resource::{ListParams, Resource, ResourceKind, ResourceManager};

#[derive(Clone)]
pub struct ProtectableManager {
    base: ResourceManager,
}

impl ProtectableManager {
    pub fn new(http: HttpClient) -> Self {
        Self {
            base: ResourceManager::new(http, ResourceKind::Protectable),
        }
    }

    pub async fn get(
        &self,
        protectable_type: &str,
        session_id: Option<&str>,
    ) -> Result<Resource> {
        self.base
            .get(
                &format!("/protectables/{protectable_type}"),
                Some("protectable_type"),
                session_id,
            )
            .await
    }

    /// The type listing is a bare array of type names; each is re-wrapped
    /// so callers see uniform resource objects.
    pub async fn list(&self) -> Result<Vec<Resource>> {
        let types = self.base.list_raw("/protectables", "protectable_type").await?;

        Ok(types
            .into_iter()
            .map(|protectable_type| {
                let mut attrs = Map::new();
                attrs.insert("protectable_type".to_string(), protectable_type);
                Resource::new(ResourceKind::Protectable, attrs, true)
            })
            .collect())
    }

    pub async fn list_instances(
        &self,
        protectable_type: &str,
        params: &ListParams,
    ) -> Result<Vec<Resource>> {
        let query = encode_list_query(self.base.sort_encoder(), params)?;
        let url = format!("/protectables/{protectable_type}/instances{query}");
        self.base
            .list_as(&url, "instances", ResourceKind::ProtectableInstance)
            .await
    }

    pub async fn get_instance(
        &self,
        protectable_type: &str,
        protectable_id: &str,
        search_opts: &BTreeMap<String, String>,
        session_id: Option<&str>,
    ) -> Result<Resource> {
        let encoded = encode_query(search_opts.clone());
        let query = if encoded.is_empty() {
            String::new()
        } else {
            format!("?{encoded}")
        };
        let url =
            format!("/protectables/{protectable_type}/instances/{protectable_id}{query}");
        self.base.get(&url, Some("instance"), session_id).await
    }
}
