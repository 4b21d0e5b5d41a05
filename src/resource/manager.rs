//! Generic CRUD engine
//!
//! Every per-resource manager delegates here: one HTTP call per operation,
//! decoded through the resource's envelope key and wrapped into
//! [`Resource`] objects. Managers hold no per-call state and may be shared
//! freely; requests are issued one at a time and awaited to completion.

use reqwest::Method;
use serde_json::Value;

use crate::api::http::HttpClient;
use crate::error::{Error, Result};
use crate::resource::object::{Resource, ResourceKind};
use crate::resource::query::{build_list_url, ListParams, SortEncoder};

/// Session header attached to read operations carried out inside a
/// configuration session.
pub const SESSION_HEADER: &str = "X-Configuration-Session";

fn session_headers(session_id: Option<&str>) -> Vec<(&'static str, &str)> {
    match session_id {
        Some(id) => vec![(SESSION_HEADER, id)],
        None => Vec::new(),
    }
}

/// A decode step only wraps elements that actually carry data.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn missing_key(key: &str) -> Error {
    use serde::de::Error as _;
    Error::Decode(serde_json::Error::custom(format!(
        "response has no '{key}' key"
    )))
}

/// Typed gateway to one collection endpoint.
#[derive(Clone)]
pub struct ResourceManager {
    http: HttpClient,
    kind: ResourceKind,
    project_id: String,
    sort: SortEncoder,
}

impl ResourceManager {
    pub fn new(http: HttpClient, kind: ResourceKind) -> Self {
        let project_id = http.project_id().to_string();
        Self {
            http,
            kind,
            project_id,
            sort: SortEncoder::default(),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Project identifier resolved from the transport at construction.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn sort_encoder(&self) -> &SortEncoder {
        &self.sort
    }

    /// Build the request path for a top-level collection listing.
    pub fn list_url(
        &self,
        resource_type: &str,
        detailed: bool,
        params: &ListParams,
    ) -> Result<String> {
        build_list_url(&self.sort, resource_type, detailed, params)
    }

    /// GET a collection and wrap each element.
    ///
    /// A response without `response_key` is an empty collection, not an
    /// error. Elements that carry no data are skipped; the rest come back
    /// loaded (collection responses are final data).
    pub async fn list(&self, path: &str, response_key: &str) -> Result<Vec<Resource>> {
        self.list_as(path, response_key, self.kind).await
    }

    /// [`list`](Self::list) with an element kind other than the manager's
    /// own (nested collections such as protectable instances).
    pub async fn list_as(
        &self,
        path: &str,
        response_key: &str,
        kind: ResourceKind,
    ) -> Result<Vec<Resource>> {
        let data = self.list_raw(path, response_key).await?;
        data.into_iter()
            .filter(is_truthy)
            .map(|item| Resource::from_value(kind, item, true))
            .collect()
    }

    /// GET a collection without wrapping.
    pub async fn list_raw(&self, path: &str, response_key: &str) -> Result<Vec<Value>> {
        let (_, body) = self.http.json_request(Method::GET, path, None, &[]).await?;
        match body.get(response_key) {
            Some(Value::Array(items)) => Ok(items.clone()),
            _ => Ok(Vec::new()),
        }
    }

    /// GET a single resource.
    pub async fn get(
        &self,
        path: &str,
        response_key: Option<&str>,
        session_id: Option<&str>,
    ) -> Result<Resource> {
        let body = self.get_raw(path, response_key, session_id).await?;
        Resource::from_value(self.kind, body, true)
    }

    /// GET the raw sub-document at `response_key`.
    pub async fn get_raw(
        &self,
        path: &str,
        response_key: Option<&str>,
        session_id: Option<&str>,
    ) -> Result<Value> {
        let headers = session_headers(session_id);
        let (_, body) = self
            .http
            .json_request(Method::GET, path, None, &headers)
            .await?;
        unwrap_envelope(body, response_key)
    }

    /// POST a create body (or a bodiless POST) and wrap the result.
    ///
    /// Create responses may be partial documents; the object starts
    /// unloaded so a later attribute read can complete it.
    pub async fn create(
        &self,
        path: &str,
        body: Option<&Value>,
        response_key: Option<&str>,
    ) -> Result<Resource> {
        let (_, decoded) = self.http.json_request(Method::POST, path, body, &[]).await?;
        Resource::from_value(self.kind, unwrap_envelope(decoded, response_key)?, false)
    }

    /// PUT an update body. State-transition endpoints legitimately answer
    /// with an empty body; that is `None`, not an error.
    pub async fn update(
        &self,
        path: &str,
        body: &Value,
        response_key: Option<&str>,
    ) -> Result<Option<Resource>> {
        let (_, decoded) = self
            .http
            .json_request(Method::PUT, path, Some(body), &[])
            .await?;
        if !is_truthy(&decoded) {
            return Ok(None);
        }
        let value = unwrap_envelope(decoded, response_key)?;
        Ok(Some(Resource::from_value(self.kind, value, false)?))
    }

    /// DELETE; a non-2xx status propagates from the transport.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.http.raw_request(Method::DELETE, path, &[]).await?;
        Ok(())
    }
}

fn unwrap_envelope(mut body: Value, response_key: Option<&str>) -> Result<Value> {
    let Some(key) = response_key else {
        return Ok(body);
    };
    match body.get_mut(key) {
        Some(value) => Ok(value.take()),
        None => Err(missing_key(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness_matches_decode_contract() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!({})));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(is_truthy(&json!({"id": "1"})));
        assert!(is_truthy(&json!("OS::Volume")));
    }

    #[test]
    fn envelope_unwrap() {
        let body = json!({"plan": {"id": "1"}});
        assert_eq!(
            unwrap_envelope(body, Some("plan")).unwrap(),
            json!({"id": "1"})
        );

        let body = json!({"id": "1"});
        assert_eq!(unwrap_envelope(body.clone(), None).unwrap(), body);

        assert!(unwrap_envelope(json!({}), Some("plan")).is_err());
    }
}
