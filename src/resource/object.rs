//! Resource objects
//!
//! A [`Resource`] is a bag of attributes decoded from one service response,
//! tagged with the collection it came from. Objects built from partial data
//! can complete themselves once through the owning manager; after that,
//! missing attributes are an error rather than a fetch trigger.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::resource::find::Findable;

/// The collection a resource belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Plan,
    Checkpoint,
    Trigger,
    Restore,
    Verification,
    ScheduledOperation,
    OperationLog,
    Provider,
    Protectable,
    ProtectableInstance,
    Service,
    Quota,
    QuotaClass,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Plan => "plan",
            ResourceKind::Checkpoint => "checkpoint",
            ResourceKind::Trigger => "trigger",
            ResourceKind::Restore => "restore",
            ResourceKind::Verification => "verification",
            ResourceKind::ScheduledOperation => "scheduled operation",
            ResourceKind::OperationLog => "operation log",
            ResourceKind::Provider => "provider",
            ResourceKind::Protectable => "protectable",
            ResourceKind::ProtectableInstance => "protectable instance",
            ResourceKind::Service => "service",
            ResourceKind::Quota => "quota",
            ResourceKind::QuotaClass => "quota class",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entity returned by the service.
#[derive(Debug, Clone)]
pub struct Resource {
    kind: ResourceKind,
    attrs: Map<String, Value>,
    loaded: bool,
}

impl Resource {
    pub fn new(kind: ResourceKind, attrs: Map<String, Value>, loaded: bool) -> Self {
        Self {
            kind,
            attrs,
            loaded,
        }
    }

    /// Build a resource from a decoded sub-document. The value must be a
    /// JSON object.
    pub fn from_value(kind: ResourceKind, value: Value, loaded: bool) -> Result<Self> {
        let attrs: Map<String, Value> = serde_json::from_value(value)?;
        Ok(Self::new(kind, attrs, loaded))
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn set_loaded(&mut self, loaded: bool) {
        self.loaded = loaded;
    }

    /// Look up an attribute without triggering completion.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    /// String form of an attribute, if present and a string.
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Value::as_str)
    }

    /// Look up an attribute that must already be present.
    pub fn require(&self, key: &str) -> Result<&Value> {
        self.attrs
            .get(key)
            .ok_or_else(|| Error::AttributeNotFound(key.to_string()))
    }

    /// The resource id, as the path segment it is addressed by.
    pub fn id(&self) -> Result<String> {
        match self.require("id")? {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(Error::AttributeNotFound(format!(
                "id (unexpected type {other:?})"
            ))),
        }
    }

    /// Merge freshly fetched attributes over the current ones.
    pub fn merge(&mut self, attrs: Map<String, Value>) {
        self.attrs.extend(attrs);
    }

    /// Complete this object through the owning manager.
    ///
    /// One-shot: the loaded flag flips before the fetch (so a failed fetch
    /// still counts as the one attempt), and loaded objects return
    /// immediately.
    pub async fn ensure_loaded<M: Findable>(&mut self, manager: &M) -> Result<()> {
        if self.loaded {
            return Ok(());
        }
        self.loaded = true;
        let id = self.id()?;
        let fresh = manager.get_by_id(&id).await?;
        self.merge(fresh.attrs);
        Ok(())
    }

    /// Read an attribute, completing the object first if it is missing and
    /// the object has never been loaded.
    ///
    /// At most one fetch is performed over the object's lifetime; an
    /// attribute still absent afterwards is [`Error::AttributeNotFound`].
    pub async fn fetch_attr<M: Findable>(&mut self, manager: &M, key: &str) -> Result<Value> {
        if let Some(value) = self.attrs.get(key) {
            return Ok(value.clone());
        }
        if !self.loaded {
            self.ensure_loaded(manager).await?;
            if let Some(value) = self.attrs.get(key) {
                return Ok(value.clone());
            }
        }
        Err(Error::AttributeNotFound(key.to_string()))
    }

    /// Plain mapping of the attributes; the loaded flag and kind do not
    /// round-trip.
    pub fn to_map(&self) -> Map<String, Value> {
        self.attrs.clone()
    }
}

/// Equal iff same kind and deeply equal attributes; the loaded flag does
/// not participate.
impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.attrs == other.attrs
    }
}

impl Eq for Resource {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Map<String, Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn equality_requires_matching_kind() {
        let a = Resource::new(ResourceKind::Plan, attrs(json!({"id": "1"})), true);
        let b = Resource::new(ResourceKind::Plan, attrs(json!({"id": "1"})), false);
        let c = Resource::new(ResourceKind::Trigger, attrs(json!({"id": "1"})), true);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn equality_is_structural() {
        let a = Resource::new(
            ResourceKind::Plan,
            attrs(json!({"id": "1", "resources": [{"type": "volume"}]})),
            true,
        );
        let b = Resource::new(
            ResourceKind::Plan,
            attrs(json!({"id": "1", "resources": [{"type": "volume"}]})),
            true,
        );
        let c = Resource::new(
            ResourceKind::Plan,
            attrs(json!({"id": "1", "resources": []})),
            true,
        );
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn require_on_loaded_object_does_not_fetch() {
        let plan = Resource::new(ResourceKind::Plan, attrs(json!({"id": "1"})), true);
        let err = plan.require("description").unwrap_err();
        assert!(matches!(err, Error::AttributeNotFound(_)));
    }

    #[test]
    fn to_map_drops_bookkeeping() {
        let plan = Resource::new(ResourceKind::Plan, attrs(json!({"id": "1", "name": "x"})), true);
        let map = plan.to_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["name"], json!("x"));
    }

    #[test]
    fn numeric_id_is_stringified() {
        let plan = Resource::new(ResourceKind::Plan, attrs(json!({"id": 42})), true);
        assert_eq!(plan.id().unwrap(), "42");
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(Resource::from_value(ResourceKind::Plan, json!("nope"), true).is_err());
    }
}
