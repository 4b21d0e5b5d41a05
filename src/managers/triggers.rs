//! Triggers firing scheduled protection operations

use serde_json::{json, Value};

use crate::api::http::HttpClient;
use crate::error::{Error, Result};
use crate::resource::{Findable, ListParams, Resource, ResourceKind, ResourceManager};

#[derive(Clone)]
pub struct TriggerManager {
    base: ResourceManager,
}

/// The service stores the trigger window as an integer number of minutes;
/// callers routinely hand it over as a string.
fn coerce_window(properties: &mut Value) -> Result<()> {
    let Some(window) = properties.get("window") else {
        return Ok(());
    };

    let coerced = match window {
        Value::Null => return Ok(()),
        Value::String(s) if s.is_empty() => return Ok(()),
        Value::Number(n) if n.as_i64() == Some(0) => return Ok(()),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    match coerced {
        Some(minutes) => {
            properties["window"] = json!(minutes);
            Ok(())
        }
        None => Err(Error::Validation(
            "the trigger window is not an integer".to_string(),
        )),
    }
}

impl TriggerManager {
    pub fn new(http: HttpClient) -> Self {
        Self {
            base: ResourceManager::new(http, ResourceKind::Trigger),
        }
    }

    pub async fn create(
        &self,
        name: &str,
        trigger_type: &str,
        mut properties: Value,
    ) -> Result<Resource> {
        coerce_window(&mut properties)?;
        let body = json!({
            "trigger_info": {
                "name": name,
                "type": trigger_type,
                "properties": properties,
            }
        });
        self.base
            .create("/triggers", Some(&body), Some("trigger_info"))
            .await
    }

    pub async fn update(&self, trigger_id: &str, mut data: Value) -> Result<Option<Resource>> {
        if let Some(properties) = data.get_mut("properties") {
            coerce_window(properties)?;
        }
        let body = json!({ "trigger_info": data });
        self.base
            .update(&format!("/triggers/{trigger_id}"), &body, Some("trigger_info"))
            .await
    }

    pub async fn delete(&self, trigger_id: &str) -> Result<()> {
        self.base.delete(&format!("/triggers/{trigger_id}")).await
    }

    pub async fn get(&self, trigger_id: &str, session_id: Option<&str>) -> Result<Resource> {
        self.base
            .get(
                &format!("/triggers/{trigger_id}"),
                Some("trigger_info"),
                session_id,
            )
            .await
    }

    pub async fn list(&self, detailed: bool, params: &ListParams) -> Result<Vec<Resource>> {
        let url = self.base.list_url("triggers", detailed, params)?;
        self.base.list(&url, "triggers").await
    }
}

impl Findable for TriggerManager {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_accepts_integers_and_numeric_strings() {
        let mut props = json!({"window": 15});
        coerce_window(&mut props).unwrap();
        assert_eq!(props["window"], json!(15));

        let mut props = json!({"window": "30"});
        coerce_window(&mut props).unwrap();
        assert_eq!(props["window"], json!(30));
    }

    #[test]
    fn window_rejects_non_numeric() {
        let mut props = json!({"window": "wide"});
        let err = coerce_window(&mut props).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn absent_or_empty_window_passes_through() {
        let mut props = json!({"pattern": "0 10 * * *"});
        coerce_window(&mut props).unwrap();
        assert!(props.get("window").is_none());

        let mut props = json!({"window": ""});
        coerce_window(&mut props).unwrap();
        assert_eq!(props["window"], json!(""));
    }
}
