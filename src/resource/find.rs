//! Name-or-id resolution
//!
//! The service has no single "resolve by any identifier" endpoint, so
//! lookups layer three strategies: integer id, UUID, then an exact-name
//! scan over the full listing. The name scan loads the whole collection
//! and filters client-side; fine for interactive use, not for hot paths.

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::resource::object::{Resource, ResourceKind};

/// Collection lookups the find helper needs from a manager.
#[allow(async_fn_in_trait)]
pub trait Findable {
    fn kind(&self) -> ResourceKind;

    /// Fetch one resource by id.
    async fn get_by_id(&self, id: &str) -> Result<Resource>;

    /// Load the entire collection.
    async fn list_all(&self) -> Result<Vec<Resource>>;
}

/// Resolve a caller-supplied token that may be an integer id, a UUID, or a
/// name.
///
/// Strategies run in order and the first success wins; a not-found from an
/// earlier strategy falls through to the next one.
pub async fn find_resource<M: Findable>(manager: &M, name_or_id: &str) -> Result<Resource> {
    // first try to get the entity as an integer id
    let token = name_or_id.trim();
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(id) = token.parse::<u64>() {
            match manager.get_by_id(&id.to_string()).await {
                Ok(resource) => return Ok(resource),
                Err(err) if err.is_not_found() => {}
                Err(err) => return Err(err),
            }
        }
    }

    // now try it as a UUID
    if Uuid::parse_str(name_or_id).is_ok() {
        match manager.get_by_id(name_or_id).await {
            Ok(resource) => return Ok(resource),
            Err(err) if err.is_not_found() => {}
            Err(err) => return Err(err),
        }
    }

    // finally try to find the entity by name
    find_by_name(manager, name_or_id).await
}

/// Find the single resource whose `name` attribute equals `name` exactly.
///
/// Loads the entire collection and filters client-side. The match is
/// refetched by id so the returned object is fully loaded.
pub async fn find_by_name<M: Findable>(manager: &M, name: &str) -> Result<Resource> {
    let matches = findall_by_attr(manager, "name", name).await?;
    match matches.len() {
        0 => Err(Error::NotFound(format!(
            "no {} with a name or ID of '{}' exists",
            manager.kind(),
            name
        ))),
        1 => {
            let id = matches[0].id()?;
            manager.get_by_id(&id).await
        }
        _ => Err(Error::NoUniqueMatch {
            kind: manager.kind(),
            name: name.to_string(),
        }),
    }
}

/// All resources whose string attribute `attr` equals `value`.
pub async fn findall_by_attr<M: Findable>(
    manager: &M,
    attr: &str,
    value: &str,
) -> Result<Vec<Resource>> {
    Ok(manager
        .list_all()
        .await?
        .into_iter()
        .filter(|resource| resource.attr_str(attr) == Some(value))
        .collect())
}
