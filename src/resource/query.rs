//! Sort validation and query-string encoding
//!
//! Everything here runs before a request is built: invalid sort input never
//! reaches the wire, and the emitted query string is canonical (keys in
//! lexicographic order) so recorded interactions compare byte-for-byte.

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::error::{Error, Result};

/// Sort keys the service accepts.
pub const SORT_KEY_VALUES: &[&str] = &["id", "status", "name", "created_at"];

/// Sort directions the service accepts.
pub const SORT_DIR_VALUES: &[&str] = &["asc", "desc"];

/// Validates and serializes sort specifications.
///
/// The allowed key set and the key-remapping table are fixed at
/// construction; the default instance carries the service's standard keys
/// and an empty remap.
#[derive(Debug, Clone, Copy)]
pub struct SortEncoder {
    keys: &'static [&'static str],
    dirs: &'static [&'static str],
    mappings: &'static [(&'static str, &'static str)],
}

impl Default for SortEncoder {
    fn default() -> Self {
        Self {
            keys: SORT_KEY_VALUES,
            dirs: SORT_DIR_VALUES,
            mappings: &[],
        }
    }
}

impl SortEncoder {
    pub fn new(
        keys: &'static [&'static str],
        dirs: &'static [&'static str],
        mappings: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            keys,
            dirs,
            mappings,
        }
    }

    /// Format a comma-separated sort specification into the `sort` query
    /// parameter value.
    ///
    /// Input entries have the form `key` or `key:dir`. Whitespace around
    /// keys and directions is trimmed, keys are resolved through the remap
    /// table, and empty input yields `None` (no parameter emitted).
    pub fn format_sort(&self, sort: &str) -> Result<Option<String>> {
        let entries: Vec<&str> = sort.split(',').filter(|s| !s.is_empty()).collect();
        if entries.is_empty() {
            return Ok(None);
        }

        let mut formatted = Vec::with_capacity(entries.len());
        for entry in entries {
            let (key, dir) = match entry.split_once(':') {
                Some((k, d)) => (k, Some(d)),
                None => (entry, None),
            };
            formatted.push(self.format_entry(key, dir)?);
        }
        Ok(Some(formatted.join(",")))
    }

    /// Pair-based variant of [`format_sort`](Self::format_sort) for callers
    /// that already hold structured (key, direction) input.
    pub fn format_sort_pairs(&self, pairs: &[(&str, Option<&str>)]) -> Result<Option<String>> {
        if pairs.is_empty() {
            return Ok(None);
        }
        let mut formatted = Vec::with_capacity(pairs.len());
        for (key, dir) in pairs {
            formatted.push(self.format_entry(key, *dir)?);
        }
        Ok(Some(formatted.join(",")))
    }

    fn format_entry(&self, key: &str, dir: Option<&str>) -> Result<String> {
        let key = self.format_sort_key(key.trim())?;
        // a bare trailing colon ("name:") means no direction
        match dir.map(str::trim).filter(|d| !d.is_empty()) {
            Some(dir) => {
                let dir = self.format_sort_dir(dir)?;
                Ok(format!("{key}:{dir}"))
            }
            None => Ok(key.to_string()),
        }
    }

    /// Validate a bare sort key (deprecated `sort_key` parameter path).
    pub fn format_sort_key(&self, key: &str) -> Result<&'static str> {
        let Some(key) = self.keys.iter().find(|&&k| k == key).copied() else {
            return Err(Error::Validation(format!(
                "sort_key must be one of the following: {}.",
                self.keys.join(", ")
            )));
        };
        Ok(self
            .mappings
            .iter()
            .find(|(from, _)| *from == key)
            .map(|(_, to)| *to)
            .unwrap_or(key))
    }

    /// Validate a bare sort direction (deprecated `sort_dir` parameter path).
    pub fn format_sort_dir(&self, dir: &str) -> Result<&'static str> {
        self.dirs
            .iter()
            .find(|&&d| d == dir)
            .copied()
            .ok_or_else(|| {
                Error::Validation(format!(
                    "sort_dir must be one of the following: {}.",
                    self.dirs.join(", ")
                ))
            })
    }
}

/// One list/search request: filters, pagination, sorting.
///
/// Filter entries with empty values are dropped before encoding, as are a
/// zero limit and an empty marker. `sort` takes precedence over the
/// deprecated `sort_key`/`sort_dir` pair.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub filters: BTreeMap<String, String>,
    pub marker: Option<String>,
    pub limit: Option<u32>,
    pub sort_key: Option<String>,
    pub sort_dir: Option<String>,
    pub sort: Option<String>,
}

impl ListParams {
    pub fn filter(mut self, key: &str, value: &str) -> Self {
        self.filters.insert(key.to_string(), value.to_string());
        self
    }
}

/// Encode filters as a canonical query string (no leading `?`).
///
/// Keys are emitted in lexicographic order regardless of the input's
/// iteration order; empty values are dropped; an empty result is the empty
/// string.
pub fn encode_query<I, K, V>(filters: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let ordered: BTreeMap<String, String> = filters
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .filter(|(_, v)| !v.is_empty())
        .collect();

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &ordered {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Resolve a [`ListParams`] into the `?key=value&...` suffix of a list URL
/// (steps 1-4 of list-URL construction). Returns the empty string when no
/// parameters survive.
///
/// Nested collections that live under a parent path reuse this and prepend
/// their own path template.
pub fn encode_list_query(encoder: &SortEncoder, params: &ListParams) -> Result<String> {
    let mut query: BTreeMap<String, String> = params
        .filters
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    if let Some(marker) = params.marker.as_deref().filter(|m| !m.is_empty()) {
        query.insert("marker".to_string(), marker.to_string());
    }
    if let Some(limit) = params.limit.filter(|l| *l > 0) {
        query.insert("limit".to_string(), limit.to_string());
    }

    match params.sort.as_deref().filter(|s| !s.is_empty()) {
        Some(sort) => {
            if let Some(formatted) = encoder.format_sort(sort)? {
                query.insert("sort".to_string(), formatted);
            }
        }
        // sort_key and sort_dir are deprecated, prefer sort
        None => {
            if let Some(key) = params.sort_key.as_deref().filter(|k| !k.is_empty()) {
                query.insert("sort_key".to_string(), encoder.format_sort_key(key)?.to_string());
            }
            if let Some(dir) = params.sort_dir.as_deref().filter(|d| !d.is_empty()) {
                query.insert("sort_dir".to_string(), encoder.format_sort_dir(dir)?.to_string());
            }
        }
    }

    let encoded = encode_query(query);
    if encoded.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("?{encoded}"))
    }
}

/// Build the request path for a top-level collection listing.
pub fn build_list_url(
    encoder: &SortEncoder,
    resource_type: &str,
    detailed: bool,
    params: &ListParams,
) -> Result<String> {
    let detail = if detailed { "/detail" } else { "" };
    let query = encode_list_query(encoder, params)?;
    Ok(format!("/{resource_type}{detail}{query}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_sort_single_key() {
        let encoder = SortEncoder::default();
        assert_eq!(encoder.format_sort("name").unwrap().unwrap(), "name");
    }

    #[test]
    fn format_sort_key_and_direction() {
        let encoder = SortEncoder::default();
        assert_eq!(
            encoder.format_sort("name:asc,id:desc").unwrap().unwrap(),
            "name:asc,id:desc"
        );
    }

    #[test]
    fn format_sort_trims_whitespace() {
        let encoder = SortEncoder::default();
        assert_eq!(
            encoder.format_sort(" name : asc ,id").unwrap().unwrap(),
            "name:asc,id"
        );
    }

    #[test]
    fn format_sort_empty_input_yields_none() {
        let encoder = SortEncoder::default();
        assert!(encoder.format_sort("").unwrap().is_none());
        assert!(encoder.format_sort(",,").unwrap().is_none());
    }

    #[test]
    fn format_sort_rejects_unknown_key() {
        let encoder = SortEncoder::default();
        let err = encoder.format_sort("size:asc").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("id, status, name, created_at"));
    }

    #[test]
    fn format_sort_rejects_unknown_direction() {
        let encoder = SortEncoder::default();
        let err = encoder.format_sort("name:sideways").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("asc, desc"));
    }

    #[test]
    fn format_sort_pairs_mixed() {
        let encoder = SortEncoder::default();
        assert_eq!(
            encoder
                .format_sort_pairs(&[("name", Some("asc")), ("id", None)])
                .unwrap()
                .unwrap(),
            "name:asc,id"
        );
    }

    #[test]
    fn format_sort_applies_remap() {
        let encoder = SortEncoder::new(&["name", "display_name"], SORT_DIR_VALUES, &[("display_name", "name")]);
        assert_eq!(
            encoder.format_sort("display_name:desc").unwrap().unwrap(),
            "name:desc"
        );
    }

    #[test]
    fn encode_query_orders_keys_lexicographically() {
        let pairs = vec![("marker", "1234"), ("limit", "2"), ("all_tenants", "1")];
        assert_eq!(encode_query(pairs), "all_tenants=1&limit=2&marker=1234");
    }

    #[test]
    fn encode_query_drops_empty_values() {
        let pairs = vec![("status", ""), ("name", "x")];
        assert_eq!(encode_query(pairs), "name=x");
    }

    #[test]
    fn encode_query_percent_encodes() {
        let pairs = vec![("name", "my plan")];
        assert_eq!(encode_query(pairs), "name=my+plan");
    }

    #[test]
    fn build_list_url_bare() {
        let url = build_list_url(&SortEncoder::default(), "plans", false, &ListParams::default())
            .unwrap();
        assert_eq!(url, "/plans");
    }

    #[test]
    fn build_list_url_detailed_with_filter() {
        let params = ListParams::default().filter("name", "x");
        let url = build_list_url(&SortEncoder::default(), "plans", true, &params).unwrap();
        assert_eq!(url, "/plans/detail?name=x");
    }

    #[test]
    fn build_list_url_marker_and_limit_in_lexicographic_order() {
        let params = ListParams {
            marker: Some("1234".to_string()),
            limit: Some(2),
            ..Default::default()
        };
        let url = build_list_url(&SortEncoder::default(), "checkpoints", false, &params).unwrap();
        assert_eq!(url, "/checkpoints?limit=2&marker=1234");
    }

    #[test]
    fn build_list_url_sort_wins_over_deprecated_pair() {
        let params = ListParams {
            sort: Some("name:asc".to_string()),
            sort_key: Some("id".to_string()),
            sort_dir: Some("desc".to_string()),
            ..Default::default()
        };
        let url = build_list_url(&SortEncoder::default(), "plans", false, &params).unwrap();
        assert_eq!(url, "/plans?sort=name%3Aasc");
    }

    #[test]
    fn build_list_url_deprecated_pair() {
        let params = ListParams {
            sort_key: Some("id".to_string()),
            sort_dir: Some("asc".to_string()),
            ..Default::default()
        };
        let url = build_list_url(&SortEncoder::default(), "plans", false, &params).unwrap();
        assert_eq!(url, "/plans?sort_dir=asc&sort_key=id");
    }

    #[test]
    fn build_list_url_zero_limit_dropped() {
        let params = ListParams {
            limit: Some(0),
            ..Default::default()
        };
        let url = build_list_url(&SortEncoder::default(), "plans", false, &params).unwrap();
        assert_eq!(url, "/plans");
    }

    #[test]
    fn invalid_sort_fails_before_any_url_is_built() {
        let params = ListParams {
            sort: Some("bogus".to_string()),
            ..Default::default()
        };
        assert!(build_list_url(&SortEncoder::default(), "plans", false, &params).is_err());
    }
}
