//! CLI command handlers
//!
//! One module per API collection; each translates parsed arguments into
//! manager calls and renders the result. Batch verbs attempt every supplied
//! id and only fail the command when nothing succeeded.

use clap::Args;

use crate::resource::ListParams;

pub mod checkpoint;
pub mod operation_log;
pub mod output;
pub mod plan;
pub mod protectable;
pub mod provider;
pub mod quota;
pub mod restore;
pub mod scheduled_operation;
pub mod service;
pub mod trigger;
pub mod verification;

/// Listing options shared by every collection.
#[derive(Debug, Args)]
pub struct ListOpts {
    /// Include resources from all projects (admin only)
    #[arg(long)]
    pub all_projects: bool,

    /// Filter results by status
    #[arg(long)]
    pub status: Option<String>,

    /// Filter results by name
    #[arg(long)]
    pub name: Option<String>,

    /// ID of the last resource on the previous page
    #[arg(long)]
    pub marker: Option<String>,

    /// Maximum number of resources to display
    #[arg(long)]
    pub limit: Option<u32>,

    /// Sort output by <key>[:<direction>], comma-separated; directions are
    /// asc or desc
    #[arg(long, conflicts_with_all = ["sort_key", "sort_dir"])]
    pub sort: Option<String>,

    /// Key to sort by (deprecated, use --sort)
    #[arg(long)]
    pub sort_key: Option<String>,

    /// Sort direction (deprecated, use --sort)
    #[arg(long)]
    pub sort_dir: Option<String>,
}

impl ListOpts {
    pub fn to_params(&self) -> ListParams {
        let mut params = ListParams {
            marker: self.marker.clone(),
            limit: self.limit,
            sort: self.sort.clone(),
            sort_key: self.sort_key.clone(),
            sort_dir: self.sort_dir.clone(),
            ..Default::default()
        };
        if self.all_projects {
            params = params.filter("all_tenants", "1");
        }
        if let Some(status) = &self.status {
            params = params.filter("status", status);
        }
        if let Some(name) = &self.name {
            params = params.filter("name", name);
        }
        params
    }
}

/// Parse a `--parameters`/`--properties` style JSON document argument.
pub(crate) fn parse_json_arg(raw: Option<&str>, what: &str) -> anyhow::Result<serde_json::Value> {
    match raw {
        None => Ok(serde_json::json!({})),
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| anyhow::anyhow!("{what} is not valid JSON: {e}")),
    }
}

/// Outcome of a batch verb: fail only when every item failed.
pub(crate) fn batch_outcome(
    attempted: usize,
    failures: usize,
    action: &str,
    kind: &str,
) -> anyhow::Result<()> {
    if attempted > 0 && failures == attempted {
        anyhow::bail!("unable to find and {action} any of the specified {kind}s");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_outcome_partial_success_is_success() {
        assert!(batch_outcome(3, 1, "delete", "plan").is_ok());
        assert!(batch_outcome(3, 0, "delete", "plan").is_ok());
    }

    #[test]
    fn batch_outcome_total_failure_raises() {
        assert!(batch_outcome(3, 3, "delete", "plan").is_err());
    }

    #[test]
    fn list_opts_become_truthy_filters() {
        let opts = ListOpts {
            all_projects: true,
            status: Some("available".to_string()),
            name: None,
            marker: None,
            limit: Some(10),
            sort: None,
            sort_key: None,
            sort_dir: None,
        };
        let params = opts.to_params();
        assert_eq!(params.filters.get("all_tenants").unwrap(), "1");
        assert_eq!(params.filters.get("status").unwrap(), "available");
        assert!(!params.filters.contains_key("name"));
        assert_eq!(params.limit, Some(10));
    }
}
