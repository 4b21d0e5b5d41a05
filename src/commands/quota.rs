//! Quota and quota-class subcommands

use clap::Subcommand;
use serde_json::json;

use super::output::print_resource;
use crate::api::ApiClient;

#[derive(Debug, Subcommand)]
pub enum QuotaCommand {
    /// Show quotas of a project
    Show {
        /// Project to show quotas for; defaults to the current project
        #[arg(long)]
        project_id: Option<String>,
        /// Include usage and reservations
        #[arg(long)]
        detail: bool,
    },
    /// Show default quotas of a project
    Defaults {
        /// Project to show defaults for; defaults to the current project
        #[arg(long)]
        project_id: Option<String>,
    },
    /// Update quotas of a project
    Update {
        /// Project to update quotas for; defaults to the current project
        #[arg(long)]
        project_id: Option<String>,
        /// Maximum number of plans; omit to reset to the default
        #[arg(long)]
        plans: Option<i64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum QuotaClassCommand {
    /// Show quotas of a quota class
    Show {
        /// Name of the quota class
        class_name: String,
    },
    /// Update quotas of a quota class
    Update {
        /// Name of the quota class
        class_name: String,
        /// Maximum number of plans; omit to reset to the default
        #[arg(long)]
        plans: Option<i64>,
    },
}

fn plans_body(plans: Option<i64>) -> serde_json::Value {
    // an explicit null asks the manager to substitute the service default
    json!({ "plans": plans })
}

pub async fn run(client: &ApiClient, command: QuotaCommand) -> anyhow::Result<()> {
    match command {
        QuotaCommand::Show { project_id, detail } => {
            let project_id = project_id.unwrap_or_else(|| client.project_id().to_string());
            let quota = client.quotas.get(&project_id, detail, None).await?;
            print_resource(&quota);
        }
        QuotaCommand::Defaults { project_id } => {
            let project_id = project_id.unwrap_or_else(|| client.project_id().to_string());
            let quota = client.quotas.defaults(&project_id, None).await?;
            print_resource(&quota);
        }
        QuotaCommand::Update { project_id, plans } => {
            let project_id = project_id.unwrap_or_else(|| client.project_id().to_string());
            if let Some(quota) = client.quotas.update(&project_id, plans_body(plans)).await? {
                print_resource(&quota);
            }
        }
    }
    Ok(())
}

pub async fn run_class(client: &ApiClient, command: QuotaClassCommand) -> anyhow::Result<()> {
    match command {
        QuotaClassCommand::Show { class_name } => {
            let quota_class = client.quota_classes.get(&class_name, None).await?;
            print_resource(&quota_class);
        }
        QuotaClassCommand::Update { class_name, plans } => {
            if let Some(quota_class) = client
                .quota_classes
                .update(&class_name, plans_body(plans))
                .await?
            {
                print_resource(&quota_class);
            }
        }
    }
    Ok(())
}
