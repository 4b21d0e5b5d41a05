//! Plan subcommands

use clap::Subcommand;
use serde_json::{json, Value};

use super::output::{print_list, print_resource};
use super::{batch_outcome, parse_json_arg, ListOpts};
use crate::api::ApiClient;
use crate::resource::find_resource;

#[derive(Debug, Subcommand)]
pub enum PlanCommand {
    /// List protection plans
    List {
        #[command(flatten)]
        opts: ListOpts,
        /// Show detailed plan info
        #[arg(long)]
        detailed: bool,
    },
    /// Show plan details
    Show {
        /// Name or ID of the plan
        plan: String,
    },
    /// Create a protection plan
    Create {
        /// Name of the plan
        name: String,
        /// ID of the provider that will protect the resources
        provider_id: String,
        /// Resource to protect, as <id>=<type>[=<name>]; repeatable
        #[arg(long = "resource", required = true)]
        resources: Vec<String>,
        /// Protection parameters as a JSON document
        #[arg(long)]
        parameters: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update name, resources, or status of a plan
    Update {
        /// ID of the plan to update
        plan_id: String,
        /// A name to which the plan will be renamed
        #[arg(long)]
        name: Option<String>,
        /// Description to which the plan will be updated
        #[arg(long)]
        description: Option<String>,
        /// Replacement resource, as <id>=<type>[=<name>]; repeatable
        #[arg(long = "resource")]
        resources: Vec<String>,
        /// Status to which the plan will be updated (suspended or started)
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete one or more plans
    Delete {
        /// Name or ID of the plan(s)
        #[arg(required = true)]
        plans: Vec<String>,
    },
}

const LIST_FIELDS: &[&str] = &["id", "name", "description", "provider_id", "status"];

/// Parse repeated `<id>=<type>[=<name>]` resource specs.
fn parse_plan_resources(specs: &[String]) -> anyhow::Result<Value> {
    let mut resources = Vec::with_capacity(specs.len());
    for spec in specs {
        let parts: Vec<&str> = spec.split('=').collect();
        match parts.as_slice() {
            [id, kind] => resources.push(json!({"id": id, "type": kind})),
            [id, kind, name] => resources.push(json!({"id": id, "type": kind, "name": name})),
            _ => anyhow::bail!("resource must be given as <id>=<type>[=<name>], got '{spec}'"),
        }
    }
    Ok(Value::Array(resources))
}

pub async fn run(client: &ApiClient, command: PlanCommand) -> anyhow::Result<()> {
    match command {
        PlanCommand::List { opts, detailed } => {
            let plans = client.plans.list(detailed, &opts.to_params()).await?;
            print_list(&plans, LIST_FIELDS);
        }
        PlanCommand::Show { plan } => {
            let plan = find_resource(&client.plans, &plan).await?;
            print_resource(&plan);
        }
        PlanCommand::Create {
            name,
            provider_id,
            resources,
            parameters,
            description,
        } => {
            let resources = parse_plan_resources(&resources)?;
            let parameters = parse_json_arg(parameters.as_deref(), "--parameters")?;
            let plan = client
                .plans
                .create(
                    &name,
                    &provider_id,
                    resources,
                    parameters,
                    description.as_deref(),
                )
                .await?;
            print_resource(&plan);
        }
        PlanCommand::Update {
            plan_id,
            name,
            description,
            resources,
            status,
        } => {
            let mut data = serde_json::Map::new();
            if let Some(name) = name {
                data.insert("name".to_string(), json!(name));
            }
            if let Some(description) = description {
                data.insert("description".to_string(), json!(description));
            }
            if !resources.is_empty() {
                data.insert("resources".to_string(), parse_plan_resources(&resources)?);
            }
            if let Some(status) = status {
                data.insert("status".to_string(), json!(status));
            }
            if let Some(updated) = client.plans.update(&plan_id, Value::Object(data)).await? {
                print_resource(&updated);
            }
        }
        PlanCommand::Delete { plans } => {
            let mut failure_count = 0;
            for token in &plans {
                let result: crate::Result<()> = async {
                    let plan = find_resource(&client.plans, token).await?;
                    client.plans.delete(&plan.id()?).await
                }
                .await;
                match result {
                    Ok(()) => {}
                    Err(err) if err.is_not_found() => {
                        failure_count += 1;
                        eprintln!("Failed to delete '{token}'; plan not found");
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            batch_outcome(plans.len(), failure_count, "delete", "plan")?;
        }
    }
    Ok(())
}
