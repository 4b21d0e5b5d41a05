//! Trigger subcommands

use clap::Subcommand;
use serde_json::json;

use super::output::{print_list, print_resource};
use super::{batch_outcome, parse_json_arg, ListOpts};
use crate::api::ApiClient;
use crate::resource::find_resource;

#[derive(Debug, Subcommand)]
pub enum TriggerCommand {
    /// List triggers
    List {
        #[command(flatten)]
        opts: ListOpts,
        /// Show detailed trigger info
        #[arg(long)]
        detailed: bool,
    },
    /// Show trigger details
    Show {
        /// Name or ID of the trigger
        trigger: String,
    },
    /// Create a trigger
    Create {
        /// Name of the trigger
        name: String,
        /// Type of the trigger (e.g. time)
        #[arg(value_name = "TYPE")]
        trigger_type: String,
        /// Trigger properties as a JSON document, e.g.
        /// '{"format":"crontab","pattern":"0 10 * * *","window":30}'
        #[arg(long, required = true)]
        properties: String,
    },
    /// Update name or properties of a trigger
    Update {
        /// ID of the trigger to update
        trigger_id: String,
        #[arg(long)]
        name: Option<String>,
        /// Replacement properties as a JSON document
        #[arg(long)]
        properties: Option<String>,
    },
    /// Delete one or more triggers
    Delete {
        /// Name or ID of the trigger(s)
        #[arg(required = true)]
        triggers: Vec<String>,
    },
}

const LIST_FIELDS: &[&str] = &["id", "name", "type", "properties"];

pub async fn run(client: &ApiClient, command: TriggerCommand) -> anyhow::Result<()> {
    match command {
        TriggerCommand::List { opts, detailed } => {
            let triggers = client.triggers.list(detailed, &opts.to_params()).await?;
            print_list(&triggers, LIST_FIELDS);
        }
        TriggerCommand::Show { trigger } => {
            let trigger = find_resource(&client.triggers, &trigger).await?;
            print_resource(&trigger);
        }
        TriggerCommand::Create {
            name,
            trigger_type,
            properties,
        } => {
            let properties = parse_json_arg(Some(&properties), "--properties")?;
            let trigger = client
                .triggers
                .create(&name, &trigger_type, properties)
                .await?;
            print_resource(&trigger);
        }
        TriggerCommand::Update {
            trigger_id,
            name,
            properties,
        } => {
            let mut data = serde_json::Map::new();
            if let Some(name) = name {
                data.insert("name".to_string(), json!(name));
            }
            if let Some(properties) = properties {
                data.insert(
                    "properties".to_string(),
                    parse_json_arg(Some(&properties), "--properties")?,
                );
            }
            if let Some(updated) = client
                .triggers
                .update(&trigger_id, serde_json::Value::Object(data))
                .await?
            {
                print_resource(&updated);
            }
        }
        TriggerCommand::Delete { triggers } => {
            let mut failure_count = 0;
            for token in &triggers {
                let result: crate::Result<()> = async {
                    let trigger = find_resource(&client.triggers, token).await?;
                    client.triggers.delete(&trigger.id()?).await
                }
                .await;
                match result {
                    Ok(()) => {}
                    Err(err) if err.is_not_found() => {
                        failure_count += 1;
                        eprintln!("Failed to delete '{token}'; trigger not found");
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            batch_outcome(triggers.len(), failure_count, "delete", "trigger")?;
        }
    }
    Ok(())
}
