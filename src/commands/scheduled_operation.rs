//! Scheduled operation subcommands

use clap::Subcommand;

use super::output::{print_list, print_resource};
use super::{batch_outcome, parse_json_arg, ListOpts};
use crate::api::ApiClient;
use crate::resource::find_resource;

#[derive(Debug, Subcommand)]
pub enum ScheduledOperationCommand {
    /// List scheduled operations
    List {
        #[command(flatten)]
        opts: ListOpts,
    },
    /// Show scheduled operation details
    Show {
        /// Name or ID of the scheduled operation
        scheduled_operation: String,
    },
    /// Schedule an operation on a trigger
    Create {
        /// Name of the scheduled operation
        name: String,
        /// Operation type (e.g. protect)
        operation_type: String,
        /// ID of the trigger that fires the operation
        trigger_id: String,
        /// Operation definition as a JSON document, e.g.
        /// '{"provider_id":"...","plan_id":"..."}'
        #[arg(long, required = true)]
        operation_definition: String,
    },
    /// Delete one or more scheduled operations
    Delete {
        /// Name or ID of the scheduled operation(s)
        #[arg(required = true)]
        scheduled_operations: Vec<String>,
    },
}

const LIST_FIELDS: &[&str] = &[
    "id",
    "name",
    "operation_type",
    "trigger_id",
    "operation_definition",
];

pub async fn run(client: &ApiClient, command: ScheduledOperationCommand) -> anyhow::Result<()> {
    match command {
        ScheduledOperationCommand::List { opts } => {
            let operations = client
                .scheduled_operations
                .list(false, &opts.to_params())
                .await?;
            print_list(&operations, LIST_FIELDS);
        }
        ScheduledOperationCommand::Show {
            scheduled_operation,
        } => {
            let operation = find_resource(&client.scheduled_operations, &scheduled_operation).await?;
            print_resource(&operation);
        }
        ScheduledOperationCommand::Create {
            name,
            operation_type,
            trigger_id,
            operation_definition,
        } => {
            let definition = parse_json_arg(Some(&operation_definition), "--operation-definition")?;
            let operation = client
                .scheduled_operations
                .create(&name, &operation_type, &trigger_id, definition)
                .await?;
            print_resource(&operation);
        }
        ScheduledOperationCommand::Delete {
            scheduled_operations,
        } => {
            let mut failure_count = 0;
            for token in &scheduled_operations {
                let result: crate::Result<()> = async {
                    let operation = find_resource(&client.scheduled_operations, token).await?;
                    client.scheduled_operations.delete(&operation.id()?).await
                }
                .await;
                match result {
                    Ok(()) => {}
                    Err(err) if err.is_not_found() => {
                        failure_count += 1;
                        eprintln!("Failed to delete '{token}'; scheduled operation not found");
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            batch_outcome(
                scheduled_operations.len(),
                failure_count,
                "delete",
                "scheduled operation",
            )?;
        }
    }
    Ok(())
}
