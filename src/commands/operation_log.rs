//! Operation log subcommands

use clap::Subcommand;

use super::output::{print_list, print_resource};
use super::ListOpts;
use crate::api::ApiClient;
use crate::resource::find_resource;

#[derive(Debug, Subcommand)]
pub enum OperationLogCommand {
    /// List operation logs
    List {
        #[command(flatten)]
        opts: ListOpts,
    },
    /// Show operation log details
    Show {
        /// ID of the operation log
        operation_log: String,
    },
}

const LIST_FIELDS: &[&str] = &[
    "id",
    "operation_type",
    "checkpoint_id",
    "plan_id",
    "status",
    "started_at",
    "ended_at",
];

pub async fn run(client: &ApiClient, command: OperationLogCommand) -> anyhow::Result<()> {
    match command {
        OperationLogCommand::List { opts } => {
            let logs = client
                .operation_logs
                .list(false, &opts.to_params())
                .await?;
            print_list(&logs, LIST_FIELDS);
        }
        OperationLogCommand::Show { operation_log } => {
            let log = find_resource(&client.operation_logs, &operation_log).await?;
            print_resource(&log);
        }
    }
    Ok(())
}
