//! Restore subcommands

use clap::Subcommand;
use serde_json::json;

use super::output::{print_list, print_resource};
use super::{parse_json_arg, ListOpts};
use crate::api::ApiClient;
use crate::resource::find_resource;

#[derive(Debug, Subcommand)]
pub enum RestoreCommand {
    /// List restores
    List {
        #[command(flatten)]
        opts: ListOpts,
        /// Show detailed restore info
        #[arg(long)]
        detailed: bool,
    },
    /// Show restore details
    Show {
        /// ID of the restore
        restore: String,
    },
    /// Restore a checkpoint onto a target
    Create {
        /// ID of the provider holding the checkpoint
        provider_id: String,
        /// ID of the checkpoint to restore
        checkpoint_id: String,
        /// Keystone endpoint of the restore target
        #[arg(long)]
        restore_target: Option<String>,
        /// Username on the restore target
        #[arg(long, requires = "restore_target")]
        restore_username: Option<String>,
        /// Password on the restore target
        #[arg(long, requires = "restore_target")]
        restore_password: Option<String>,
        /// Restore parameters as a JSON document
        #[arg(long)]
        parameters: Option<String>,
    },
}

const LIST_FIELDS: &[&str] = &[
    "id",
    "project_id",
    "provider_id",
    "checkpoint_id",
    "restore_target",
    "status",
];

pub async fn run(client: &ApiClient, command: RestoreCommand) -> anyhow::Result<()> {
    match command {
        RestoreCommand::List { opts, detailed } => {
            let restores = client.restores.list(detailed, &opts.to_params()).await?;
            print_list(&restores, LIST_FIELDS);
        }
        RestoreCommand::Show { restore } => {
            let restore = find_resource(&client.restores, &restore).await?;
            print_resource(&restore);
        }
        RestoreCommand::Create {
            provider_id,
            checkpoint_id,
            restore_target,
            restore_username,
            restore_password,
            parameters,
        } => {
            let parameters = parse_json_arg(parameters.as_deref(), "--parameters")?;
            let restore_auth = restore_target.as_ref().map(|_| {
                json!({
                    "type": "password",
                    "username": restore_username,
                    "password": restore_password,
                })
            });
            let restore = client
                .restores
                .create(
                    &provider_id,
                    &checkpoint_id,
                    restore_target.as_deref(),
                    parameters,
                    restore_auth,
                )
                .await?;
            print_resource(&restore);
        }
    }
    Ok(())
}
