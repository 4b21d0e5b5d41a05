//! Verification subcommands

use clap::Subcommand;

use super::output::{print_list, print_resource};
use super::{parse_json_arg, ListOpts};
use crate::api::ApiClient;
use crate::resource::find_resource;

#[derive(Debug, Subcommand)]
pub enum VerificationCommand {
    /// List verifications
    List {
        #[command(flatten)]
        opts: ListOpts,
    },
    /// Show verification details
    Show {
        /// ID of the verification
        verification: String,
    },
    /// Verify a checkpoint
    Create {
        /// ID of the provider holding the checkpoint
        provider_id: String,
        /// ID of the checkpoint to verify
        checkpoint_id: String,
        /// Verification parameters as a JSON document
        #[arg(long)]
        parameters: Option<String>,
    },
}

const LIST_FIELDS: &[&str] = &[
    "id",
    "project_id",
    "provider_id",
    "checkpoint_id",
    "parameters",
    "status",
];

pub async fn run(client: &ApiClient, command: VerificationCommand) -> anyhow::Result<()> {
    match command {
        VerificationCommand::List { opts } => {
            let verifications = client
                .verifications
                .list(false, &opts.to_params())
                .await?;
            print_list(&verifications, LIST_FIELDS);
        }
        VerificationCommand::Show { verification } => {
            let verification = find_resource(&client.verifications, &verification).await?;
            print_resource(&verification);
        }
        VerificationCommand::Create {
            provider_id,
            checkpoint_id,
            parameters,
        } => {
            let parameters = parse_json_arg(parameters.as_deref(), "--parameters")?;
            let verification = client
                .verifications
                .create(&provider_id, &checkpoint_id, parameters)
                .await?;
            print_resource(&verification);
        }
    }
    Ok(())
}
