//! Checkpoint subcommands

use clap::Subcommand;

use super::output::{print_list, print_resource};
use super::{batch_outcome, parse_json_arg, ListOpts};
use crate::api::ApiClient;
use crate::error::Error;
use crate::resource::find_resource;

#[derive(Debug, Subcommand)]
pub enum CheckpointCommand {
    /// List checkpoints of a provider
    List {
        /// ID of the provider the checkpoints belong to
        provider_id: String,
        /// Filter results by the protecting plan
        #[arg(long)]
        plan_id: Option<String>,
        #[command(flatten)]
        opts: ListOpts,
    },
    /// Show checkpoint details
    Show {
        provider_id: String,
        /// Name or ID of the checkpoint
        checkpoint: String,
    },
    /// Create a checkpoint from a plan
    Create {
        provider_id: String,
        plan_id: String,
        /// Extra checkpoint metadata as a JSON document
        #[arg(long)]
        extra_info: Option<String>,
    },
    /// Delete one or more checkpoints
    Delete {
        provider_id: String,
        /// Name or ID of the checkpoint(s)
        #[arg(required = true)]
        checkpoints: Vec<String>,
    },
    /// Reset the state of one or more checkpoints (admin only)
    ResetState {
        provider_id: String,
        /// ID of the checkpoint(s)
        #[arg(required = true)]
        checkpoints: Vec<String>,
        /// Reset to "available" instead of "error"
        #[arg(long)]
        available: bool,
    },
}

const LIST_FIELDS: &[&str] = &["id", "project_id", "status", "protection_plan", "created_at"];

pub async fn run(client: &ApiClient, command: CheckpointCommand) -> anyhow::Result<()> {
    match command {
        CheckpointCommand::List {
            provider_id,
            plan_id,
            opts,
        } => {
            let mut params = opts.to_params();
            if let Some(plan_id) = plan_id {
                params = params.filter("plan_id", &plan_id);
            }
            let checkpoints = client.checkpoints.list(&provider_id, &params).await?;
            print_list(&checkpoints, LIST_FIELDS);
        }
        CheckpointCommand::Show {
            provider_id,
            checkpoint,
        } => {
            let scoped = client.checkpoints.scoped(&provider_id);
            let checkpoint = find_resource(&scoped, &checkpoint).await?;
            print_resource(&checkpoint);
        }
        CheckpointCommand::Create {
            provider_id,
            plan_id,
            extra_info,
        } => {
            let extra_info = match extra_info {
                Some(raw) => Some(parse_json_arg(Some(&raw), "--extra-info")?),
                None => None,
            };
            let checkpoint = client
                .checkpoints
                .create(&provider_id, &plan_id, extra_info)
                .await?;
            print_resource(&checkpoint);
        }
        CheckpointCommand::Delete {
            provider_id,
            checkpoints,
        } => {
            let mut failure_count = 0;
            for token in &checkpoints {
                let scoped = client.checkpoints.scoped(&provider_id);
                let result: crate::Result<()> = async {
                    let checkpoint = find_resource(&scoped, token).await?;
                    client
                        .checkpoints
                        .delete(&provider_id, &checkpoint.id()?)
                        .await
                }
                .await;
                match result {
                    Ok(()) => {}
                    Err(err) if err.is_not_found() => {
                        failure_count += 1;
                        eprintln!("Failed to delete '{token}'; checkpoint not found");
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            batch_outcome(checkpoints.len(), failure_count, "delete", "checkpoint")?;
        }
        CheckpointCommand::ResetState {
            provider_id,
            checkpoints,
            available,
        } => {
            let state = if available { "available" } else { "error" };
            let mut failure_count = 0;
            for checkpoint_id in &checkpoints {
                match client
                    .checkpoints
                    .reset_state(&provider_id, checkpoint_id, state)
                    .await
                {
                    Ok(_) => {}
                    Err(err) if err.is_not_found() => {
                        failure_count += 1;
                        eprintln!("Failed to reset state of '{checkpoint_id}'; checkpoint not found");
                    }
                    Err(Error::Transport { status: 403, .. }) => {
                        failure_count += 1;
                        eprintln!("Failed to reset state of '{checkpoint_id}'; not allowed");
                    }
                    Err(Error::Transport { status: 400, .. }) => {
                        failure_count += 1;
                        eprintln!(
                            "Failed to reset state of '{checkpoint_id}'; invalid input or state"
                        );
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            batch_outcome(checkpoints.len(), failure_count, "reset", "checkpoint")?;
        }
    }
    Ok(())
}
