//! Service worker subcommands (admin surface)

use clap::Subcommand;

use super::output::{print_list, print_resource};
use crate::api::ApiClient;

#[derive(Debug, Subcommand)]
pub enum ServiceCommand {
    /// List protection service workers
    List {
        /// Filter by host name
        #[arg(long)]
        host: Option<String>,
        /// Filter by service binary
        #[arg(long)]
        binary: Option<String>,
    },
    /// Enable a service worker
    Enable {
        /// ID of the service
        service_id: String,
    },
    /// Disable a service worker
    Disable {
        /// ID of the service
        service_id: String,
        /// Record why the service is being disabled
        #[arg(long)]
        reason: Option<String>,
    },
}

const LIST_FIELDS: &[&str] = &[
    "id",
    "binary",
    "host",
    "status",
    "state",
    "updated_at",
    "disabled_reason",
];

pub async fn run(client: &ApiClient, command: ServiceCommand) -> anyhow::Result<()> {
    match command {
        ServiceCommand::List { host, binary } => {
            let services = client
                .services
                .list(host.as_deref(), binary.as_deref())
                .await?;
            print_list(&services, LIST_FIELDS);
        }
        ServiceCommand::Enable { service_id } => {
            if let Some(service) = client.services.enable(&service_id).await? {
                print_resource(&service);
            }
        }
        ServiceCommand::Disable { service_id, reason } => {
            let updated = match reason {
                Some(reason) => {
                    client
                        .services
                        .disable_log_reason(&service_id, &reason)
                        .await?
                }
                None => client.services.disable(&service_id).await?,
            };
            if let Some(service) = updated {
                print_resource(&service);
            }
        }
    }
    Ok(())
}
