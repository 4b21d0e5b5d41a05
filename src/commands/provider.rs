//! Provider subcommands

use clap::Subcommand;

use super::output::{print_list, print_resource};
use super::ListOpts;
use crate::api::ApiClient;
use crate::resource::find_resource;

#[derive(Debug, Subcommand)]
pub enum ProviderCommand {
    /// List protection providers
    List {
        #[command(flatten)]
        opts: ListOpts,
    },
    /// Show provider details
    Show {
        /// Name or ID of the provider
        provider: String,
    },
}

const LIST_FIELDS: &[&str] = &["id", "name", "description"];

pub async fn run(client: &ApiClient, command: ProviderCommand) -> anyhow::Result<()> {
    match command {
        ProviderCommand::List { opts } => {
            let providers = client.providers.list(false, &opts.to_params()).await?;
            print_list(&providers, LIST_FIELDS);
        }
        ProviderCommand::Show { provider } => {
            let provider = find_resource(&client.providers, &provider).await?;
            print_resource(&provider);
        }
    }
    Ok(())
}
