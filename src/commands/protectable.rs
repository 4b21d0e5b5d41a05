//! Protectable subcommands

use std::collections::BTreeMap;

use clap::Subcommand;

use super::output::{print_list, print_resource};
use super::ListOpts;
use crate::api::ApiClient;

#[derive(Debug, Subcommand)]
pub enum ProtectableCommand {
    /// List protectable resource types
    List,
    /// Show a protectable type and what it depends on
    Show {
        /// The protectable type (e.g. OS::Nova::Server)
        protectable_type: String,
    },
    /// List instances of a protectable type
    InstanceList {
        /// The protectable type to enumerate
        protectable_type: String,
        /// Instance parameters as key=value; repeatable
        #[arg(long = "parameter")]
        parameters: Vec<String>,
        #[command(flatten)]
        opts: ListOpts,
    },
    /// Show one protectable instance
    InstanceShow {
        protectable_type: String,
        /// ID of the instance
        protectable_id: String,
        /// Instance parameters as key=value; repeatable
        #[arg(long = "parameter")]
        parameters: Vec<String>,
    },
}

const TYPE_FIELDS: &[&str] = &["protectable_type"];
const INSTANCE_FIELDS: &[&str] = &["id", "type", "name", "dependent_resources"];

fn parse_key_values(raw: &[String]) -> anyhow::Result<BTreeMap<String, String>> {
    let mut parsed = BTreeMap::new();
    for entry in raw {
        let Some((key, value)) = entry.split_once('=') else {
            anyhow::bail!("parameter must be given as key=value, got '{entry}'");
        };
        parsed.insert(key.to_string(), value.to_string());
    }
    Ok(parsed)
}

pub async fn run(client: &ApiClient, command: ProtectableCommand) -> anyhow::Result<()> {
    match command {
        ProtectableCommand::List => {
            let types = client.protectables.list().await?;
            print_list(&types, TYPE_FIELDS);
        }
        ProtectableCommand::Show { protectable_type } => {
            let protectable = client.protectables.get(&protectable_type, None).await?;
            print_resource(&protectable);
        }
        ProtectableCommand::InstanceList {
            protectable_type,
            parameters,
            opts,
        } => {
            let mut params = opts.to_params();
            for (key, value) in parse_key_values(&parameters)? {
                params.filters.insert(key, value);
            }
            let instances = client
                .protectables
                .list_instances(&protectable_type, &params)
                .await?;
            print_list(&instances, INSTANCE_FIELDS);
        }
        ProtectableCommand::InstanceShow {
            protectable_type,
            protectable_id,
            parameters,
        } => {
            let search_opts = parse_key_values(&parameters)?;
            let instance = client
                .protectables
                .get_instance(&protectable_type, &protectable_id, &search_opts, None)
                .await?;
            print_resource(&instance);
        }
    }
    Ok(())
}
