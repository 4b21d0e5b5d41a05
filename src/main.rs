use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;

use guardctl::api::auth::{Credentials, PasswordAuth};
use guardctl::api::ApiClient;
use guardctl::commands;
use guardctl::config::Config;

/// Version injected at compile time via GUARDCTL_VERSION env var (set by
/// CI/CD), or "dev" for local builds.
pub const VERSION: &str = match option_env!("GUARDCTL_VERSION") {
    Some(v) => v,
    None => "dev",
};

/// Command-line client for the Guardian data protection service
#[derive(Parser, Debug)]
#[command(name = "guardctl", version = VERSION, about, long_about = None)]
struct Args {
    /// Data protection service endpoint
    #[arg(long, env = "GUARDIAN_ENDPOINT")]
    endpoint: Option<String>,

    /// Identity service URL
    #[arg(long, env = "GUARDIAN_AUTH_URL")]
    auth_url: Option<String>,

    /// Identity user name
    #[arg(long, env = "GUARDIAN_USERNAME")]
    username: Option<String>,

    /// Identity password
    #[arg(long, env = "GUARDIAN_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Project to scope requests to
    #[arg(long, env = "GUARDIAN_PROJECT_NAME")]
    project: Option<String>,

    /// Pre-acquired token (skips the identity service)
    #[arg(long, env = "GUARDIAN_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Project ID the token is scoped to; required with --token
    #[arg(long, env = "GUARDIAN_PROJECT_ID", requires = "token")]
    project_id: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Protection plans
    #[command(subcommand)]
    Plan(commands::plan::PlanCommand),
    /// Checkpoints taken from plans
    #[command(subcommand)]
    Checkpoint(commands::checkpoint::CheckpointCommand),
    /// Triggers firing scheduled operations
    #[command(subcommand)]
    Trigger(commands::trigger::TriggerCommand),
    /// Restore checkpoints onto a target
    #[command(subcommand)]
    Restore(commands::restore::RestoreCommand),
    /// Verify checkpoints
    #[command(subcommand)]
    Verification(commands::verification::VerificationCommand),
    /// Operations scheduled on triggers
    #[command(subcommand)]
    ScheduledOperation(commands::scheduled_operation::ScheduledOperationCommand),
    /// Logs of finished operations
    #[command(subcommand)]
    OperationLog(commands::operation_log::OperationLogCommand),
    /// Protection providers
    #[command(subcommand)]
    Provider(commands::provider::ProviderCommand),
    /// Protectable resource types and instances
    #[command(subcommand)]
    Protectable(commands::protectable::ProtectableCommand),
    /// Protection service workers (admin)
    #[command(subcommand)]
    Service(commands::service::ServiceCommand),
    /// Project quotas
    #[command(subcommand)]
    Quota(commands::quota::QuotaCommand),
    /// Quota classes
    #[command(subcommand)]
    QuotaClass(commands::quota::QuotaClassCommand),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(
    level: LogLevel,
    log_file: Option<&PathBuf>,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file);

            tracing_subscriber::fmt()
                .with_max_level(tracing_level)
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .init();

            tracing::info!("guardctl started with log level: {:?}", level);
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_max_level(tracing_level)
                .with_writer(std::io::stderr)
                .with_target(true)
                .init();
            Ok(None)
        }
    }
}

async fn build_client(args: &Args, config: &Config) -> Result<ApiClient> {
    let endpoint = config
        .effective_endpoint(args.endpoint.as_deref())
        .ok_or_else(|| {
            anyhow::anyhow!("no endpoint configured. Set GUARDIAN_ENDPOINT or use --endpoint")
        })?;

    let credentials = if let Some(token) = &args.token {
        let project_id = args.project_id.clone().unwrap_or_default();
        Credentials::from_token(token, &project_id)
    } else {
        let auth_url = config
            .effective_auth_url(args.auth_url.as_deref())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "no identity URL configured. Set GUARDIAN_AUTH_URL or use --auth-url"
                )
            })?;
        let username = config
            .effective_username(args.username.as_deref())
            .ok_or_else(|| {
                anyhow::anyhow!("no user name configured. Set GUARDIAN_USERNAME or use --username")
            })?;
        let password = args.password.clone().ok_or_else(|| {
            anyhow::anyhow!("no password supplied. Set GUARDIAN_PASSWORD or use --password")
        })?;
        let project_name = config
            .effective_project(args.project.as_deref())
            .ok_or_else(|| {
                anyhow::anyhow!("no project configured. Set GUARDIAN_PROJECT_NAME or use --project")
            })?;

        let bootstrap = reqwest::Client::builder()
            .user_agent(concat!("guardctl/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Credentials::password(
            &bootstrap,
            PasswordAuth {
                auth_url,
                username,
                password,
                project_name,
            },
        )
        .await?
    };

    Ok(ApiClient::new(&endpoint, credentials)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level, args.log_file.as_ref())?;

    let config = Config::load();
    let client = build_client(&args, &config).await?;

    match args.command {
        Command::Plan(cmd) => commands::plan::run(&client, cmd).await,
        Command::Checkpoint(cmd) => commands::checkpoint::run(&client, cmd).await,
        Command::Trigger(cmd) => commands::trigger::run(&client, cmd).await,
        Command::Restore(cmd) => commands::restore::run(&client, cmd).await,
        Command::Verification(cmd) => commands::verification::run(&client, cmd).await,
        Command::ScheduledOperation(cmd) => commands::scheduled_operation::run(&client, cmd).await,
        Command::OperationLog(cmd) => commands::operation_log::run(&client, cmd).await,
        Command::Provider(cmd) => commands::provider::run(&client, cmd).await,
        Command::Protectable(cmd) => commands::protectable::run(&client, cmd).await,
        Command::Service(cmd) => commands::service::run(&client, cmd).await,
        Command::Quota(cmd) => commands::quota::run(&client, cmd).await,
        Command::QuotaClass(cmd) => commands::quota::run_class(&client, cmd).await,
    }
}
