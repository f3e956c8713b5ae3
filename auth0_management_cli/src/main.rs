mod commands;
mod output;

use anyhow::{Context, Result};
use auth0_management::{Connection, Diagnostics, Error, ManagementClient};
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "auth0-mgmt")]
#[command(about = "Query an Auth0 tenant through the Management API")]
struct Cli {
    /// Output format: table, markdown or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Tenant domain or full API base URL (defaults to $AUTH0_DOMAIN)
    #[arg(long, global = true)]
    domain: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List or look up users
    Users(commands::users::UsersArgs),
    /// List roles and their members
    Roles(commands::roles::RolesArgs),
    /// List organization members
    Orgs(commands::orgs::OrgsArgs),
    /// List tenant log events
    Logs(commands::logs::LogsArgs),
}

fn build_client(domain: Option<&str>) -> Result<ManagementClient> {
    let domain = match domain {
        Some(domain) => domain.to_string(),
        None => std::env::var("AUTH0_DOMAIN").context("AUTH0_DOMAIN is not set")?,
    };
    let token =
        std::env::var("AUTH0_MANAGEMENT_TOKEN").context("AUTH0_MANAGEMENT_TOKEN is not set")?;

    let diagnostics = match std::env::var("AUTH0_SUPPRESS_DIAGNOSTICS").as_deref() {
        Ok("1") | Ok("true") => Diagnostics::Suppressed,
        _ => Diagnostics::Default,
    };

    tracing::debug!(%domain, ?diagnostics, "Connecting to management API");
    let connection = Connection::builder(&domain, token)
        .diagnostics(diagnostics)
        .build()?;
    Ok(ManagementClient::from_connection(connection))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("auth0_management=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let client = build_client(cli.domain.as_deref())?;

    let result = match &cli.command {
        Commands::Users(args) => commands::users::run(args, &client, &format).await,
        Commands::Roles(args) => commands::roles::run(args, &client, &format).await,
        Commands::Orgs(args) => commands::orgs::run(args, &client, &format).await,
        Commands::Logs(args) => commands::logs::run(args, &client, &format).await,
    };

    if let Err(err) = &result {
        report_rate_limit(err);
    }
    result
}

/// Tells the user when they may try again. Nothing is retried automatically.
fn report_rate_limit(err: &anyhow::Error) {
    let Some(Error::RateLimit(limited)) = err.downcast_ref::<Error>() else {
        return;
    };
    match limited.rate_limit.and_then(|info| info.reset_at()) {
        Some(reset_at) => eprintln!(
            "Rate limit reached; the window resets at {}",
            reset_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        None => eprintln!("Rate limit reached; try again later"),
    }
}
