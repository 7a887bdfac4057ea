use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tw_judicial::{JudicialClient, service_window};

#[derive(Debug, Parser)]
#[command(
    name = "judicial-cli",
    version,
    about = "Small async CLI for querying the Judicial Yuan judgment open-data API"
)]
struct Cli {
    /// Base URL for the API. Defaults to https://data.judicial.gov.tw/.
    #[arg(long, env = "JUDICIAL_BASE_URL")]
    base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Emit compact JSON instead of pretty-printed output.
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Exchange credentials for a token and print it.
    Auth(CredentialArgs),
    /// List the daily batches of changed document identifiers.
    List(TokenArgs),
    /// Fetch one judgment document.
    Doc {
        /// Document identifier (for example: "TPBA,113,訴,501,20240808,1").
        identifier: String,

        #[command(flatten)]
        auth: TokenArgs,
    },
}

#[derive(Debug, Args)]
struct CredentialArgs {
    /// Account name issued by the Judicial Yuan.
    #[arg(long, env = "JUDICIAL_USER")]
    user: Option<String>,

    /// Account password.
    #[arg(long, env = "JUDICIAL_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[derive(Debug, Args)]
struct TokenArgs {
    /// Token from a previous `auth` call. Credentials are used when absent.
    #[arg(long, env = "JUDICIAL_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(flatten)]
    credentials: CredentialArgs,
}

/// Entry point for the async CLI.
///
/// Parses command-line arguments, builds the client, dispatches subcommands,
/// and prints JSON output.
#[tokio::main]
async fn main() -> Result<()> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if !service_window::in_service_window() {
        eprintln!(
            "warning: the service only answers between 00:00 and 06:00 Taipei time (current hour {:02})",
            service_window::taipei_hour_now()
        );
    }

    let client = match &cli.base_url {
        Some(url) => JudicialClient::new(url)
            .with_context(|| format!("failed to create client with base URL '{url}'"))?,
        None => JudicialClient::from_default_server()
            .context("failed to create client for the default server")?,
    }
    .with_timeout(Duration::from_secs(cli.timeout_secs));

    match &cli.command {
        Command::Auth(credentials) => {
            let token = authenticate(&client, credentials).await?;
            println!("{token}");
        }
        Command::List(args) => {
            let token = resolve_token(&client, args).await?;
            let batches = client
                .list_changes(&token)
                .await
                .context("failed to list changed documents")?;
            print_json(&batches, cli.compact)?;
        }
        Command::Doc { identifier, auth } => {
            let token = resolve_token(&client, auth).await?;
            let document = client
                .get_document(&token, identifier)
                .await
                .with_context(|| format!("failed to fetch document '{identifier}'"))?;
            print_json(&document, cli.compact)?;
        }
    }

    Ok(())
}

/// Authenticates with explicit or environment-supplied credentials.
async fn authenticate(client: &JudicialClient, credentials: &CredentialArgs) -> Result<String> {
    let (Some(user), Some(password)) = (&credentials.user, &credentials.password) else {
        bail!("set --user/--password or JUDICIAL_USER/JUDICIAL_PASSWORD");
    };
    client
        .authenticate(user, password)
        .await
        .context("authentication failed")
}

/// Uses `--token` when given, otherwise authenticates first.
async fn resolve_token(client: &JudicialClient, args: &TokenArgs) -> Result<String> {
    match &args.token {
        Some(token) => Ok(token.clone()),
        None => authenticate(client, &args.credentials).await,
    }
}

/// Prints a value as JSON, either compact or pretty-formatted.
fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("Failed to render JSON")?;
    println!("{rendered}");
    Ok(())
}
