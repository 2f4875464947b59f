mod commands;
mod output;

use anyhow::Result;
use backoffice_api::{Client, ClientConfig};
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "backoffice")]
#[command(about = "Build filters and query strings for the backoffice REST API, and query it")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL (overrides BACKOFFICE_API_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate JSON search criteria into a filter expression
    Filter(commands::filter::FilterArgs),
    /// Build a query string from options
    Query(commands::query::QueryArgs),
    /// List records of an entity
    List(commands::list::ListArgs),
    /// Count records of an entity
    Count(commands::count::CountArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("backoffice=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    let client = Client::with_config(config);

    match &cli.command {
        Commands::Filter(args) => commands::filter::run(args)?,
        Commands::Query(args) => commands::query::run(args)?,
        Commands::List(args) => commands::list::run(args, &client, &format).await?,
        Commands::Count(args) => commands::count::run(args, &client).await?,
    }

    Ok(())
}
