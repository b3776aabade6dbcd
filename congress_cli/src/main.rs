mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use congress_lib::{ClientConfig, CongressClient, WalkConfig};

#[derive(Parser)]
#[command(name = "congress-data")]
#[command(about = "Fetch legislative data from the Congress.gov API as JSON")]
struct Cli {
    /// Stop list walks after this many pages
    #[arg(long, global = true)]
    max_pages: Option<usize>,

    /// Items requested per page (1-250)
    #[arg(long, global = true)]
    page_limit: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Every congress from the 1st through the current one
    Congresses,
    /// One congress, or the current one when no number is given
    Congress(commands::congresses::CongressArgs),
    /// List bills, optionally narrowed by congress and type
    Bills(commands::bills::BillsArgs),
    /// One bill, optionally with all of its sub-resources
    Bill(commands::bills::BillArgs),
    /// List amendments, optionally narrowed by congress and type
    Amendments(commands::amendments::AmendmentsArgs),
    /// One amendment
    Amendment(commands::amendments::AmendmentArgs),
    /// Laws enacted by a congress
    Laws(commands::laws::LawsArgs),
    /// Congressional Record issues published in a date range
    Records(commands::records::RecordsArgs),
    /// Raw JSON (or XML) from any endpoint
    Get(commands::raw::GetArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("congress_lib=info,cdg_api=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut walk = WalkConfig::from_env();
    if let Some(max_pages) = cli.max_pages {
        walk = walk.with_max_pages(max_pages);
    }
    if let Some(page_limit) = cli.page_limit {
        walk = walk.with_page_limit(page_limit);
    }
    let client = CongressClient::new(ClientConfig::from_env()?, walk)?;

    match &cli.command {
        Commands::Congresses => commands::congresses::run_all(&client).await?,
        Commands::Congress(args) => commands::congresses::run(args, &client).await?,
        Commands::Bills(args) => commands::bills::run_list(args, &client).await?,
        Commands::Bill(args) => commands::bills::run(args, &client).await?,
        Commands::Amendments(args) => commands::amendments::run_list(args, &client).await?,
        Commands::Amendment(args) => commands::amendments::run(args, &client).await?,
        Commands::Laws(args) => commands::laws::run(args, &client).await?,
        Commands::Records(args) => commands::records::run(args, &client).await?,
        Commands::Get(args) => commands::raw::run(args, &client).await?,
    }

    let summary = client.source().rate_limiter().tracker().summary();
    tracing::debug!(
        "{} request(s): {} ok, {} rate limited, {} failed",
        summary.requests_made,
        summary.requests_succeeded,
        summary.requests_rate_limited,
        summary.requests_failed
    );

    Ok(())
}
