use anyhow::Result;
use clap::Args;
use congress_lib::CongressClient;

use crate::output::{print_json, spinner};

#[derive(Args)]
pub struct CongressArgs {
    /// Congress number (e.g. 118); omit for the current congress
    pub number: Option<u32>,
}

pub async fn run(args: &CongressArgs, client: &CongressClient) -> Result<()> {
    let congress = match args.number {
        Some(number) => client.get_congress_details(number).await?,
        None => client.get_current_congress().await?,
    };
    print_json(&congress);
    Ok(())
}

pub async fn run_all(client: &CongressClient) -> Result<()> {
    let pb = spinner("fetching congresses...");
    let congresses = client.gather_congresses().await;
    pb.finish_and_clear();

    let congresses = congresses?;
    eprintln!("{} congresses", congresses.len());
    print_json(&congresses);
    Ok(())
}
