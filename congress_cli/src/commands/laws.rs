use anyhow::Result;
use clap::Args;
use congress_lib::{CongressClient, LawQuery};

use super::parse_law_type;
use crate::output::{print_json, spinner};

#[derive(Args)]
pub struct LawsArgs {
    pub congress: u32,

    /// public or private
    #[arg(long)]
    pub law_type: Option<String>,
}

pub async fn run(args: &LawsArgs, client: &CongressClient) -> Result<()> {
    let mut query = LawQuery::new(args.congress);
    if let Some(law_type) = &args.law_type {
        query = query.with_law_type(parse_law_type(law_type)?);
    }

    let pb = spinner(format!("gathering laws of the {}th congress...", args.congress));
    let laws = client.gather_laws(&query).await;
    pb.finish_and_clear();

    let laws = laws?;
    eprintln!("{} laws", laws.len());
    print_json(&laws);
    Ok(())
}
