use anyhow::Result;
use clap::Args;
use congress_lib::model::AmendmentId;
use congress_lib::{AmendmentQuery, CongressClient, Query};

use super::{parse_amendment_type, ListArgs};
use crate::output::{print_json, spinner};

#[derive(Args)]
pub struct AmendmentsArgs {
    /// Only amendments from this congress
    #[arg(long)]
    pub congress: Option<u32>,

    /// Amendment type: hamdt, samdt, suamdt (requires --congress)
    #[arg(long)]
    pub amendment_type: Option<String>,

    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args)]
pub struct AmendmentArgs {
    pub congress: u32,

    /// Amendment type, e.g. samdt
    pub amendment_type: String,

    pub number: u32,
}

pub async fn run(args: &AmendmentArgs, client: &CongressClient) -> Result<()> {
    let id = AmendmentId::new(
        args.congress,
        parse_amendment_type(&args.amendment_type)?,
        args.number,
    );
    print_json(&client.get_amendment(id).await?);
    Ok(())
}

pub async fn run_list(args: &AmendmentsArgs, client: &CongressClient) -> Result<()> {
    let mut query = AmendmentQuery {
        common: args.list.to_params(),
        ..AmendmentQuery::default()
    };
    if let Some(congress) = args.congress {
        query = query.with_congress(congress);
    }
    if let Some(amendment_type) = &args.amendment_type {
        if args.congress.is_none() {
            anyhow::bail!("--amendment-type needs --congress");
        }
        query = query.with_amendment_type(parse_amendment_type(amendment_type)?);
    }

    let pb = spinner(format!("walking {}...", query.endpoint()));
    let amendments = client.gather_amendments(&query).await;
    pb.finish_and_clear();

    let amendments = amendments?;
    eprintln!("{} amendments", amendments.len());
    print_json(&amendments);
    Ok(())
}
