use anyhow::Result;
use clap::Args;
use congress_lib::model::BillId;
use congress_lib::{BillQuery, CongressClient, Query};

use super::{parse_bill_type, ListArgs};
use crate::output::{print_json, spinner};

#[derive(Args)]
pub struct BillsArgs {
    /// Only bills from this congress
    #[arg(long)]
    pub congress: Option<u32>,

    /// Bill type: hr, s, hjres, sjres, hconres, sconres, hres, sres (requires --congress)
    #[arg(long)]
    pub bill_type: Option<String>,

    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args)]
pub struct BillArgs {
    pub congress: u32,

    /// Bill type, e.g. hr or s
    pub bill_type: String,

    pub number: u32,

    /// Also fetch actions, amendments, committees, cosponsors, related bills,
    /// subjects, summaries, text versions, and titles
    #[arg(long)]
    pub details: bool,
}

pub async fn run(args: &BillArgs, client: &CongressClient) -> Result<()> {
    let id = BillId::new(args.congress, parse_bill_type(&args.bill_type)?, args.number);
    if args.details {
        let pb = spinner(format!("fetching {} with sub-resources...", id));
        let details = client.get_bill_details(id).await;
        pb.finish_and_clear();
        print_json(&details?);
    } else {
        print_json(&client.get_bill(id).await?);
    }
    Ok(())
}

pub async fn run_list(args: &BillsArgs, client: &CongressClient) -> Result<()> {
    let mut query = BillQuery {
        common: args.list.to_params(),
        ..BillQuery::default()
    };
    if let Some(congress) = args.congress {
        query = query.with_congress(congress);
    }
    if let Some(bill_type) = &args.bill_type {
        if args.congress.is_none() {
            anyhow::bail!("--bill-type needs --congress");
        }
        query = query.with_bill_type(parse_bill_type(bill_type)?);
    }

    let pb = spinner(format!("walking {}...", query.endpoint()));
    let bills = client.gather_bills(&query).await;
    pb.finish_and_clear();

    let bills = bills?;
    eprintln!("{} bills", bills.len());
    print_json(&bills);
    Ok(())
}
