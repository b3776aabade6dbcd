use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use congress_lib::CongressClient;

use crate::output::{print_json, spinner};

#[derive(Args)]
pub struct RecordsArgs {
    /// First publish date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: NaiveDate,

    /// Last publish date, inclusive (YYYY-MM-DD); defaults to --from
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

pub async fn run(args: &RecordsArgs, client: &CongressClient) -> Result<()> {
    let to = args.to.unwrap_or(args.from);
    let pb = spinner(format!("gathering records {} to {}...", args.from, to));
    let records = client.gather_congressional_records(args.from, to).await;
    pb.finish_and_clear();

    let records = records?;
    eprintln!("{} issues", records.len());
    print_json(&records);
    Ok(())
}
