use anyhow::{anyhow, Result};
use clap::Args;
use congress_lib::{CongressClient, ResponseFormat};

use crate::output::{print_json, spinner};

#[derive(Args)]
pub struct GetArgs {
    /// Endpoint path relative to the API version, e.g. congress/118 or bill/117/hr/3076/actions
    pub endpoint: String,

    /// Query parameter as key=value; repeatable
    #[arg(long = "param", short = 'p')]
    pub params: Vec<String>,

    /// Walk every page and print the combined item list
    #[arg(long, conflicts_with = "xml")]
    pub all: bool,

    /// Print the raw XML response instead of JSON
    #[arg(long)]
    pub xml: bool,
}

pub async fn run(args: &GetArgs, client: &CongressClient) -> Result<()> {
    let params = parse_params(&args.params)?;
    let endpoint = args.endpoint.trim_matches('/');

    if args.xml {
        let body = client
            .source()
            .get_text(endpoint, &params, ResponseFormat::Xml)
            .await?;
        println!("{}", body);
    } else if args.all {
        let pb = spinner(format!("walking {}...", endpoint));
        let items = client.get_all(endpoint, &params).await;
        pb.finish_and_clear();
        print_json(&items?);
    } else {
        print_json(&client.get(endpoint, &params).await?);
    }
    Ok(())
}

fn parse_params(raw: &[String]) -> Result<Vec<(String, String)>> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.trim().to_string(), v.to_string()))
                .filter(|(k, _)| !k.is_empty())
                .ok_or_else(|| anyhow!("expected key=value, got '{}'", pair))
        })
        .collect()
}
