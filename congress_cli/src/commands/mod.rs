//! CLI subcommand implementations.

pub mod amendments;
pub mod bills;
pub mod congresses;
pub mod laws;
pub mod raw;
pub mod records;

use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use congress_lib::model::{AmendmentType, BillType, LawType};
use congress_lib::{ListParams, SortDirection};

/// Update-date window and sort order shared by list subcommands.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only items updated on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Only items updated on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Sort by update date ascending instead of descending
    #[arg(long)]
    pub asc: bool,
}

impl ListArgs {
    pub fn to_params(&self) -> ListParams {
        ListParams {
            from_date_time: self.from.map(start_of_day),
            to_date_time: self.to.map(end_of_day),
            sort: self.asc.then_some(SortDirection::Asc),
            ..ListParams::default()
        }
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    let last = chrono::NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(chrono::NaiveTime::MIN);
    date.and_time(last).and_utc()
}

pub fn parse_bill_type(s: &str) -> Result<BillType> {
    s.parse()
        .map_err(|_| anyhow!("unknown bill type '{}' (expected one of hr, s, hjres, sjres, hconres, sconres, hres, sres)", s))
}

pub fn parse_amendment_type(s: &str) -> Result<AmendmentType> {
    s.parse()
        .map_err(|_| anyhow!("unknown amendment type '{}' (expected hamdt, samdt or suamdt)", s))
}

pub fn parse_law_type(s: &str) -> Result<LawType> {
    s.parse()
        .map_err(|_| anyhow!("unknown law type '{}' (expected public or private)", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bill_types_parse_case_insensitively() {
        assert_eq!(parse_bill_type("HR").unwrap(), BillType::Hr);
        assert_eq!(parse_bill_type("sjres").unwrap(), BillType::Sjres);
        assert!(parse_bill_type("bogus").is_err());
    }

    #[test]
    fn law_and_amendment_types() {
        assert_eq!(parse_law_type("pub").unwrap(), LawType::Public);
        assert_eq!(parse_amendment_type("samdt").unwrap(), AmendmentType::Samdt);
        assert!(parse_amendment_type("amdt").is_err());
    }

    #[test]
    fn list_args_cover_whole_days() {
        let args = ListArgs {
            from: NaiveDate::from_ymd_opt(2024, 1, 1),
            to: NaiveDate::from_ymd_opt(2024, 1, 31),
            asc: true,
        };
        let params = args.to_params();
        assert_eq!(
            params.from_date_time.unwrap().to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );
        assert_eq!(
            params.to_date_time.unwrap().to_rfc3339(),
            "2024-01-31T23:59:59+00:00"
        );
        assert_eq!(params.sort, Some(SortDirection::Asc));
        assert_eq!(params.offset, None);
    }
}
