use super::{common::ListParams, Query};

/// Lists daily Congressional Record issues, filtered by publish year, month, and day.
#[derive(Debug, Clone, Default)]
pub struct CongressionalRecordQuery {
    pub common: ListParams,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl CongressionalRecordQuery {
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }
}

impl Query for CongressionalRecordQuery {
    fn endpoint(&self) -> String {
        "congressional-record".to_string()
    }

    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut params = self.common.to_query_pairs();
        if let Some(year) = self.year {
            params.push(("y".to_string(), year.to_string()));
        }
        if let Some(month) = self.month {
            params.push(("m".to_string(), month.to_string()));
        }
        if let Some(day) = self.day {
            params.push(("d".to_string(), day.to_string()));
        }
        params
    }

    fn get_common(&mut self) -> &mut ListParams {
        &mut self.common
    }
}
