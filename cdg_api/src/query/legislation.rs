//! Query builders for congress, bill, amendment, and law list endpoints.

use crate::types::{AmendmentType, BillType, LawType};

use super::{common::ListParams, Query};

/// Lists congresses (`congress`).
#[derive(Debug, Clone, Default)]
pub struct CongressQuery {
    pub common: ListParams,
}

impl Query for CongressQuery {
    fn endpoint(&self) -> String {
        "congress".to_string()
    }

    fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.common.to_query_pairs()
    }

    fn get_common(&mut self) -> &mut ListParams {
        &mut self.common
    }
}

/// Lists bills, optionally narrowed to one congress and bill type.
///
/// The bill type only narrows the path when a congress is also set, since
/// the API has no `bill/{type}` route.
#[derive(Debug, Clone, Default)]
pub struct BillQuery {
    pub common: ListParams,
    pub congress: Option<u32>,
    pub bill_type: Option<BillType>,
}

impl BillQuery {
    pub fn with_congress(mut self, congress: u32) -> Self {
        self.congress = Some(congress);
        self
    }

    pub fn with_bill_type(mut self, bill_type: BillType) -> Self {
        self.bill_type = Some(bill_type);
        self
    }
}

impl Query for BillQuery {
    fn endpoint(&self) -> String {
        match (self.congress, self.bill_type) {
            (Some(congress), Some(bill_type)) => {
                format!("bill/{}/{}", congress, bill_type.path_segment())
            }
            (Some(congress), None) => format!("bill/{}", congress),
            (None, _) => "bill".to_string(),
        }
    }

    fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.common.to_query_pairs()
    }

    fn get_common(&mut self) -> &mut ListParams {
        &mut self.common
    }
}

/// Lists amendments, optionally narrowed to one congress and amendment type.
#[derive(Debug, Clone, Default)]
pub struct AmendmentQuery {
    pub common: ListParams,
    pub congress: Option<u32>,
    pub amendment_type: Option<AmendmentType>,
}

impl AmendmentQuery {
    pub fn with_congress(mut self, congress: u32) -> Self {
        self.congress = Some(congress);
        self
    }

    pub fn with_amendment_type(mut self, amendment_type: AmendmentType) -> Self {
        self.amendment_type = Some(amendment_type);
        self
    }
}

impl Query for AmendmentQuery {
    fn endpoint(&self) -> String {
        match (self.congress, self.amendment_type) {
            (Some(congress), Some(t)) => format!("amendment/{}/{}", congress, t.path_segment()),
            (Some(congress), None) => format!("amendment/{}", congress),
            (None, _) => "amendment".to_string(),
        }
    }

    fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.common.to_query_pairs()
    }

    fn get_common(&mut self) -> &mut ListParams {
        &mut self.common
    }
}

/// Lists bills that became law in one congress.
#[derive(Debug, Clone)]
pub struct LawQuery {
    pub common: ListParams,
    pub congress: u32,
    pub law_type: Option<LawType>,
}

impl LawQuery {
    pub fn new(congress: u32) -> Self {
        Self {
            common: ListParams::default(),
            congress,
            law_type: None,
        }
    }

    pub fn with_law_type(mut self, law_type: LawType) -> Self {
        self.law_type = Some(law_type);
        self
    }
}

impl Query for LawQuery {
    fn endpoint(&self) -> String {
        match self.law_type {
            Some(t) => format!("law/{}/{}", self.congress, t.path_segment()),
            None => format!("law/{}", self.congress),
        }
    }

    fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.common.to_query_pairs()
    }

    fn get_common(&mut self) -> &mut ListParams {
        &mut self.common
    }
}
