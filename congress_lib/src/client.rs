//! High-level client returning typed records.
//!
//! Wraps a [`JsonSource`] (the rate-limited HTTP client in production, a stub
//! in tests) with the pagination walker and the response mapper. Single-object
//! accessors issue one request and do not retry; everything that walks a list
//! goes through [`PageWalker`] and gets its retry policy.

use chrono::{Datelike, NaiveDate};
use serde_json::Value;

use cdg_api::types::RequestInfo;
use cdg_api::{
    AmendmentQuery, BillQuery, ClientConfig, CongressionalRecordQuery, JsonSource, LawQuery, Query,
};

use crate::config::WalkConfig;
use crate::error::{CongressError, MalformedReason, MalformedRecordError};
use crate::mapper::{coerce, identity_hint, map_list, FromJson};
use crate::model::{
    Action, Amendment, AmendmentId, Bill, BillDetails, BillId, BoundCongressionalRecord,
    CommitteeMetadata, Congress, Law, RelatedBill, Sponsor, Subjects, Summary, TextVersion, Title,
};
use crate::paginate::PageWalker;

/// Congress.gov client producing domain records.
pub struct CongressClient<S: JsonSource = cdg_api::Client> {
    source: S,
    walk: WalkConfig,
}

impl CongressClient<cdg_api::Client> {
    pub fn new(config: ClientConfig, walk: WalkConfig) -> Result<Self, CongressError> {
        Ok(Self::with_source(cdg_api::Client::new(config)?, walk))
    }

    /// Reads both the HTTP and the walk configuration from the environment.
    pub fn from_env() -> Result<Self, CongressError> {
        Self::new(ClientConfig::from_env()?, WalkConfig::from_env())
    }
}

impl<S: JsonSource> CongressClient<S> {
    pub fn with_source(source: S, walk: WalkConfig) -> Self {
        Self { source, walk }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn walk_config(&self) -> &WalkConfig {
        &self.walk
    }

    /// One request, raw JSON.
    pub async fn get(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, CongressError> {
        Ok(self.source.get(endpoint, params).await?)
    }

    /// Every item of every page of a list endpoint, in order.
    pub async fn get_all(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Vec<Value>, CongressError> {
        Ok(self.walk(endpoint, params).collect_items().await?)
    }

    /// Page-by-page access to a list endpoint.
    pub fn walk(&self, endpoint: &str, params: &[(String, String)]) -> PageWalker<'_, S> {
        PageWalker::new(&self.source, endpoint, params, &self.walk)
    }

    pub async fn get_current_congress(&self) -> Result<Congress, CongressError> {
        self.detail("congress/current", "congress").await
    }

    pub async fn get_congress_details(&self, number: u32) -> Result<Congress, CongressError> {
        if number == 0 {
            return Err(CongressError::InvalidInput(
                "congress numbers start at 1".to_string(),
            ));
        }
        self.detail(&format!("congress/{}", number), "congress")
            .await
    }

    /// Every congress from the 1st through the current one, in number order.
    pub async fn gather_congresses(&self) -> Result<Vec<Congress>, CongressError> {
        let current = self.get_current_congress().await?.number;
        tracing::info!("Gathering congresses 1 through {}", current);

        let mut congresses = Vec::with_capacity(current as usize);
        for number in 1..=current {
            congresses.push(self.get_congress_details(number).await?);
            if number % 25 == 0 {
                tracing::debug!("Fetched {}/{} congresses", number, current);
            }
        }
        Ok(congresses)
    }

    pub async fn get_bill(&self, id: BillId) -> Result<Bill, CongressError> {
        self.detail(&id.path(), "bill").await
    }

    pub async fn gather_bills(&self, query: &BillQuery) -> Result<Vec<Bill>, CongressError> {
        self.gather(query).await
    }

    /// A bill together with all nine of its sub-resource lists.
    pub async fn get_bill_details(&self, id: BillId) -> Result<BillDetails, CongressError> {
        let bill = self.get_bill(id).await?;
        let path = id.path();
        tracing::info!("Fetching sub-resources of {}", id);

        Ok(BillDetails {
            actions: self.sub_list::<Action>(&path, "actions").await?,
            amendments: self.sub_list::<Amendment>(&path, "amendments").await?,
            committees: self
                .sub_list::<CommitteeMetadata>(&path, "committees")
                .await?,
            cosponsors: self.sub_list::<Sponsor>(&path, "cosponsors").await?,
            related_bills: self.sub_list::<RelatedBill>(&path, "relatedbills").await?,
            subjects: self.subjects(&path).await?,
            summaries: self.sub_list::<Summary>(&path, "summaries").await?,
            text_versions: self.sub_list::<TextVersion>(&path, "text").await?,
            titles: self.sub_list::<Title>(&path, "titles").await?,
            bill,
        })
    }

    pub async fn get_amendment(&self, id: AmendmentId) -> Result<Amendment, CongressError> {
        self.detail(&id.path(), "amendment").await
    }

    pub async fn gather_amendments(
        &self,
        query: &AmendmentQuery,
    ) -> Result<Vec<Amendment>, CongressError> {
        self.gather(query).await
    }

    /// Laws enacted in a congress, each carrying its originating bill.
    ///
    /// The law endpoints list bills; a bill that became several laws
    /// contributes each of them.
    pub async fn gather_laws(&self, query: &LawQuery) -> Result<Vec<Law>, CongressError> {
        let bills: Vec<Bill> = self.gather(query).await?;
        Ok(bills
            .into_iter()
            .flat_map(|bill| bill.laws.unwrap_or_default())
            .collect())
    }

    /// Congressional Record issues published between `from` and `to`, inclusive.
    ///
    /// The index is queried one calendar month at a time; issues are kept in
    /// API order.
    pub async fn gather_congressional_records(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<BoundCongressionalRecord>, CongressError> {
        if from > to {
            return Err(CongressError::InvalidInput(format!(
                "record range starts after it ends ({} > {})",
                from, to
            )));
        }

        let mut records = Vec::new();
        let (mut year, mut month) = (from.year(), from.month());
        while (year, month) <= (to.year(), to.month()) {
            let query = CongressionalRecordQuery::default()
                .with_year(year)
                .with_month(month);
            let issues: Vec<BoundCongressionalRecord> = self.gather(&query).await?;
            tracing::debug!("{}-{:02}: {} issue(s)", year, month, issues.len());
            records.extend(
                issues
                    .into_iter()
                    .filter(|r| (from..=to).contains(&r.publish_date)),
            );

            (year, month) = if month == 12 {
                (year + 1, 1)
            } else {
                (year, month + 1)
            };
        }
        tracing::info!(
            "Gathered {} congressional record issue(s) from {} to {}",
            records.len(),
            from,
            to
        );
        Ok(records)
    }

    async fn gather<T: FromJson>(&self, query: &impl Query) -> Result<Vec<T>, CongressError> {
        let items = self
            .get_all(&query.endpoint(), &query.to_query_pairs())
            .await?;
        Ok(map_list(&items)?)
    }

    async fn sub_list<T: FromJson>(
        &self,
        bill_path: &str,
        resource: &str,
    ) -> Result<Vec<T>, CongressError> {
        let items = self
            .get_all(&format!("{}/{}", bill_path, resource), &[])
            .await?;
        Ok(map_list(&items)?)
    }

    /// Subject terms come back paginated, with the policy area on every page.
    ///
    /// The term list stays `None` unless some page carried a
    /// `legislativeSubjects` array.
    async fn subjects(&self, bill_path: &str) -> Result<Subjects, CongressError> {
        let pages = self
            .walk(&format!("{}/subjects", bill_path), &[])
            .collect_pages()
            .await?;
        let policy_area = pages
            .first()
            .and_then(|p| p.body.get("subjects"))
            .and_then(|s| s.get("policyArea"))
            .and_then(coerce::named);

        let mut legislative_subjects: Option<Vec<String>> = None;
        for page in &pages {
            let terms = page
                .body
                .get("subjects")
                .and_then(|s| s.get("legislativeSubjects"))
                .and_then(Value::as_array);
            if let Some(terms) = terms {
                legislative_subjects
                    .get_or_insert_with(Vec::new)
                    .extend(terms.iter().filter_map(coerce::named));
            }
        }

        Ok(Subjects {
            legislative_subjects,
            policy_area,
        })
    }

    /// Fetches a detail endpoint and maps the object under `key`.
    async fn detail<T: FromJson>(&self, endpoint: &str, key: &str) -> Result<T, CongressError> {
        let body = self.get(endpoint, &[]).await?;
        match body.get(key).filter(|v| !v.is_null()) {
            Some(object) => Ok(T::from_json(object)?),
            None => Err(MalformedRecordError {
                entity: T::ENTITY,
                key: key.to_string(),
                reason: MalformedReason::Missing,
                hint: describe_response(endpoint, &body),
            }
            .into()),
        }
    }
}

/// Names a response by the request the API echoes back, else by its keys.
fn describe_response(endpoint: &str, body: &Value) -> String {
    if let Some(request) = RequestInfo::from_body(body) {
        let echoed: Vec<String> = [
            ("congress", request.congress),
            ("billType", request.bill_type),
            ("billNumber", request.bill_number),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, v)))
        .collect();
        if !echoed.is_empty() {
            return format!("{} response, {}", endpoint, echoed.join(", "));
        }
    }
    match body.as_object() {
        Some(map) => format!("{} response, {}", endpoint, identity_hint(map)),
        None => format!("{} response", endpoint),
    }
}
