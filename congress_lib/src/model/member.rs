use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::MalformedRecordError;
use crate::mapper::{coerce, Fields, FromJson};

/// A member of Congress referenced as a sponsor or cosponsor.
///
/// Sponsor entries and cosponsor entries share this shape; the cosponsor-only
/// fields are `None` on sponsors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sponsor {
    /// Biographical Directory identifier, e.g. "P000197".
    pub bioguide_id: String,
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    /// Party code ("D", "R", "I") or name, whichever the payload carries.
    pub party: Option<String>,
    pub state: Option<String>,
    pub district: Option<u32>,
    pub is_by_request: Option<bool>,
    pub is_original_cosponsor: Option<bool>,
    pub sponsorship_date: Option<NaiveDate>,
    pub sponsorship_withdrawn_date: Option<NaiveDate>,
    pub url: Option<String>,
}

impl FromJson for Sponsor {
    const ENTITY: &'static str = "Sponsor";

    fn from_fields(f: &Fields<'_>) -> Result<Self, MalformedRecordError> {
        Ok(Self {
            bioguide_id: f.required("bioguideId", coerce::string)?,
            full_name: f.first_of(&["fullName", "name"], coerce::string),
            first_name: f.optional("firstName", coerce::string),
            middle_name: f.optional("middleName", coerce::string),
            last_name: f.optional("lastName", coerce::string),
            party: f.first_of(&["party", "partyName"], coerce::string),
            state: f.optional("state", coerce::string),
            district: f.optional("district", coerce::integer),
            is_by_request: f.optional("isByRequest", coerce::flag),
            is_original_cosponsor: f.optional("isOriginalCosponsor", coerce::flag),
            sponsorship_date: f.optional("sponsorshipDate", coerce::date),
            sponsorship_withdrawn_date: f.optional("sponsorshipWithdrawnDate", coerce::date),
            url: f.optional("url", coerce::string),
        })
    }
}
