//! Typed records built from API responses.
//!
//! Records are immutable values: they are constructed once by the mapper and
//! never updated in place. Identity fields are plain values; everything else
//! is `Option`, where `None` means the API did not send it.

mod action;
mod amendment;
mod bill;
mod common;
mod congress;
mod law;
mod member;
mod record;

pub use self::action::{Action, Activity, CommitteeMetadata, RecordedVote, SourceSystem};
pub use self::amendment::{AmendedTreaty, Amendment, AmendmentId};
pub use self::bill::{
    Bill, BillDetails, BillId, IdentifyingEntity, RelatedBill, RelationshipDetail, Subjects,
    Summary, TextFormat, TextVersion, Title,
};
pub use self::common::{Chamber, CountUrl, LatestAction, Note};
pub use self::congress::{Congress, Session, SessionType};
pub use self::law::Law;
pub use self::member::Sponsor;
pub use self::record::{
    BoundCongressionalRecord, CongressionalDigest, CongressionalPDFLink,
    CongressionalRecordLinkCollection,
};

pub use cdg_api::types::{AmendmentType, BillType, LawType};
