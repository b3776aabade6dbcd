mod common;
pub use self::common::{ListParams, Query, SortDirection, DATE_TIME_FORMAT, MAX_LIMIT};

mod legislation;
pub use self::legislation::{AmendmentQuery, BillQuery, CongressQuery, LawQuery};

mod record;
pub use self::record::CongressionalRecordQuery;
