mod meta;
pub use self::meta::{Pagination, RequestInfo};

mod legislation;
pub use self::legislation::{AmendmentType, BillType, LawType};
