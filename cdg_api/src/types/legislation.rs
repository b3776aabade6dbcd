//! Legislative instrument kinds used in endpoint paths and record identities.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Bill and resolution types.
///
/// Upper-case in response bodies (`"HR"`), lower-case in endpoint paths (`hr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillType {
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "S")]
    S,
    #[serde(rename = "HJRES")]
    Hjres,
    #[serde(rename = "SJRES")]
    Sjres,
    #[serde(rename = "HCONRES")]
    Hconres,
    #[serde(rename = "SCONRES")]
    Sconres,
    #[serde(rename = "HRES")]
    Hres,
    #[serde(rename = "SRES")]
    Sres,
}

impl BillType {
    pub const ALL: [BillType; 8] = [
        BillType::Hr,
        BillType::S,
        BillType::Hjres,
        BillType::Sjres,
        BillType::Hconres,
        BillType::Sconres,
        BillType::Hres,
        BillType::Sres,
    ];

    /// Upper-case code as it appears in response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            BillType::Hr => "HR",
            BillType::S => "S",
            BillType::Hjres => "HJRES",
            BillType::Sjres => "SJRES",
            BillType::Hconres => "HCONRES",
            BillType::Sconres => "SCONRES",
            BillType::Hres => "HRES",
            BillType::Sres => "SRES",
        }
    }

    /// Lower-case segment used in endpoint paths.
    pub fn path_segment(&self) -> String {
        self.code().to_ascii_lowercase()
    }
}

impl std::fmt::Display for BillType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for BillType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().replace('.', "").to_ascii_uppercase();
        BillType::ALL
            .into_iter()
            .find(|t| t.code() == upper)
            .ok_or(())
    }
}

/// Amendment types: House, Senate, and Senate unprinted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmendmentType {
    #[serde(rename = "HAMDT")]
    Hamdt,
    #[serde(rename = "SAMDT")]
    Samdt,
    #[serde(rename = "SUAMDT")]
    Suamdt,
}

impl AmendmentType {
    pub fn code(&self) -> &'static str {
        match self {
            AmendmentType::Hamdt => "HAMDT",
            AmendmentType::Samdt => "SAMDT",
            AmendmentType::Suamdt => "SUAMDT",
        }
    }

    pub fn path_segment(&self) -> String {
        self.code().to_ascii_lowercase()
    }
}

impl std::fmt::Display for AmendmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for AmendmentType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HAMDT" => Ok(AmendmentType::Hamdt),
            "SAMDT" => Ok(AmendmentType::Samdt),
            "SUAMDT" => Ok(AmendmentType::Suamdt),
            _ => Err(()),
        }
    }
}

/// Public or private law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LawType {
    #[serde(rename = "Public Law")]
    Public,
    #[serde(rename = "Private Law")]
    Private,
}

impl LawType {
    /// Segment used in `law/{congress}/{type}` paths.
    pub fn path_segment(&self) -> &'static str {
        match self {
            LawType::Public => "pub",
            LawType::Private => "priv",
        }
    }
}

impl std::fmt::Display for LawType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                LawType::Public => "Public Law",
                LawType::Private => "Private Law",
            }
        )
    }
}

impl FromStr for LawType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public law" | "public" | "pub" | "pl" => Ok(LawType::Public),
            "private law" | "private" | "priv" | "pvtl" => Ok(LawType::Private),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bill_type_parses_any_case() {
        assert_eq!("hr".parse::<BillType>(), Ok(BillType::Hr));
        assert_eq!("HJRES".parse::<BillType>(), Ok(BillType::Hjres));
        assert_eq!("S.".parse::<BillType>(), Ok(BillType::S));
        assert!("HAMDT".parse::<BillType>().is_err());
    }

    #[test]
    fn bill_type_path_segment_is_lowercase() {
        assert_eq!(BillType::Sconres.path_segment(), "sconres");
        assert_eq!(BillType::Sconres.to_string(), "SCONRES");
    }

    #[test]
    fn law_type_accepts_api_labels_and_path_segments() {
        assert_eq!("Public Law".parse::<LawType>(), Ok(LawType::Public));
        assert_eq!("priv".parse::<LawType>(), Ok(LawType::Private));
        assert_eq!(LawType::Public.path_segment(), "pub");
    }

    #[test]
    fn amendment_type_round_trips_through_display() {
        for t in [AmendmentType::Hamdt, AmendmentType::Samdt, AmendmentType::Suamdt] {
            assert_eq!(t.to_string().parse::<AmendmentType>(), Ok(t));
        }
    }
}
