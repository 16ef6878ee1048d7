//! Brand identity.
//!
//! A [`Brand`] is the closed set of catalogs the normalizer understands.
//! Codes arrive as free text from the caller (CLI flag, file name) and are
//! parsed once; everything downstream matches on the enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BrandError;
use crate::profile::{self, BrandProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Brand {
    /// Cole Haan
    Ch,
    /// Columbia
    Cl,
    /// Skechers
    Sk,
    /// New Era
    Ne,
    /// Fabletics
    Fb,
    /// Psycho Bunny
    Pb,
    /// Birkenstock
    Bi,
    /// Adolfo
    Ad,
}

impl Brand {
    pub const ALL: [Brand; 8] = [
        Brand::Ch,
        Brand::Cl,
        Brand::Sk,
        Brand::Ne,
        Brand::Fb,
        Brand::Pb,
        Brand::Bi,
        Brand::Ad,
    ];

    /// Two-letter uppercase code.
    pub fn code(self) -> &'static str {
        match self {
            Brand::Ch => "CH",
            Brand::Cl => "CL",
            Brand::Sk => "SK",
            Brand::Ne => "NE",
            Brand::Fb => "FB",
            Brand::Pb => "PB",
            Brand::Bi => "BI",
            Brand::Ad => "AD",
        }
    }

    /// Static rule set for this brand.
    pub fn profile(self) -> &'static BrandProfile {
        profile::profile_for(self)
    }

    pub fn display_name(self) -> &'static str {
        self.profile().display_name
    }

    /// Parses a brand code, ignoring surrounding whitespace and case.
    pub fn parse_code(code: &str) -> Result<Self, BrandError> {
        let upper = code.trim().to_uppercase();
        Brand::ALL
            .into_iter()
            .find(|brand| brand.code() == upper)
            .ok_or(BrandError::Unsupported {
                code: code.trim().to_string(),
            })
    }
}

impl FromStr for Brand {
    type Err = BrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Brand::parse_code(s)
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
