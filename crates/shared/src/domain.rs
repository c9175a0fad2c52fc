use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! label_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

label_newtype!(SiteName);
label_newtype!(BoosterCategory);

/// Wire value used by the site selector for "no site restriction".
pub const ALL_SITES: &str = "ALL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub fn as_class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(format!("launch outcome must be 0 or 1, got {other}")),
        }
    }
}

impl From<Outcome> for u8 {
    fn from(value: Outcome) -> Self {
        value.as_class()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub site: SiteName,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_category: BoosterCategory,
}

impl LaunchRecord {
    pub fn new(
        site: impl Into<SiteName>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_category: impl Into<BoosterCategory>,
    ) -> Self {
        Self {
            site: site.into(),
            payload_mass_kg,
            outcome,
            booster_category: booster_category.into(),
        }
    }
}

impl From<String> for SiteName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<String> for BoosterCategory {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteFilter {
    All,
    Site(SiteName),
}

impl SiteFilter {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value == ALL_SITES {
            SiteFilter::All
        } else {
            SiteFilter::Site(SiteName::new(value))
        }
    }

    pub fn site(&self) -> Option<&SiteName> {
        match self {
            SiteFilter::All => None,
            SiteFilter::Site(site) => Some(site),
        }
    }

    pub fn admits(&self, site: &SiteName) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(selected) => selected == site,
        }
    }
}

impl From<String> for SiteFilter {
    fn from(value: String) -> Self {
        SiteFilter::parse(&value)
    }
}

impl From<SiteFilter> for String {
    fn from(value: SiteFilter) -> Self {
        match value {
            SiteFilter::All => ALL_SITES.to_string(),
            SiteFilter::Site(site) => site.0,
        }
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteFilter::All => f.write_str(ALL_SITES),
            SiteFilter::Site(site) => f.write_str(site.as_str()),
        }
    }
}

/// Inclusive payload mass window in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.lo <= payload_mass_kg && payload_mass_kg <= self.hi
    }

    pub fn is_well_formed(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite() && self.lo <= self.hi
    }

    pub fn encloses(&self, other: &PayloadRange) -> bool {
        self.lo <= other.lo && other.hi <= self.hi
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub site_filter: SiteFilter,
    pub payload_range: PayloadRange,
}

impl Selection {
    pub fn new(site_filter: SiteFilter, payload_range: PayloadRange) -> Self {
        Self {
            site_filter,
            payload_range,
        }
    }

    pub fn with_site(&self, site_filter: SiteFilter) -> Self {
        Self {
            site_filter,
            payload_range: self.payload_range,
        }
    }

    pub fn with_range(&self, payload_range: PayloadRange) -> Self {
        Self {
            site_filter: self.site_filter.clone(),
            payload_range,
        }
    }
}
