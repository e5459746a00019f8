//! Implant price model behind the landing page calculator.
//!
//! All amounts are whole BYN. The table is fixed at compile time; every
//! implant system resolves to its prices through an exhaustive match.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::config::{CURRENCY, DISCOUNT_MIN_TEETH, DISCOUNT_PERCENT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImplantSystem {
    Straumann,
    Megagen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrownType {
    MetalCeramic,
    Zirconia,
}

/// Per-tooth cost components of one implant system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub implant: u64,
    pub healing_cap: u64,
    pub metal_ceramic: u64,
    pub zirconia: u64,
}

impl ImplantSystem {
    pub fn prices(self) -> PriceBreakdown {
        match self {
            ImplantSystem::Straumann => PriceBreakdown {
                implant: 1600,
                healing_cap: 160,
                metal_ceramic: 1000,
                zirconia: 1150,
            },
            ImplantSystem::Megagen => PriceBreakdown {
                implant: 990,
                healing_cap: 150,
                metal_ceramic: 800,
                zirconia: 950,
            },
        }
    }
}

impl PriceBreakdown {
    pub fn crown(&self, crown: Option<CrownType>) -> u64 {
        match crown {
            Some(CrownType::MetalCeramic) => self.metal_ceramic,
            Some(CrownType::Zirconia) => self.zirconia,
            None => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown option value '{0}'")]
pub struct UnknownOption(pub String);

impl FromStr for ImplantSystem {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "straumann" => Ok(ImplantSystem::Straumann),
            "megagen" => Ok(ImplantSystem::Megagen),
            other => Err(UnknownOption(other.to_string())),
        }
    }
}

impl FromStr for CrownType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metalCeramic" => Ok(CrownType::MetalCeramic),
            "zirconia" => Ok(CrownType::Zirconia),
            other => Err(UnknownOption(other.to_string())),
        }
    }
}

/// What the visitor picked in the calculator form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalculatorSelection {
    pub system: ImplantSystem,
    /// `None` for a crown value outside the known set; it contributes nothing.
    pub crown: Option<CrownType>,
    pub teeth: u32,
}

impl CalculatorSelection {
    /// Builds a selection from raw form values.
    ///
    /// Returns `None` while the system or crown select is still empty, or when
    /// the system value is not one we have prices for.
    pub fn from_form(system: &str, crown: &str, teeth: &str) -> Option<Self> {
        if system.is_empty() || crown.is_empty() {
            return None;
        }
        let system = match system.parse::<ImplantSystem>() {
            Ok(system) => system,
            Err(e) => {
                log::warn!("Ignoring implant system: {}", e);
                return None;
            }
        };
        Some(Self {
            system,
            crown: crown.parse().ok(),
            teeth: parse_teeth_count(teeth),
        })
    }

    pub fn quote(&self) -> Quote {
        let prices = self.system.prices();
        let per_tooth = prices.implant + prices.healing_cap + prices.crown(self.crown);
        let subtotal = per_tooth * u64::from(self.teeth);
        let total = if self.teeth >= DISCOUNT_MIN_TEETH {
            // round half up
            (subtotal * (100 - DISCOUNT_PERCENT) + 50) / 100
        } else {
            subtotal
        };
        Quote { per_tooth, subtotal, total }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    pub per_tooth: u64,
    pub subtotal: u64,
    pub total: u64,
}

impl Quote {
    pub fn discounted(&self) -> bool {
        self.total != self.subtotal
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.total, CURRENCY)
    }
}

/// Parses the tooth-count field the way a browser integer parse reads it:
/// leading whitespace, an optional sign, then as many digits as follow.
/// Anything that doesn't yield a positive number counts as one tooth.
pub fn parse_teeth_count(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if negative || digits.is_empty() {
        return 1;
    }
    match digits.parse::<u32>() {
        Ok(0) => 1,
        Ok(n) => n,
        // Too many digits for a tooth count; clamp instead of rejecting
        Err(_) => u32::MAX,
    }
}
