use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// An offshore hiring region and the share of U.S. salary paid there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub name: &'static str,

    /// Retention fraction in (0, 1]: 0.20 means talent costs 20% of the U.S. salary.
    pub percentage: Decimal,

    pub flag: &'static str,
    pub description: &'static str,

    /// Working-hours overlap with U.S. time zones.
    pub timezone: &'static str,

    /// English proficiency typical for the region.
    pub english: &'static str,
}

pub const REGIONS: [Region; 3] = [
    Region {
        name: "Philippines",
        percentage: dec!(0.20),
        flag: "🇵🇭",
        description: "Southeast Asia",
        timezone: "12-14 hrs overlap",
        english: "C1-C2 English",
    },
    Region {
        name: "Latin America",
        percentage: dec!(0.35),
        flag: "🌎",
        description: "Americas",
        timezone: "6-8 hrs overlap",
        english: "C1-C2 English",
    },
    Region {
        name: "South Africa",
        percentage: dec!(0.40),
        flag: "🇿🇦",
        description: "Africa",
        timezone: "8-10 hrs overlap",
        english: "Native English",
    },
];
