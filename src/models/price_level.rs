use serde::{Deserialize, Serialize};

/// Ordinal price bucket, free (0) through very expensive (4).
///
/// The Places API names these levels instead of numbering them, so every
/// level carries both its caller-facing integer and its vendor constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "i64")]
pub enum PriceLevel {
    Free,
    Inexpensive,
    Moderate,
    Expensive,
    VeryExpensive,
}

pub const PRICE_LEVELS: [PriceLevel; 5] = [
    PriceLevel::Free,
    PriceLevel::Inexpensive,
    PriceLevel::Moderate,
    PriceLevel::Expensive,
    PriceLevel::VeryExpensive,
];

impl PriceLevel {
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(PriceLevel::Free),
            1 => Some(PriceLevel::Inexpensive),
            2 => Some(PriceLevel::Moderate),
            3 => Some(PriceLevel::Expensive),
            4 => Some(PriceLevel::VeryExpensive),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            PriceLevel::Free => 0,
            PriceLevel::Inexpensive => 1,
            PriceLevel::Moderate => 2,
            PriceLevel::Expensive => 3,
            PriceLevel::VeryExpensive => 4,
        }
    }

    pub fn vendor_name(self) -> &'static str {
        match self {
            PriceLevel::Free => "PRICE_LEVEL_FREE",
            PriceLevel::Inexpensive => "PRICE_LEVEL_INEXPENSIVE",
            PriceLevel::Moderate => "PRICE_LEVEL_MODERATE",
            PriceLevel::Expensive => "PRICE_LEVEL_EXPENSIVE",
            PriceLevel::VeryExpensive => "PRICE_LEVEL_VERY_EXPENSIVE",
        }
    }

    /// Unrecognised names (including `PRICE_LEVEL_UNSPECIFIED`) yield `None`.
    pub fn from_vendor_name(name: &str) -> Option<Self> {
        PRICE_LEVELS
            .into_iter()
            .find(|level| level.vendor_name() == name)
    }
}

impl From<PriceLevel> for u8 {
    fn from(level: PriceLevel) -> Self {
        level.level()
    }
}

impl TryFrom<i64> for PriceLevel {
    type Error = String;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        PriceLevel::from_level(level)
            .ok_or_else(|| format!("price level must be an integer between 0 and 4, got {}", level))
    }
}
