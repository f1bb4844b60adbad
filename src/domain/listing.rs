//! Listing model and its enums.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingCategory {
    General,
    Engineering,
    PreMed,
    HumanitiesArt,
}

impl ListingCategory {
    /// Stored name. Renaming these is a breaking schema change.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "GENERAL",
            Self::Engineering => "ENGINEERING",
            Self::PreMed => "PRE_MED",
            Self::HumanitiesArt => "HUMANITIES_ART",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "GENERAL" => Some(Self::General),
            "ENGINEERING" => Some(Self::Engineering),
            "PRE_MED" => Some(Self::PreMed),
            "HUMANITIES_ART" => Some(Self::HumanitiesArt),
            _ => None,
        }
    }

    /// Display label for pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Engineering => "Engineering",
            Self::PreMed => "Pre Med",
            Self::HumanitiesArt => "Humanities/Art",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::General,
            Self::Engineering,
            Self::PreMed,
            Self::HumanitiesArt,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemCondition {
    New,
    LikeNew,
    Good,
    Fair,
    Poor,
}

impl ItemCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::LikeNew => "LIKE_NEW",
            Self::Good => "GOOD",
            Self::Fair => "FAIR",
            Self::Poor => "POOR",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "NEW" => Some(Self::New),
            "LIKE_NEW" => Some(Self::LikeNew),
            "GOOD" => Some(Self::Good),
            "FAIR" => Some(Self::Fair),
            "POOR" => Some(Self::Poor),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::LikeNew => "Like New",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::New, Self::LikeNew, Self::Good, Self::Fair, Self::Poor]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingStatus {
    Active,
    Sold,
    Archived,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Sold => "SOLD",
            Self::Archived => "ARCHIVED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(Self::Active),
            "SOLD" => Some(Self::Sold),
            "ARCHIVED" => Some(Self::Archived),
            _ => None,
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Active, Self::Sold, Self::Archived]
    }
}

/// Fallback shown when a seller left the description blank.
pub const NO_DESCRIPTION: &str = "no description";

/// A for-sale item posted by an account. `price_cents` keeps money in integer
/// minor units; `created_at` is epoch millis, set once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: i64,
    pub seller_id: i64,
    pub title: String,
    pub description: String,
    pub category: ListingCategory,
    pub price_cents: i64,
    pub condition: ItemCondition,
    pub photos: Vec<String>,
    pub status: ListingStatus,
    pub created_at: i64,
}
