//! Catalog data models
//!
//! Field names follow the dataset's JSON layout (camelCase, except the
//! historical `sugar_free` key).

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Brand prefix carried by most flavor names
pub const BRAND_PREFIX: &str = "Dr Pepper ";

/// Strip the first occurrence of the brand prefix from a flavor name
pub fn strip_brand(name: &str) -> String {
    name.replacen(BRAND_PREFIX, "", 1)
}

/// Claim about whether a flavor actually exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Authenticity {
    Real,
    Rumored,
    #[serde(rename = "Urban Legend")]
    UrbanLegend,
    #[serde(rename = "Astral Projection")]
    AstralProjection,
}

impl Authenticity {
    pub const ALL: [Authenticity; 4] = [
        Authenticity::Real,
        Authenticity::Rumored,
        Authenticity::UrbanLegend,
        Authenticity::AstralProjection,
    ];

    /// Display label, identical to the dataset spelling
    pub fn label(&self) -> &'static str {
        match self {
            Authenticity::Real => "Real",
            Authenticity::Rumored => "Rumored",
            Authenticity::UrbanLegend => "Urban Legend",
            Authenticity::AstralProjection => "Astral Projection",
        }
    }
}

impl fmt::Display for Authenticity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Authenticity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_label(s);
        Authenticity::ALL
            .into_iter()
            .find(|a| normalize_label(a.label()) == wanted)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown authenticity: {}", s)))
    }
}

/// Catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Classic,
    Seasonal,
    Experimental,
    Forbidden,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Classic,
        Category::Seasonal,
        Category::Experimental,
        Category::Forbidden,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Classic => "Classic",
            Category::Seasonal => "Seasonal",
            Category::Experimental => "Experimental",
            Category::Forbidden => "Forbidden",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_label(s);
        Category::ALL
            .into_iter()
            .find(|c| normalize_label(c.label()) == wanted)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown category: {}", s)))
    }
}

/// Lowercase and drop separators so "urban-legend" matches "Urban Legend"
fn normalize_label(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Rarity on the fixed 1-10 scale
///
/// Construction goes through `TryFrom<u8>`, so a dataset carrying an
/// out-of-range score fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RarityScore(u8);

impl RarityScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for RarityScore {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(RarityScore(value))
        } else {
            Err(Error::InvalidDataset(format!(
                "rarityScore {} outside [{}, {}]",
                value,
                Self::MIN,
                Self::MAX
            )))
        }
    }
}

impl From<RarityScore> for u8 {
    fn from(score: RarityScore) -> u8 {
        score.0
    }
}

impl fmt::Display for RarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Release year, either a plain year or an annotated string
/// such as "1923 (disputed)"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReleaseYear {
    Year(i64),
    Annotated(String),
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseYear::Year(year) => write!(f, "{}", year),
            ReleaseYear::Annotated(text) => f.write_str(text),
        }
    }
}

/// Kind of body a flavor is drawn as on the Pepperverse map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyType {
    Planet,
    Comet,
    Astral,
    BlackHole,
}

impl BodyType {
    pub const ALL: [BodyType; 4] = [
        BodyType::Planet,
        BodyType::Comet,
        BodyType::Astral,
        BodyType::BlackHole,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BodyType::Planet => "planet",
            BodyType::Comet => "comet",
            BodyType::Astral => "astral",
            BodyType::BlackHole => "black-hole",
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed map coordinates for a flavor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PepperversePosition {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub kind: BodyType,
}

/// A single catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flavor {
    pub id: String,
    pub name: String,
    pub authenticity: Authenticity,
    pub category: Category,
    pub rarity_score: RarityScore,
    pub release_year: ReleaseYear,
    pub flavor_notes: Vec<String>,
    pub pairs_well_with: Vec<String>,
    pub lore: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub discontinued: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caffeine_content: Option<String>,
    #[serde(rename = "sugar_free", default)]
    pub sugar_free: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pepperverse_position: Option<PepperversePosition>,
}

impl Flavor {
    /// Name with the brand prefix removed, used for compact labels
    pub fn short_name(&self) -> String {
        strip_brand(&self.name)
    }

    /// Still on shelves (not discontinued)
    pub fn is_current(&self) -> bool {
        !self.discontinued
    }
}

/// Dataset envelope as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlavorDatabase {
    pub version: String,
    pub last_updated: String,
    pub flavors: Vec<Flavor>,
}

impl FlavorDatabase {
    /// Parse `lastUpdated` as an RFC 3339 timestamp or a plain `YYYY-MM-DD` date
    pub fn last_updated_date(&self) -> Option<NaiveDate> {
        let raw = self.last_updated.trim();
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .ok()
            .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_brand_first_occurrence_only() {
        assert_eq!(strip_brand("Dr Pepper Cherry"), "Cherry");
        assert_eq!(strip_brand("Diet Dr Pepper"), "Diet Dr Pepper");
        assert_eq!(strip_brand("Dr Pepper Dr Pepper Zero"), "Dr Pepper Zero");
        assert_eq!(strip_brand("Dr Pepper"), "Dr Pepper");
    }

    #[test]
    fn test_authenticity_serde_labels() {
        let json = serde_json::to_string(&Authenticity::UrbanLegend).unwrap();
        assert_eq!(json, "\"Urban Legend\"");
        let parsed: Authenticity = serde_json::from_str("\"Astral Projection\"").unwrap();
        assert_eq!(parsed, Authenticity::AstralProjection);
    }

    #[test]
    fn test_category_from_str_is_lenient() {
        assert_eq!("classic".parse::<Category>().unwrap(), Category::Classic);
        assert_eq!("FORBIDDEN".parse::<Category>().unwrap(), Category::Forbidden);
        assert!("Limited".parse::<Category>().is_err());
    }

    #[test]
    fn test_authenticity_from_str_accepts_kebab_case() {
        assert_eq!(
            "urban-legend".parse::<Authenticity>().unwrap(),
            Authenticity::UrbanLegend
        );
    }

    #[test]
    fn test_rarity_score_bounds() {
        assert!(RarityScore::try_from(0).is_err());
        assert!(RarityScore::try_from(11).is_err());
        assert_eq!(RarityScore::try_from(1).unwrap().value(), 1);
        assert_eq!(RarityScore::try_from(10).unwrap().value(), 10);
    }

    #[test]
    fn test_rarity_score_rejected_by_serde() {
        let err = serde_json::from_str::<RarityScore>("12").unwrap_err();
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn test_release_year_untagged() {
        let year: ReleaseYear = serde_json::from_str("1885").unwrap();
        assert_eq!(year, ReleaseYear::Year(1885));
        let disputed: ReleaseYear = serde_json::from_str("\"1923 (disputed)\"").unwrap();
        assert_eq!(disputed.to_string(), "1923 (disputed)");
    }

    #[test]
    fn test_body_type_kebab_case() {
        let kind: BodyType = serde_json::from_str("\"black-hole\"").unwrap();
        assert_eq!(kind, BodyType::BlackHole);
    }

    #[test]
    fn test_flavor_optional_fields_default() {
        let json = r#"{
            "id": "plain",
            "name": "Dr Pepper Plain",
            "authenticity": "Real",
            "category": "Classic",
            "rarityScore": 3,
            "releaseYear": 1999,
            "flavorNotes": ["cherry"],
            "pairsWellWith": [],
            "lore": "Plain."
        }"#;
        let flavor: Flavor = serde_json::from_str(json).unwrap();
        assert!(!flavor.discontinued);
        assert!(!flavor.sugar_free);
        assert!(flavor.image_url.is_none());
        assert!(flavor.pepperverse_position.is_none());
        assert!(flavor.is_current());
        assert_eq!(flavor.short_name(), "Plain");
    }

    #[test]
    fn test_last_updated_date_formats() {
        let mut db = FlavorDatabase {
            version: "1".to_string(),
            last_updated: "2025-01-15".to_string(),
            flavors: vec![],
        };
        assert_eq!(
            db.last_updated_date(),
            NaiveDate::from_ymd_opt(2025, 1, 15)
        );

        db.last_updated = "2025-01-15T08:30:00Z".to_string();
        assert_eq!(
            db.last_updated_date(),
            NaiveDate::from_ymd_opt(2025, 1, 15)
        );

        db.last_updated = "last Tuesday".to_string();
        assert!(db.last_updated_date().is_none());
    }
}
