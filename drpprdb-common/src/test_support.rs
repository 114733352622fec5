//! Fixture builders shared by unit tests

use crate::models::{
    Authenticity, BodyType, Category, Flavor, FlavorDatabase, PepperversePosition, RarityScore,
    ReleaseYear,
};
use crate::store::FlavorStore;

pub fn flavor(id: &str, category: Category, authenticity: Authenticity) -> Flavor {
    Flavor {
        id: id.to_string(),
        name: format!("Dr Pepper {}", id),
        authenticity,
        category,
        rarity_score: RarityScore::try_from(5).unwrap(),
        release_year: ReleaseYear::Year(2000),
        flavor_notes: Vec::new(),
        pairs_well_with: Vec::new(),
        lore: String::new(),
        image_url: None,
        discontinued: false,
        region: None,
        distribution: None,
        caffeine_content: None,
        sugar_free: false,
        pepperverse_position: None,
    }
}

pub fn with_year(mut flavor: Flavor, year: ReleaseYear) -> Flavor {
    flavor.release_year = year;
    flavor
}

pub fn with_position(mut flavor: Flavor, x: f64, y: f64, kind: BodyType) -> Flavor {
    flavor.pepperverse_position = Some(PepperversePosition { x, y, kind });
    flavor
}

pub fn store(flavors: Vec<Flavor>) -> FlavorStore {
    FlavorStore::from_database(FlavorDatabase {
        version: "test".to_string(),
        last_updated: "2025-01-01".to_string(),
        flavors,
    })
}
