//! Catalog-level properties checked against the embedded dataset
//!
//! Tests cover:
//! - Identity round-trip for lookups
//! - Stable ordering and dataset size
//! - Category partitioning
//! - Related-flavor bounds
//! - Listing filter pass-through and category selection
//! - Merge rarity cap
//! - Timeline grouping and Pepperverse exclusion

use std::collections::HashSet;

use drpprdb_common::listing::{ListingFilter, Status};
use drpprdb_common::merge::merge_flavors;
use drpprdb_common::pepperverse::PepperverseMap;
use drpprdb_common::query::DEFAULT_RELATED_COUNT;
use drpprdb_common::random::{FixedSequence, RngSource};
use drpprdb_common::timeline::{group_by_year, year_sort_key};
use drpprdb_common::{Category, FlavorStore};

fn store() -> FlavorStore {
    FlavorStore::embedded().expect("embedded dataset should parse")
}

// =============================================================================
// Query layer
// =============================================================================

#[test]
fn test_get_by_id_identity_round_trip() {
    let store = store();
    for flavor in store.get_all() {
        let found = store.get_by_id(&flavor.id).expect("every id resolves");
        assert_eq!(found, flavor);
    }
}

#[test]
fn test_get_all_size_and_stable_order() {
    let store = store();
    assert_eq!(store.get_all().len(), 18);
    let first: Vec<&str> = store.get_all().iter().map(|f| f.id.as_str()).collect();
    let second: Vec<&str> = store.get_all().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(first, second);
    assert_eq!(first[0], "dr-pepper-original");
}

#[test]
fn test_ids_are_unique() {
    let store = store();
    let ids: HashSet<&str> = store.get_all().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids.len(), store.len());
}

#[test]
fn test_categories_partition_all_flavors() {
    let store = store();
    let mut seen = HashSet::new();
    let mut total = 0;
    for category in Category::ALL {
        for flavor in store.get_by_category(category) {
            assert_eq!(flavor.category, category);
            assert!(seen.insert(flavor.id.clone()), "{} in two categories", flavor.id);
            total += 1;
        }
    }
    assert_eq!(total, store.len());
}

#[test]
fn test_related_excludes_self_and_respects_count() {
    let store = store();
    for flavor in store.get_all() {
        let related = store.get_related(flavor, DEFAULT_RELATED_COUNT);
        assert!(related.len() <= DEFAULT_RELATED_COUNT);
        assert!(related.iter().all(|r| r.id != flavor.id));
        let unique: HashSet<&str> = related.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(unique.len(), related.len());
    }
}

#[test]
fn test_related_for_classic_is_first_four_classics() {
    let store = store();
    let original = store.get_by_id("dr-pepper-original").unwrap();
    let related: Vec<&str> = store
        .get_related(original, 4)
        .iter()
        .map(|f| f.id.as_str())
        .collect();
    assert_eq!(
        related,
        vec![
            "diet-dr-pepper",
            "dr-pepper-cherry",
            "dr-pepper-zero-sugar",
            "dr-pepper-cream-soda"
        ]
    );
}

#[test]
fn test_random_is_member_of_store() {
    let store = store();
    let mut rng = RngSource::seeded(2024);
    for _ in 0..32 {
        let flavor = store.get_random(&mut rng).unwrap();
        assert!(store.get_by_id(&flavor.id).is_some());
    }
}

#[test]
fn test_unknown_id_is_none() {
    assert!(store().get_by_id("dr-pepper-root-beer").is_none());
}

// =============================================================================
// Listing filter
// =============================================================================

#[test]
fn test_empty_filter_returns_everything_in_order() {
    let store = store();
    let results = ListingFilter::new().apply(store.get_all());
    let expected: Vec<&str> = store.get_all().iter().map(|f| f.id.as_str()).collect();
    let actual: Vec<&str> = results.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_classic_filter_matches_category_query() {
    let store = store();
    let filtered: Vec<&str> = ListingFilter::new()
        .with_category(Category::Classic)
        .apply(store.get_all())
        .iter()
        .map(|f| f.id.as_str())
        .collect();
    let by_category: Vec<&str> = store
        .get_by_category(Category::Classic)
        .iter()
        .map(|f| f.id.as_str())
        .collect();
    assert_eq!(filtered, by_category);
    assert_eq!(filtered.len(), 7);
}

#[test]
fn test_status_filters_split_the_store() {
    let store = store();
    let current = ListingFilter::new()
        .with_status(Status::Current)
        .apply(store.get_all())
        .len();
    let discontinued = ListingFilter::new()
        .with_status(Status::Discontinued)
        .apply(store.get_all())
        .len();
    assert_eq!(current + discontinued, store.len());
    assert!(current > 0 && discontinued > 0);
}

// =============================================================================
// Merge, timeline, map
// =============================================================================

#[test]
fn test_merge_rarity_capped_for_high_scores() {
    let store = store();
    let red_fusion = store.get_by_id("dr-pepper-red-fusion").unwrap(); // 8
    let reserve = store.get_by_id("dr-pepper-prohibition-reserve").unwrap(); // 9
    let merged = merge_flavors(red_fusion, reserve, &mut FixedSequence::new(vec![0]));
    assert_eq!(merged.rarity_score, 15);
    assert_eq!(merged.name, "Dr Pepper Red Reserve Fusion");
}

#[test]
fn test_timeline_groups_sorted_descending() {
    let store = store();
    let groups = group_by_year(store.get_all());
    let flattened: usize = groups.iter().map(|g| g.flavors.len()).sum();
    assert_eq!(flattened, store.len());

    let numeric: Vec<i64> = groups.iter().filter_map(|g| year_sort_key(&g.year)).collect();
    assert!(numeric.windows(2).all(|w| w[0] >= w[1]));

    let keys: Vec<&str> = groups.iter().map(|g| g.year.as_str()).collect();
    let disputed = keys.iter().position(|k| *k == "1923 (disputed)").unwrap();
    let plain = keys.iter().position(|k| *k == "1923").unwrap();
    assert!(disputed < plain, "tie broken by first encounter");
    assert_eq!(keys.last(), Some(&"Unknown"));

    let twenty_twenty = groups.iter().find(|g| g.year == "2020").unwrap();
    let ids: Vec<&str> = twenty_twenty.flavors.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["dr-pepper-zero-sugar", "dr-pepper-cream-soda"]);
}

#[test]
fn test_map_omits_flavors_without_position() {
    let store = store();
    let map = PepperverseMap::project(store.get_all());
    let unplaced: Vec<&str> = store
        .get_all()
        .iter()
        .filter(|f| f.pepperverse_position.is_none())
        .map(|f| f.id.as_str())
        .collect();
    assert_eq!(unplaced, vec!["dr-pepper-ten", "dr-pepper-pumpkin-spice"]);
    for id in &unplaced {
        assert!(!map.contains(id));
        assert!(store.get_by_id(id).is_some());
    }
    assert_eq!(map.len() + unplaced.len(), store.len());
}
