//! Flavor merger: combines two flavors into a fictitious third one
//!
//! Purely cosmetic. Nothing produced here is stored; every draw goes through
//! the caller's [`RandomSource`], so a fixed sequence yields fixed text.

use serde::Serialize;

use crate::models::{strip_brand, Flavor};
use crate::random::RandomSource;

pub const SUFFIXES: &[&str] = &[
    "Fusion",
    "Reserve",
    "Convergence",
    "Anomaly",
    "Paradox",
    "Synthesis",
    "Continuum",
];

pub const ADJECTIVES: &[&str] = &[
    "unholy",
    "temporal",
    "quantum",
    "dimensional",
    "impossible",
    "forbidden",
];

pub const PROPERTIES: &[&str] = &[
    "temporal distortion properties",
    "quantum entanglement",
    "aromatic complexity",
    "dimensional instability",
    "thermodynamic improbability",
    "metaphysical uncertainty",
];

pub const DESCRIPTORS: &[&str] = &[
    "Confused",
    "Paradoxical",
    "Unstable",
    "Transcendent",
    "Concerning",
    "Illegal",
    "Questionable",
];

pub const SERVING_SUGGESTIONS: &[&str] = &[
    "Never",
    "With extreme caution",
    "Under laboratory conditions",
    "Only on Tuesdays",
    "In a parallel universe",
    "After signing a waiver",
];

pub const PAIRINGS: &[&str] = &[
    "Existential dread",
    "Regret",
    "Time travel",
    "Dimensional rifts",
    "Your last mistake",
    "Uncertainty",
];

pub const WARNING: &str = "WARNING: This flavor combination violates at least three natural laws and possibly several international treaties.";

/// Upper bound for a merged rarity score, deliberately past the 1-10 scale
pub const MAX_MERGED_RARITY: u8 = 15;

const MAX_ILLEGAL_DIMENSIONS: usize = 5;
const FALLBACK_FIRST_WORD: &str = "Mystery";
const FALLBACK_LAST_WORD: &str = "Unknown";

/// Result of merging two flavors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedFlavor {
    pub name: String,
    pub description: String,
    pub warning: String,
    pub rarity_score: u8,
    /// Rarity as displayed, e.g. "15/10 (Illegal in 3 Dimensions)"
    pub rarity: String,
    pub pairs_with: String,
}

impl MergedFlavor {
    /// Shareable summary of the merge
    pub fn share_text(&self) -> String {
        format!(
            "I merged flavors in the Dr Pepper Flavor Merger!\n\nResult: {}\n\n\"{}\"\n\nTry it yourself: drpprdb.com/merger",
            self.name, self.description
        )
    }
}

/// Combined rarity: both scores plus a bonus of 3, capped at 15
pub fn merged_rarity(a: &Flavor, b: &Flavor) -> u8 {
    let total = a.rarity_score.value() + b.rarity_score.value() + 3;
    total.min(MAX_MERGED_RARITY)
}

fn draw<'a, S>(source: &mut S, vocabulary: &[&'a str]) -> &'a str
where
    S: RandomSource + ?Sized,
{
    crate::random::choose(source, vocabulary).copied().unwrap_or_default()
}

fn first_word(name: &str) -> String {
    let stripped = strip_brand(name);
    match stripped.split(' ').next() {
        Some(word) if !word.is_empty() => word.to_string(),
        _ => FALLBACK_FIRST_WORD.to_string(),
    }
}

fn last_word(name: &str) -> String {
    let stripped = strip_brand(name);
    match stripped.split(' ').last() {
        Some(word) if !word.is_empty() => word.to_string(),
        _ => FALLBACK_LAST_WORD.to_string(),
    }
}

/// Merge `a` and `b` into a new fictitious flavor
///
/// Draw order from `source`: suffix, adjective, property for `a`, property
/// for `b`, descriptor, serving suggestion, pairing, dimension count.
pub fn merge_flavors<S>(a: &Flavor, b: &Flavor, source: &mut S) -> MergedFlavor
where
    S: RandomSource + ?Sized,
{
    let suffix = draw(source, SUFFIXES);
    let name = format!(
        "Dr Pepper {} {} {}",
        first_word(&a.name),
        last_word(&b.name),
        suffix
    );

    let adjective = draw(source, ADJECTIVES);
    let property_a = draw(source, PROPERTIES);
    let property_b = draw(source, PROPERTIES);
    let descriptor = draw(source, DESCRIPTORS);
    let serving = draw(source, SERVING_SUGGESTIONS);
    let pairing = draw(source, PAIRINGS);

    let rarity_score = merged_rarity(a, b);
    let dimensions = source.next_index(MAX_ILLEGAL_DIMENSIONS) + 1;

    MergedFlavor {
        name,
        description: format!(
            "This {} union combines the {} of {} with the {} of {}. Flavor profile: {}. Recommended serving: {}.",
            adjective, property_a, a.name, property_b, b.name, descriptor, serving
        ),
        warning: WARNING.to_string(),
        rarity_score,
        rarity: format!("{}/10 (Illegal in {} Dimensions)", rarity_score, dimensions),
        pairs_with: pairing.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Authenticity, Category, RarityScore};
    use crate::random::{FixedSequence, RngSource};
    use crate::test_support::flavor;

    fn named(name: &str, rarity: u8) -> Flavor {
        let mut f = flavor("x", Category::Classic, Authenticity::Real);
        f.name = name.to_string();
        f.rarity_score = RarityScore::try_from(rarity).unwrap();
        f
    }

    #[test]
    fn test_merge_exact_output_with_fixed_sequence() {
        let a = named("Dr Pepper Cherry Vanilla", 4);
        let b = named("Dr Pepper Strawberries & Cream", 6);
        let mut seq = FixedSequence::new(vec![2, 0, 1, 3, 4, 5, 1, 2]);

        let merged = merge_flavors(&a, &b, &mut seq);

        assert_eq!(merged.name, "Dr Pepper Cherry Cream Convergence");
        assert_eq!(
            merged.description,
            "This unholy union combines the quantum entanglement of Dr Pepper Cherry Vanilla \
             with the dimensional instability of Dr Pepper Strawberries & Cream. \
             Flavor profile: Concerning. Recommended serving: After signing a waiver."
        );
        assert_eq!(merged.pairs_with, "Regret");
        assert_eq!(merged.rarity_score, 13);
        assert_eq!(merged.rarity, "13/10 (Illegal in 3 Dimensions)");
        assert_eq!(merged.warning, WARNING);
    }

    #[test]
    fn test_rarity_capped_at_fifteen() {
        let a = named("Dr Pepper A", 8);
        let b = named("Dr Pepper B", 9);
        for seed in 0..20 {
            let merged = merge_flavors(&a, &b, &mut RngSource::seeded(seed));
            assert_eq!(merged.rarity_score, 15);
            assert!(merged.rarity.starts_with("15/10"));
        }
    }

    #[test]
    fn test_rarity_below_cap_is_sum_plus_three() {
        let a = named("Dr Pepper A", 1);
        let b = named("Dr Pepper B", 2);
        assert_eq!(merged_rarity(&a, &b), 6);
    }

    #[test]
    fn test_words_without_brand_prefix() {
        let a = named("Diet Dr Pepper", 2);
        let b = named("Pepper", 2);
        let merged = merge_flavors(&a, &b, &mut FixedSequence::new(vec![0]));
        assert_eq!(merged.name, "Dr Pepper Diet Pepper Fusion");
    }

    #[test]
    fn test_empty_names_fall_back() {
        let a = named("", 2);
        let b = named("Dr Pepper ", 2);
        let merged = merge_flavors(&a, &b, &mut FixedSequence::new(vec![1]));
        assert_eq!(merged.name, "Dr Pepper Mystery Unknown Reserve");
    }

    #[test]
    fn test_dimensions_in_range() {
        let a = named("Dr Pepper A", 1);
        let b = named("Dr Pepper B", 1);
        let mut rng = RngSource::seeded(7);
        for _ in 0..50 {
            let merged = merge_flavors(&a, &b, &mut rng);
            let n: usize = merged
                .rarity
                .trim_start_matches("5/10 (Illegal in ")
                .trim_end_matches(" Dimensions)")
                .parse()
                .unwrap();
            assert!((1..=5).contains(&n));
        }
    }

    #[test]
    fn test_share_text() {
        let merged = MergedFlavor {
            name: "Dr Pepper X Y Fusion".to_string(),
            description: "Desc.".to_string(),
            warning: WARNING.to_string(),
            rarity_score: 5,
            rarity: "5/10 (Illegal in 1 Dimensions)".to_string(),
            pairs_with: "Regret".to_string(),
        };
        assert_eq!(
            merged.share_text(),
            "I merged flavors in the Dr Pepper Flavor Merger!\n\nResult: Dr Pepper X Y Fusion\n\n\"Desc.\"\n\nTry it yourself: drpprdb.com/merger"
        );
    }
}
