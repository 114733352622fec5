//! Query layer over the flavor store
//!
//! Every query is a read-only scan of the store in dataset order. Results
//! borrow from the store.

use std::collections::HashSet;
use tracing::debug;

use crate::models::{Category, Flavor};
use crate::random::RandomSource;
use crate::store::FlavorStore;
use crate::{Error, Result};

/// Number of related flavors shown on the detail view
pub const DEFAULT_RELATED_COUNT: usize = 4;

/// Previous and next flavor in dataset order, wrapping at both ends
#[derive(Debug, Clone, Copy)]
pub struct Neighbors<'a> {
    pub previous: &'a Flavor,
    pub next: &'a Flavor,
}

impl FlavorStore {
    /// Full list in dataset order
    pub fn get_all(&self) -> &[Flavor] {
        self.flavors()
    }

    /// First flavor with the given id
    pub fn get_by_id(&self, id: &str) -> Option<&Flavor> {
        self.flavors().iter().find(|f| f.id == id)
    }

    /// Like [`get_by_id`](Self::get_by_id) but reports a miss as [`Error::NotFound`]
    pub fn require(&self, id: &str) -> Result<&Flavor> {
        self.get_by_id(id)
            .ok_or_else(|| Error::NotFound(format!("flavor '{}'", id)))
    }

    /// Uniformly random flavor
    pub fn get_random<S>(&self, source: &mut S) -> Result<&Flavor>
    where
        S: RandomSource + ?Sized,
    {
        crate::random::choose(source, self.flavors()).ok_or(Error::EmptyStore)
    }

    /// All flavors in a category, dataset order preserved
    pub fn get_by_category(&self, category: Category) -> Vec<&Flavor> {
        self.flavors()
            .iter()
            .filter(|f| f.category == category)
            .collect()
    }

    /// Flavors related to `flavor`, at most `count`
    ///
    /// Same-category flavors come first. When there are fewer than `count`
    /// of them, flavors sharing the same authenticity level fill the rest.
    /// The reference flavor is never included and the result may be shorter
    /// than `count` on a small store.
    pub fn get_related(&self, flavor: &Flavor, count: usize) -> Vec<&Flavor> {
        let same_category: Vec<&Flavor> = self
            .flavors()
            .iter()
            .filter(|f| f.id != flavor.id && f.category == flavor.category)
            .collect();

        if same_category.len() >= count {
            return same_category.into_iter().take(count).collect();
        }

        let same_authenticity = self
            .flavors()
            .iter()
            .filter(|f| f.id != flavor.id && f.authenticity == flavor.authenticity);

        let mut seen: HashSet<&str> = HashSet::new();
        let mut related: Vec<&Flavor> = Vec::new();
        for f in same_category.into_iter().chain(same_authenticity) {
            if related.len() == count {
                break;
            }
            if seen.insert(f.id.as_str()) {
                related.push(f);
            }
        }

        debug!(
            "Related to '{}': {} of {} requested",
            flavor.id,
            related.len(),
            count
        );
        related
    }

    /// Previous/next navigation around the flavor with `id`
    pub fn neighbors(&self, id: &str) -> Option<Neighbors<'_>> {
        let flavors = self.flavors();
        let index = flavors.iter().position(|f| f.id == id)?;
        let previous = if index == 0 {
            flavors.last()?
        } else {
            &flavors[index - 1]
        };
        let next = &flavors[(index + 1) % flavors.len()];
        Some(Neighbors { previous, next })
    }
}
