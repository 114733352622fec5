//! View composition for the detail and info screens

use serde::Serialize;

use drpprdb_common::{Flavor, FlavorStore};

/// Everything the detail screen shows for one flavor
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView<'a> {
    pub flavor: &'a Flavor,
    /// Previous flavor in dataset order (wraps to the last one)
    pub previous: &'a Flavor,
    /// Next flavor in dataset order (wraps to the first one)
    pub next: &'a Flavor,
    pub related: Vec<&'a Flavor>,
}

impl<'a> DetailView<'a> {
    /// `None` when `id` is not in the store
    pub fn build(store: &'a FlavorStore, id: &str, related_count: usize) -> Option<Self> {
        let flavor = store.get_by_id(id)?;
        let neighbors = store.neighbors(id)?;
        Some(Self {
            flavor,
            previous: neighbors.previous,
            next: neighbors.next,
            related: store.get_related(flavor, related_count),
        })
    }
}

/// Dataset summary
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetInfo<'a> {
    pub version: &'a str,
    pub last_updated: &'a str,
    pub flavor_count: usize,
    pub discontinued_count: usize,
    pub sugar_free_count: usize,
}

impl<'a> DatasetInfo<'a> {
    pub fn from_store(store: &'a FlavorStore) -> Self {
        let flavors = store.get_all();
        Self {
            version: store.version(),
            last_updated: store.last_updated(),
            flavor_count: flavors.len(),
            discontinued_count: flavors.iter().filter(|f| f.discontinued).count(),
            sugar_free_count: flavors.iter().filter(|f| f.sugar_free).count(),
        }
    }
}

/// JSON body for a missing flavor
#[derive(Debug, Serialize)]
pub struct NotFoundBody<'a> {
    pub error: &'static str,
    pub id: &'a str,
}

impl<'a> NotFoundBody<'a> {
    pub fn new(id: &'a str) -> Self {
        Self {
            error: "Flavor Not Found",
            id,
        }
    }
}
