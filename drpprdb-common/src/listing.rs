//! Listing view filters
//!
//! A [`ListingFilter`] holds the three independent predicate groups of the
//! browse view: free-text search, shelf status and category. Groups combine
//! with AND; the values selected inside a group combine with OR. A group with
//! nothing selected does not filter at all.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{Category, Flavor};
use crate::Error;

/// Shelf status selectable in the listing filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Current,
    Discontinued,
}

impl Status {
    pub fn matches(&self, flavor: &Flavor) -> bool {
        match self {
            Status::Current => !flavor.discontinued,
            Status::Discontinued => flavor.discontinued,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Current => "current",
            Status::Discontinued => "discontinued",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "current" => Ok(Status::Current),
            "discontinued" => Ok(Status::Discontinued),
            other => Err(Error::InvalidInput(format!("Unknown status: {}", other))),
        }
    }
}

/// Case-insensitive substring match on name, lore or any flavor note
pub fn matches_search(flavor: &Flavor, query: &str) -> bool {
    let query = query.to_lowercase();
    flavor.name.to_lowercase().contains(&query)
        || flavor.lore.to_lowercase().contains(&query)
        || flavor
            .flavor_notes
            .iter()
            .any(|note| note.to_lowercase().contains(&query))
}

/// Browse-view filter state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFilter {
    /// Free-text query; empty disables the search group
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub statuses: Vec<Status>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl ListingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        if !self.statuses.contains(&status) {
            self.statuses.push(status);
        }
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
        self
    }

    /// Select the status if unselected, otherwise deselect it
    pub fn toggle_status(&mut self, status: Status) {
        if let Some(pos) = self.statuses.iter().position(|s| *s == status) {
            self.statuses.remove(pos);
        } else {
            self.statuses.push(status);
        }
    }

    /// Select the category if unselected, otherwise deselect it
    pub fn toggle_category(&mut self, category: Category) {
        if let Some(pos) = self.categories.iter().position(|c| *c == category) {
            self.categories.remove(pos);
        } else {
            self.categories.push(category);
        }
    }

    /// Reset all three groups
    pub fn clear(&mut self) {
        self.search.clear();
        self.statuses.clear();
        self.categories.clear();
    }

    /// True when any group would narrow the listing
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.statuses.is_empty() || !self.categories.is_empty()
    }

    pub fn matches(&self, flavor: &Flavor) -> bool {
        if !self.search.is_empty() && !matches_search(flavor, &self.search) {
            return false;
        }

        if !self.statuses.is_empty() && !self.statuses.iter().any(|s| s.matches(flavor)) {
            return false;
        }

        if !self.categories.is_empty() && !self.categories.contains(&flavor.category) {
            return false;
        }

        true
    }

    /// Flavors passing every active group, in their original order
    pub fn apply<'a>(&self, flavors: &'a [Flavor]) -> Vec<&'a Flavor> {
        flavors.iter().filter(|f| self.matches(f)).collect()
    }
}
