//! # drpprdb Common Library
//!
//! Catalog core for the Dr Pepper flavor database:
//! - Flavor data model and the read-only flavor store
//! - Query layer (lookup, random pick, category, related flavors)
//! - Derived views: listing filter, timeline, Pepperverse map, flavor merger
//! - Theoretical flavors lab
//! - Configuration loading

pub mod config;
pub mod error;
pub mod lab;
pub mod listing;
pub mod merge;
pub mod models;
pub mod pepperverse;
pub mod query;
pub mod random;
pub mod store;
pub mod timeline;

#[cfg(test)]
mod test_support;

pub use error::{Error, Result};
pub use models::{Authenticity, BodyType, Category, Flavor, FlavorDatabase};
pub use store::FlavorStore;
