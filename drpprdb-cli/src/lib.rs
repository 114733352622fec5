//! drpprdb library - command-line browser for the Dr Pepper flavor database
//!
//! Every subcommand is a read-only view over the flavor store. Commands
//! render to a string so they can be exercised without a terminal.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use drpprdb_common::config::TomlConfig;
use drpprdb_common::lab::{theoretical_flavors, LabStatus};
use drpprdb_common::listing::{ListingFilter, Status};
use drpprdb_common::merge::merge_flavors;
use drpprdb_common::pepperverse::{render_svg, PepperverseMap};
use drpprdb_common::random::{RandomSource, RngSource};
use drpprdb_common::timeline::{group_by_year, search_timeline};
use drpprdb_common::{Category, Flavor, FlavorStore};

pub mod render;
pub mod views;

use views::{DatasetInfo, DetailView, NotFoundBody};

/// Exit status used when a requested flavor does not exist
pub const NOT_FOUND_EXIT_CODE: i32 = 2;

/// Merge argument that picks a random flavor for that side
pub const RANDOM_PICK: &str = "random";

#[derive(Debug, Parser)]
#[command(name = "drpprdb", version, about = "Browse the Dr Pepper flavor database")]
pub struct Cli {
    /// Dataset file to load instead of the embedded one
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Config file (default: platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List flavors, optionally filtered
    List {
        /// Case-insensitive text matched against name, lore and flavor notes
        #[arg(long)]
        search: Option<String>,
        /// current or discontinued (repeatable)
        #[arg(long)]
        status: Vec<Status>,
        /// Classic, Seasonal, Experimental or Forbidden (repeatable)
        #[arg(long)]
        category: Vec<Category>,
    },
    /// Show one flavor in detail
    Show {
        id: String,
        /// Number of related flavors to show
        #[arg(long)]
        related: Option<usize>,
    },
    /// Show a random flavor
    Random {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List every flavor in a category
    Category { category: Category },
    /// Flavors grouped by release year, newest first
    Timeline {
        #[arg(long)]
        search: Option<String>,
    },
    /// The Pepperverse map
    Map {
        /// Emit an SVG document
        #[arg(long)]
        svg: bool,
        /// Label markers in the SVG
        #[arg(long)]
        labels: bool,
    },
    /// Merge two flavors into a new (fictional) one
    ///
    /// Either id may be `random` to let the dice pick that side.
    Merge {
        first: String,
        second: String,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Theoretical flavors that cannot exist
    Lab {
        #[arg(long)]
        status: Option<LabStatus>,
    },
    /// Dataset version and size
    Info,
}

/// Rendered command result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(String),
    NotFound(String),
}

impl Outcome {
    pub fn body(&self) -> &str {
        match self {
            Outcome::Found(body) | Outcome::NotFound(body) => body,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Found(_) => 0,
            Outcome::NotFound(_) => NOT_FOUND_EXIT_CODE,
        }
    }
}

/// Options shared by all commands
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub json: bool,
    pub related_count: usize,
}

impl RunOptions {
    pub fn from_config(config: &TomlConfig, json: bool) -> Self {
        Self {
            json,
            related_count: config.related_count,
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::from_entropy()),
    }
}

fn not_found(id: &str, options: &RunOptions) -> anyhow::Result<Outcome> {
    debug!("Flavor '{}' not found", id);
    let body = if options.json {
        to_json(&NotFoundBody::new(id))?
    } else {
        render::not_found(id)
    };
    Ok(Outcome::NotFound(body))
}

/// Look up one side of a merge; `random` draws from the store unless a
/// flavor actually has that id
fn merge_side<'a>(
    store: &'a FlavorStore,
    id: &str,
    source: &mut dyn RandomSource,
) -> anyhow::Result<Option<&'a Flavor>> {
    match store.get_by_id(id) {
        Some(flavor) => Ok(Some(flavor)),
        None if id.eq_ignore_ascii_case(RANDOM_PICK) => {
            let flavor = store.get_random(source)?;
            debug!("Random merge pick: {}", flavor.id);
            Ok(Some(flavor))
        }
        None => Ok(None),
    }
}

fn show(store: &FlavorStore, id: &str, related: usize, options: &RunOptions) -> anyhow::Result<Outcome> {
    let Some(view) = DetailView::build(store, id, related) else {
        return not_found(id, options);
    };
    let body = if options.json {
        to_json(&view)?
    } else {
        render::detail(&view)
    };
    Ok(Outcome::Found(body))
}

/// Run one command against the store
pub fn execute(command: &Command, store: &FlavorStore, options: &RunOptions) -> anyhow::Result<Outcome> {
    let body = match command {
        Command::List {
            search,
            status,
            category,
        } => {
            let mut filter = ListingFilter::new();
            if let Some(search) = search {
                filter = filter.with_search(search.clone());
            }
            for s in status {
                filter = filter.with_status(*s);
            }
            for c in category {
                filter = filter.with_category(*c);
            }
            let results = filter.apply(store.get_all());
            debug!("Listing: {} of {} flavors", results.len(), store.len());
            if options.json {
                to_json(&results)?
            } else {
                render::listing(&results, &filter, store.len())
            }
        }
        Command::Show { id, related } => {
            return show(store, id, related.unwrap_or(options.related_count), options);
        }
        Command::Random { seed } => {
            let mut source = random_source(*seed);
            let flavor = store.get_random(source.as_mut())?;
            return show(store, &flavor.id, options.related_count, options);
        }
        Command::Category { category } => {
            let results = store.get_by_category(*category);
            if options.json {
                to_json(&results)?
            } else {
                let filter = ListingFilter::new().with_category(*category);
                render::listing(&results, &filter, store.len())
            }
        }
        Command::Timeline { search } => {
            let groups = group_by_year(store.get_all());
            let groups = match search {
                Some(query) => search_timeline(&groups, query),
                None => groups,
            };
            if options.json {
                to_json(&groups)?
            } else {
                render::timeline(&groups)
            }
        }
        Command::Map { svg, labels } => {
            let map = PepperverseMap::project(store.get_all());
            if *svg {
                render_svg(&map, *labels)
            } else if options.json {
                to_json(&map)?
            } else {
                render::pepperverse(&map)
            }
        }
        Command::Merge {
            first,
            second,
            seed,
        } => {
            let mut source = random_source(*seed);
            let Some(a) = merge_side(store, first, source.as_mut())? else {
                return not_found(first, options);
            };
            let Some(b) = merge_side(store, second, source.as_mut())? else {
                return not_found(second, options);
            };
            let result = merge_flavors(a, b, source.as_mut());
            if options.json {
                to_json(&result)?
            } else {
                render::merged(&result, a, b)
            }
        }
        Command::Lab { status } => {
            let entries = theoretical_flavors(*status);
            if options.json {
                to_json(&entries)?
            } else {
                render::lab(&entries)
            }
        }
        Command::Info => {
            if options.json {
                to_json(&DatasetInfo::from_store(store))?
            } else {
                render::info(store)
            }
        }
    };
    Ok(Outcome::Found(body))
}
