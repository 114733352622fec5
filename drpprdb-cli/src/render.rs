//! Plain-text rendering of catalog views

use drpprdb_common::lab::TheoreticalFlavor;
use drpprdb_common::listing::ListingFilter;
use drpprdb_common::merge::MergedFlavor;
use drpprdb_common::models::{BodyType, RarityScore};
use drpprdb_common::pepperverse::{hover_excerpt, PepperverseMap};
use drpprdb_common::timeline::YearGroup;
use drpprdb_common::{Flavor, FlavorStore};

use crate::views::DetailView;

const CARD_NOTE_LIMIT: usize = 3;

/// Ten-star rarity bar: filled stars up to `score`, hollow after
pub fn rarity_stars(score: u8) -> String {
    (1..=RarityScore::MAX)
        .map(|i| if i <= score { '★' } else { '☆' })
        .collect()
}

/// First three notes, with a count of the rest
pub fn notes_excerpt(notes: &[String]) -> String {
    if notes.len() <= CARD_NOTE_LIMIT {
        return notes.join(", ");
    }
    format!(
        "{} (+{} more)",
        notes[..CARD_NOTE_LIMIT].join(", "),
        notes.len() - CARD_NOTE_LIMIT
    )
}

fn badges(flavor: &Flavor) -> String {
    let mut badges = vec![flavor.category.label().to_string()];
    badges.push(flavor.authenticity.label().to_string());
    if flavor.sugar_free {
        badges.push("Sugar Free".to_string());
    }
    if flavor.discontinued {
        badges.push("Discontinued".to_string());
    }
    badges
        .into_iter()
        .map(|b| format!("[{}]", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compact listing entry
pub fn card(flavor: &Flavor) -> String {
    let mut lines = vec![
        format!("{}  {}", flavor.name, badges(flavor)),
        format!(
            "  {} | {} | {}",
            flavor.id,
            flavor.release_year,
            rarity_stars(flavor.rarity_score.value())
        ),
    ];
    if !flavor.flavor_notes.is_empty() {
        lines.push(format!("  Notes: {}", notes_excerpt(&flavor.flavor_notes)));
    }
    lines.join("\n")
}

pub fn listing(flavors: &[&Flavor], filter: &ListingFilter, total: usize) -> String {
    if flavors.is_empty() {
        let mut lines = vec!["No flavors match your filters.".to_string()];
        if filter.is_active() {
            lines.push("Try clearing the search, status or category filters.".to_string());
        }
        return lines.join("\n");
    }

    let mut lines = vec![format!("Showing {} of {} flavors", flavors.len(), total)];
    for flavor in flavors {
        lines.push(String::new());
        lines.push(card(flavor));
    }
    lines.join("\n")
}

fn or_unknown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("Unknown")
}

pub fn detail(view: &DetailView<'_>) -> String {
    let flavor = view.flavor;
    let mut lines = vec![
        flavor.name.clone(),
        badges(flavor),
        String::new(),
        match &flavor.image_url {
            Some(url) => format!("Image:          {}", url),
            None => "Image:          [Dr] (no photo on file)".to_string(),
        },
        format!("Released:       {}", flavor.release_year),
        format!("Distribution:   {}", or_unknown(&flavor.distribution)),
        format!("Caffeine:       {}", or_unknown(&flavor.caffeine_content)),
    ];
    if let Some(region) = &flavor.region {
        lines.push(format!("Region:         {}", region));
    }
    lines.push(format!(
        "Rarity Score:   {} {}/{}",
        rarity_stars(flavor.rarity_score.value()),
        flavor.rarity_score,
        RarityScore::MAX
    ));
    lines.push(String::new());
    lines.push(format!("Flavor Notes:   {}", flavor.flavor_notes.join(", ")));
    lines.push(format!("Pairs Well With: {}", flavor.pairs_well_with.join(", ")));
    lines.push(String::new());
    lines.push("Archive Notes:".to_string());
    lines.push(format!("  \u{201c}{}\u{201d}", flavor.lore));
    lines.push("  - The Pepper Keepers Archives".to_string());
    lines.push(String::new());
    lines.push(format!(
        "<- Prev: {} ({})   Next: {} ({}) ->",
        view.previous.name, view.previous.id, view.next.name, view.next.id
    ));

    if !view.related.is_empty() {
        lines.push(String::new());
        lines.push("Related Flavors".to_string());
        for related in &view.related {
            lines.push(format!("  - {} ({})", related.name, related.id));
        }
    }
    lines.join("\n")
}

pub fn not_found(id: &str) -> String {
    [
        "Flavor Not Found".to_string(),
        format!("'{}' has been lost to dimensional drift.", id),
        "Run `drpprdb list` to return to the database.".to_string(),
    ]
    .join("\n")
}

pub fn timeline(groups: &[YearGroup<'_>]) -> String {
    if groups.is_empty() {
        return "No flavors on the timeline match your search.".to_string();
    }
    let mut lines = Vec::new();
    for group in groups {
        lines.push(group.year.clone());
        for flavor in &group.flavors {
            lines.push(format!(
                "  {}  [{}] [{}]",
                flavor.name, flavor.category, flavor.authenticity
            ));
        }
    }
    lines.join("\n")
}

fn body_heading(kind: BodyType) -> &'static str {
    match kind {
        BodyType::Planet => "Planets (Classic/Orbital)",
        BodyType::Comet => "Comets (Limited)",
        BodyType::Astral => "Astral Bodies",
        BodyType::BlackHole => "Falling into the Vendor Promotion Cycle (Discontinued)",
    }
}

pub fn pepperverse(map: &PepperverseMap<'_>) -> String {
    let mut lines = vec!["The Pepperverse: A Cosmological Taxonomy of Dr Pepper Flavors".to_string()];
    for kind in BodyType::ALL {
        let bucket = map.bucket(kind);
        if bucket.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(body_heading(kind).to_string());
        for flavor in bucket {
            let Some(position) = flavor.pepperverse_position else {
                continue;
            };
            lines.push(format!(
                "  ({:>4}, {:>4})  {}",
                position.x,
                position.y,
                flavor.short_name()
            ));
            lines.push(format!("      {}", hover_excerpt(&flavor.lore)));
        }
    }
    lines.join("\n")
}

pub fn merged(result: &MergedFlavor, a: &Flavor, b: &Flavor) -> String {
    [
        format!("{} + {}", a.name, b.name),
        String::new(),
        result.name.clone(),
        result.description.clone(),
        String::new(),
        format!("Rarity:     {}", result.rarity),
        format!("Pairs with: {}", result.pairs_with),
        String::new(),
        result.warning.clone(),
    ]
    .join("\n")
}

pub fn lab(entries: &[&TheoreticalFlavor]) -> String {
    if entries.is_empty() {
        return "No theoretical flavors with that status.".to_string();
    }
    let mut lines = vec!["The Theoretical Flavors Laboratory".to_string()];
    for entry in entries {
        lines.push(String::new());
        lines.push(format!("{}  [{}]", entry.name, entry.status));
        lines.push(format!("  {}", entry.description));
        lines.push(format!("  Why it can't exist: {}", entry.why_cant_exist));
        lines.push(format!("  Proposed by: {}", entry.proposed_by));
    }
    lines.join("\n")
}

pub fn info(store: &FlavorStore) -> String {
    let updated = store
        .last_updated_date()
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| store.last_updated().to_string());
    [
        "The Dr Pepper Database".to_string(),
        format!("Dataset version: {}", store.version()),
        format!("Last updated:    {}", updated),
        format!("Flavors:         {}", store.len()),
    ]
    .join("\n")
}
