//! Timeline projection: flavors grouped by release year, newest first

use serde::Serialize;

use crate::models::Flavor;

/// Flavors sharing one release-year key
#[derive(Debug, Clone, Serialize)]
pub struct YearGroup<'a> {
    /// Release year exactly as rendered from the dataset, e.g. "1923 (disputed)"
    pub year: String,
    pub flavors: Vec<&'a Flavor>,
}

/// Integer prefix of a year key
///
/// Leading whitespace and a sign are accepted and anything after the digits
/// is ignored, so "1923 (disputed)" sorts as 1923. Prefixes too long for
/// `i64` saturate. Keys without digits yield `None`.
pub fn year_sort_key(key: &str) -> Option<i64> {
    let trimmed = key.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    // too many digits for i64 still sorts as a (very late) year
    let n = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * n)
}

/// Group flavors by release year
///
/// Groups are ordered by descending year prefix; groups with the same prefix
/// keep the order in which their key first appeared, and keys without a
/// numeric prefix come last. Flavors inside a group keep dataset order.
pub fn group_by_year(flavors: &[Flavor]) -> Vec<YearGroup<'_>> {
    let mut groups: Vec<YearGroup<'_>> = Vec::new();
    for flavor in flavors {
        let key = flavor.release_year.to_string();
        match groups.iter_mut().find(|g| g.year == key) {
            Some(group) => group.flavors.push(flavor),
            None => groups.push(YearGroup {
                year: key,
                flavors: vec![flavor],
            }),
        }
    }

    // stable sort keeps encounter order for equal prefixes
    groups.sort_by(|a, b| {
        match (year_sort_key(&a.year), year_sort_key(&b.year)) {
            (Some(ya), Some(yb)) => yb.cmp(&ya),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
    });
    groups
}

/// Case-insensitive substring match on name, lore or category
pub fn matches_timeline_search(flavor: &Flavor, query: &str) -> bool {
    let query = query.to_lowercase();
    flavor.name.to_lowercase().contains(&query)
        || flavor.lore.to_lowercase().contains(&query)
        || flavor.category.label().to_lowercase().contains(&query)
}

/// Narrow each group to matching flavors and drop groups left empty
///
/// An empty query returns the groups unchanged.
pub fn search_timeline<'a>(groups: &[YearGroup<'a>], query: &str) -> Vec<YearGroup<'a>> {
    if query.is_empty() {
        return groups.to_vec();
    }
    groups
        .iter()
        .filter_map(|group| {
            let flavors: Vec<&'a Flavor> = group
                .flavors
                .iter()
                .copied()
                .filter(|f| matches_timeline_search(f, query))
                .collect();
            if flavors.is_empty() {
                None
            } else {
                Some(YearGroup {
                    year: group.year.clone(),
                    flavors,
                })
            }
        })
        .collect()
}
