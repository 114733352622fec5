//! Theoretical flavors laboratory
//!
//! A fixed archive of proposed flavors that cannot exist. Not part of the
//! dataset; the list lives in code and is only ever filtered by status.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LabStatus {
    #[serde(rename = "Physics-Defying")]
    PhysicsDefying,
    #[serde(rename = "Legally Questionable")]
    LegallyQuestionable,
    #[serde(rename = "Dimensionally Unstable")]
    DimensionallyUnstable,
    #[serde(rename = "Just a Bad Idea")]
    JustABadIdea,
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "Theoretically Impossible")]
    TheoreticallyImpossible,
}

impl LabStatus {
    /// Statuses in filter-bar order
    pub const ALL: [LabStatus; 6] = [
        LabStatus::PhysicsDefying,
        LabStatus::LegallyQuestionable,
        LabStatus::DimensionallyUnstable,
        LabStatus::JustABadIdea,
        LabStatus::UnderReview,
        LabStatus::TheoreticallyImpossible,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LabStatus::PhysicsDefying => "Physics-Defying",
            LabStatus::LegallyQuestionable => "Legally Questionable",
            LabStatus::DimensionallyUnstable => "Dimensionally Unstable",
            LabStatus::JustABadIdea => "Just a Bad Idea",
            LabStatus::UnderReview => "Under Review",
            LabStatus::TheoreticallyImpossible => "Theoretically Impossible",
        }
    }
}

impl fmt::Display for LabStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LabStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', '_'], " ");
        LabStatus::ALL
            .into_iter()
            .find(|status| status.label().to_lowercase().replace('-', " ") == wanted)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown lab status: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TheoreticalFlavor {
    pub name: &'static str,
    pub status: LabStatus,
    pub description: &'static str,
    pub why_cant_exist: &'static str,
    pub proposed_by: &'static str,
}

pub const THEORETICAL_FLAVORS: &[TheoreticalFlavor] = &[
    TheoreticalFlavor {
        name: "Dr Pepper Quantum Foam",
        status: LabStatus::TheoreticallyImpossible,
        description: "A flavor that exists in superposition until observed. Schrodinger refused to comment.",
        why_cant_exist: "Violates Heisenberg's Flavor Uncertainty Principle",
        proposed_by: "Dr. Fizz, 2019",
    },
    TheoreticalFlavor {
        name: "Dr Pepper Reverse Osmosis",
        status: LabStatus::LegallyQuestionable,
        description: "Removes flavor while adding carbonation. Banned in 47 states, encouraged in 3.",
        why_cant_exist: "FDA said no",
        proposed_by: "Anonymous, 2021",
    },
    TheoreticalFlavor {
        name: "Dr Pepper Singularity",
        status: LabStatus::DimensionallyUnstable,
        description: "Contains all possible Dr Pepper flavors compressed into a single point of infinite density.",
        why_cant_exist: "Would collapse into a black hole upon opening",
        proposed_by: "The Pepper Keepers (classified), 2015",
    },
    TheoreticalFlavor {
        name: "Dr Pepper Absolute Zero",
        status: LabStatus::PhysicsDefying,
        description: "Achieves temperatures below absolute zero while remaining liquid. Tastes like the absence of taste.",
        why_cant_exist: "Thermodynamically impossible and also probably just ice",
        proposed_by: "Lab Technician #7, 2020",
    },
    TheoreticalFlavor {
        name: "Dr Pepper Recursion",
        status: LabStatus::UnderReview,
        description: "Each sip contains a smaller version of itself. See: Dr Pepper Recursion.",
        why_cant_exist: "Stack overflow error in reality",
        proposed_by: "Anonymous Developer, 2022",
    },
    TheoreticalFlavor {
        name: "Dr Pepper Antimatter",
        status: LabStatus::TheoreticallyImpossible,
        description: "The opposite of Dr Pepper. Would annihilate normal Dr Pepper on contact.",
        why_cant_exist: "Would destroy the universe if it contacted regular Dr Pepper",
        proposed_by: "CERN Cafeteria, 2017",
    },
    TheoreticalFlavor {
        name: "Dr Pepper Placebo",
        status: LabStatus::JustABadIdea,
        description: "Contains no Dr Pepper. Just water. Tastes like disappointment.",
        why_cant_exist: "Already exists (it is just water)",
        proposed_by: "Marketing Department, 2018",
    },
    TheoreticalFlavor {
        name: "Dr Pepper Imaginary",
        status: LabStatus::PhysicsDefying,
        description: "Exists only on the complex plane. Requires imaginary taste buds to experience.",
        why_cant_exist: "Cannot be bottled in three-dimensional space",
        proposed_by: "Mathematics Department, 2019",
    },
];

/// Theoretical flavors with the given status, or all of them for `None`
pub fn theoretical_flavors(status: Option<LabStatus>) -> Vec<&'static TheoreticalFlavor> {
    THEORETICAL_FLAVORS
        .iter()
        .filter(|f| status.map_or(true, |s| f.status == s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_returns_full_list_in_order() {
        let all = theoretical_flavors(None);
        assert_eq!(all.len(), 8);
        assert_eq!(all[0].name, "Dr Pepper Quantum Foam");
        assert_eq!(all[7].name, "Dr Pepper Imaginary");
    }

    #[test]
    fn test_filter_by_status() {
        let physics: Vec<&str> = theoretical_flavors(Some(LabStatus::PhysicsDefying))
            .iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(physics, vec!["Dr Pepper Absolute Zero", "Dr Pepper Imaginary"]);
    }

    #[test]
    fn test_every_status_has_an_entry() {
        for status in LabStatus::ALL {
            assert!(!theoretical_flavors(Some(status)).is_empty(), "{}", status);
        }
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "physics-defying".parse::<LabStatus>().unwrap(),
            LabStatus::PhysicsDefying
        );
        assert_eq!(
            "just a bad idea".parse::<LabStatus>().unwrap(),
            LabStatus::JustABadIdea
        );
        assert_eq!(
            "under_review".parse::<LabStatus>().unwrap(),
            LabStatus::UnderReview
        );
        assert!("plausible".parse::<LabStatus>().is_err());
    }
}
