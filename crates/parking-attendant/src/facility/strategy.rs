use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::lot::Lot;

/// Chooses which of the currently available lots receives the next vehicle.
pub trait LotSelector {
    /// Index into `candidates` of the chosen lot, or `None` when there is nothing to choose from.
    fn select(&self, candidates: &[&Lot]) -> Option<usize>;

    fn name(&self) -> &'static str;
}

/// Takes the head of the candidate list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstAvailable;

/// Prefers the lot with the largest static capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighestCapacity;

/// Prefers the lot with the most unoccupied spaces right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighestFreeSpace;

impl LotSelector for FirstAvailable {
    fn select(&self, candidates: &[&Lot]) -> Option<usize> {
        if candidates.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    fn name(&self) -> &'static str {
        ParkingStrategy::FirstAvailable.label()
    }
}

impl LotSelector for HighestCapacity {
    fn select(&self, candidates: &[&Lot]) -> Option<usize> {
        first_maximum(candidates, Lot::compare_capacity)
    }

    fn name(&self) -> &'static str {
        ParkingStrategy::HighestCapacity.label()
    }
}

impl LotSelector for HighestFreeSpace {
    fn select(&self, candidates: &[&Lot]) -> Option<usize> {
        first_maximum(candidates, Lot::compare_free_space)
    }

    fn name(&self) -> &'static str {
        ParkingStrategy::HighestFreeSpace.label()
    }
}

/// Earliest candidate that no later candidate beats, i.e. the head of a stable descending sort.
fn first_maximum(candidates: &[&Lot], compare: fn(&Lot, &Lot) -> Ordering) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        match best {
            Some(current) if compare(candidate, candidates[current]) != Ordering::Greater => {}
            _ => best = Some(index),
        }
    }
    best
}

/// Named strategy, convenient for configuration and user requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParkingStrategy {
    #[default]
    FirstAvailable,
    HighestCapacity,
    HighestFreeSpace,
}

impl ParkingStrategy {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::FirstAvailable,
            Self::HighestCapacity,
            Self::HighestFreeSpace,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstAvailable => "first-available",
            Self::HighestCapacity => "highest-capacity",
            Self::HighestFreeSpace => "highest-free-space",
        }
    }
}

impl LotSelector for ParkingStrategy {
    fn select(&self, candidates: &[&Lot]) -> Option<usize> {
        match self {
            Self::FirstAvailable => FirstAvailable.select(candidates),
            Self::HighestCapacity => HighestCapacity.select(candidates),
            Self::HighestFreeSpace => HighestFreeSpace.select(candidates),
        }
    }

    fn name(&self) -> &'static str {
        self.label()
    }
}

impl fmt::Display for ParkingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown parking strategy '{0}'")]
pub struct UnknownStrategy(pub String);

impl FromStr for ParkingStrategy {
    type Err = UnknownStrategy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "first-available" | "first" | "fa" => Ok(Self::FirstAvailable),
            "highest-capacity" | "capacity" | "hc" => Ok(Self::HighestCapacity),
            "highest-free-space" | "free-space" | "hf" => Ok(Self::HighestFreeSpace),
            _ => Err(UnknownStrategy(value.trim().to_owned())),
        }
    }
}
