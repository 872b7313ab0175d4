//! Sort instructions evaluated by storage backends.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{AttributeValue, Entity};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Ascending,
    /// Descending order.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Parses `asc`/`desc`, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

/// One comparison step: an attribute path and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortInstruction {
    /// Attribute path on the entity, e.g. `Country.Name`.
    pub path: String,
    /// The sort direction.
    pub direction: SortDirection,
}

impl SortInstruction {
    /// Creates a sort instruction.
    pub fn new(path: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            path: path.into(),
            direction,
        }
    }

    /// Ascending sort on `path`.
    pub fn ascending(path: impl Into<String>) -> Self {
        Self::new(path, SortDirection::Ascending)
    }

    /// Descending sort on `path`.
    pub fn descending(path: impl Into<String>) -> Self {
        Self::new(path, SortDirection::Descending)
    }
}

impl fmt::Display for SortInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.direction)
    }
}

/// Compares two entities by a list of sort instructions, left to right.
///
/// Later instructions only break ties left by earlier ones. Paths the entity
/// does not declare compare as null.
pub fn compare_entities<E: Entity>(a: &E, b: &E, instructions: &[SortInstruction]) -> Ordering {
    for instruction in instructions {
        let left = a.attribute(&instruction.path).unwrap_or(AttributeValue::Null);
        let right = b.attribute(&instruction.path).unwrap_or(AttributeValue::Null);
        let ordering = match instruction.direction {
            SortDirection::Ascending => left.compare(&right),
            SortDirection::Descending => right.compare(&left),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
