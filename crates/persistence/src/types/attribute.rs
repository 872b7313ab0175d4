//! Attribute values and the [`Entity`] trait.
//!
//! Every catalogue entity declares the dotted attribute paths it exposes
//! (`Id`, `Type`, `Country.Name`, ...). Specifications and sort instructions
//! address entities only through those paths, so a typo is caught when the
//! query is built instead of silently matching nothing.

use std::cmp::Ordering;
use std::fmt;

use uuid::Uuid;

/// A single attribute value read from an entity.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Absent optional value. Sorts before everything else.
    Null,
    /// Whole number.
    Integer(i64),
    /// Floating point number.
    Decimal(f64),
    /// Free text.
    Text(String),
    /// Identifier.
    Uuid(Uuid),
}

impl AttributeValue {
    /// Returns true if this is [`AttributeValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    /// Case-insensitive comparison of the rendered value against `other`.
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        match self {
            AttributeValue::Null => false,
            AttributeValue::Text(s) => s.to_lowercase() == other.to_lowercase(),
            value => value.to_string().to_lowercase() == other.to_lowercase(),
        }
    }

    /// Case-insensitive substring test on the rendered value.
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        match self {
            AttributeValue::Null => false,
            value => value
                .to_string()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }

    /// Total order used by sort instructions.
    ///
    /// Values of the same kind compare naturally (text case-insensitively,
    /// with the raw text as a tiebreak). Integers and decimals compare
    /// numerically with each other. Mixed kinds fall back to a fixed rank.
    pub fn compare(&self, other: &Self) -> Ordering {
        use AttributeValue::*;

        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Integer(a), Integer(b)) => a.cmp(b),
            (Decimal(a), Decimal(b)) => a.total_cmp(b),
            (Integer(a), Decimal(b)) => (*a as f64).total_cmp(b),
            (Decimal(a), Integer(b)) => a.total_cmp(&(*b as f64)),
            (Text(a), Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (Uuid(a), Uuid(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            AttributeValue::Null => 0,
            AttributeValue::Integer(_) | AttributeValue::Decimal(_) => 1,
            AttributeValue::Text(_) => 2,
            AttributeValue::Uuid(_) => 3,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Null => write!(f, "null"),
            AttributeValue::Integer(v) => write!(f, "{}", v),
            AttributeValue::Decimal(v) => write!(f, "{}", v),
            AttributeValue::Text(v) => write!(f, "{}", v),
            AttributeValue::Uuid(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<&String> for AttributeValue {
    fn from(value: &String) -> Self {
        AttributeValue::Text(value.clone())
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Integer(i64::from(value))
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Decimal(value)
    }
}

impl From<Uuid> for AttributeValue {
    fn from(value: Uuid) -> Self {
        AttributeValue::Uuid(value)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttributeValue::Null, Into::into)
    }
}

/// A storable catalogue entity.
///
/// Implementors declare their attribute paths once in [`Entity::ATTRIBUTES`];
/// [`Entity::attribute`] must return `Some` for exactly those paths.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Resource type name used in errors and logs.
    const RESOURCE_TYPE: &'static str;

    /// Every attribute path this entity answers to, in canonical spelling.
    const ATTRIBUTES: &'static [&'static str];

    /// The entity identifier.
    fn id(&self) -> Uuid;

    /// Reads the attribute at `path`. Returns `None` for undeclared paths.
    fn attribute(&self, path: &str) -> Option<AttributeValue>;

    /// Resolves a path case-insensitively to its canonical spelling.
    fn resolve_attribute(path: &str) -> Option<&'static str> {
        let path = path.trim();
        Self::ATTRIBUTES
            .iter()
            .copied()
            .find(|candidate| candidate.eq_ignore_ascii_case(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_compare_ignores_case() {
        let a = AttributeValue::from("canada");
        let b = AttributeValue::from("Japan");
        assert_eq!(a.compare(&b), Ordering::Less);
    }

    #[test]
    fn test_null_sorts_first() {
        let null = AttributeValue::Null;
        assert_eq!(null.compare(&AttributeValue::from(1)), Ordering::Less);
        assert_eq!(AttributeValue::from("a").compare(&null), Ordering::Greater);
    }

    #[test]
    fn test_numbers_compare_across_kinds() {
        assert_eq!(
            AttributeValue::from(2).compare(&AttributeValue::from(2.5)),
            Ordering::Less
        );
    }

    #[test]
    fn test_eq_and_contains_ignore_case() {
        let value = AttributeValue::from("United States of America");
        assert!(value.eq_ignore_case("united states of america"));
        assert!(value.contains_ignore_case("STATES"));
        assert!(!value.contains_ignore_case("Canada"));
        assert!(!AttributeValue::Null.contains_ignore_case(""));
    }

    #[test]
    fn test_option_conversion() {
        assert!(AttributeValue::from(None::<f64>).is_null());
        assert_eq!(
            AttributeValue::from(Some(3.5)),
            AttributeValue::Decimal(3.5)
        );
    }
}
