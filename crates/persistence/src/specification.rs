//! Composable entity specifications.
//!
//! A [`Specification`] describes which entities match, independent of where
//! they are stored. It can be evaluated in memory with
//! [`Specification::is_satisfied_by`], or handed to a backend as a [`Filter`]
//! expression tree that the backend translates into its own query language.
//!
//! Attribute paths are checked against [`Entity::ATTRIBUTES`] when the
//! specification is built, so evaluation never meets an unknown path.
//!
//! ```
//! use recollectable_persistence::entities::Coin;
//! use recollectable_persistence::specification::Specification;
//!
//! let spec = Specification::<Coin>::equals_ignore_case("Type", "dollars")?
//!     .and(Specification::contains_ignore_case("Country.Name", "america")?);
//!
//! assert!(Specification::<Coin>::equals("Colour", "red").is_err());
//! # Ok::<(), recollectable_persistence::StorageError>(())
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::Not;

use uuid::Uuid;

use crate::error::{StorageError, StorageResult};
use crate::types::{AttributeValue, Entity};

/// Backend-neutral filter expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Matches every entity.
    All,
    /// Matches the entity with this identifier.
    IdEquals(Uuid),
    /// Exact equality on an attribute.
    Equals {
        path: &'static str,
        value: AttributeValue,
    },
    /// Case-insensitive equality on the rendered attribute.
    EqualsIgnoreCase { path: &'static str, value: String },
    /// Case-insensitive substring match on the rendered attribute.
    ContainsIgnoreCase { path: &'static str, value: String },
    /// Both operands match.
    And(Box<Filter>, Box<Filter>),
    /// Either operand matches.
    Or(Box<Filter>, Box<Filter>),
    /// The operand does not match.
    Not(Box<Filter>),
}

impl Filter {
    /// Evaluates the expression against an entity.
    pub fn evaluate<E: Entity>(&self, entity: &E) -> bool {
        match self {
            Filter::All => true,
            Filter::IdEquals(id) => entity.id() == *id,
            Filter::Equals { path, value } => entity
                .attribute(path)
                .is_some_and(|actual| actual == *value),
            Filter::EqualsIgnoreCase { path, value } => entity
                .attribute(path)
                .is_some_and(|actual| actual.eq_ignore_case(value)),
            Filter::ContainsIgnoreCase { path, value } => entity
                .attribute(path)
                .is_some_and(|actual| actual.contains_ignore_case(value)),
            Filter::And(left, right) => left.evaluate(entity) && right.evaluate(entity),
            Filter::Or(left, right) => left.evaluate(entity) || right.evaluate(entity),
            Filter::Not(inner) => !inner.evaluate(entity),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "true"),
            Filter::IdEquals(id) => write!(f, "Id = {}", id),
            Filter::Equals { path, value } => write!(f, "{} = {}", path, value),
            Filter::EqualsIgnoreCase { path, value } => write!(f, "{} ~= '{}'", path, value),
            Filter::ContainsIgnoreCase { path, value } => {
                write!(f, "{} contains '{}'", path, value)
            }
            Filter::And(left, right) => write!(f, "({} and {})", left, right),
            Filter::Or(left, right) => write!(f, "({} or {})", left, right),
            Filter::Not(inner) => write!(f, "not {}", inner),
        }
    }
}

/// A typed, composable predicate over entities of type `E`.
pub struct Specification<E> {
    filter: Filter,
    _entity: PhantomData<fn(&E) -> bool>,
}

impl<E> Clone for Specification<E> {
    fn clone(&self) -> Self {
        Self {
            filter: self.filter.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> fmt::Debug for Specification<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Specification").field(&self.filter).finish()
    }
}

impl<E: Entity> Specification<E> {
    fn from_filter(filter: Filter) -> Self {
        Self {
            filter,
            _entity: PhantomData,
        }
    }

    fn attribute_path(path: &str) -> StorageResult<&'static str> {
        E::resolve_attribute(path)
            .ok_or_else(|| StorageError::unknown_attribute(E::RESOURCE_TYPE, path.trim()))
    }

    /// Matches every entity.
    pub fn all() -> Self {
        Self::from_filter(Filter::All)
    }

    /// Matches nothing.
    pub fn none() -> Self {
        Self::from_filter(Filter::Not(Box::new(Filter::All)))
    }

    /// Matches the entity with the given identifier.
    pub fn by_id(id: Uuid) -> Self {
        Self::from_filter(Filter::IdEquals(id))
    }

    /// Exact equality on `path`.
    pub fn equals(path: &str, value: impl Into<AttributeValue>) -> StorageResult<Self> {
        Ok(Self::from_filter(Filter::Equals {
            path: Self::attribute_path(path)?,
            value: value.into(),
        }))
    }

    /// Case-insensitive equality on `path`.
    pub fn equals_ignore_case(path: &str, value: impl Into<String>) -> StorageResult<Self> {
        Ok(Self::from_filter(Filter::EqualsIgnoreCase {
            path: Self::attribute_path(path)?,
            value: value.into(),
        }))
    }

    /// Case-insensitive substring match on `path`.
    pub fn contains_ignore_case(path: &str, value: impl Into<String>) -> StorageResult<Self> {
        Ok(Self::from_filter(Filter::ContainsIgnoreCase {
            path: Self::attribute_path(path)?,
            value: value.into(),
        }))
    }

    /// Case-insensitive substring match on any of `paths`.
    ///
    /// An empty path list matches nothing.
    pub fn contains_any_ignore_case(paths: &[&str], value: &str) -> StorageResult<Self> {
        let mut specs = paths
            .iter()
            .map(|path| Self::contains_ignore_case(path, value))
            .collect::<StorageResult<Vec<_>>>()?
            .into_iter();

        let Some(first) = specs.next() else {
            return Ok(Self::none());
        };
        Ok(specs.fold(first, Self::or))
    }

    /// Both specifications must match.
    pub fn and(self, other: Self) -> Self {
        match (self.filter, other.filter) {
            (Filter::All, filter) | (filter, Filter::All) => Self::from_filter(filter),
            (left, right) => Self::from_filter(Filter::And(Box::new(left), Box::new(right))),
        }
    }

    /// Either specification must match.
    pub fn or(self, other: Self) -> Self {
        Self::from_filter(Filter::Or(Box::new(self.filter), Box::new(other.filter)))
    }

    /// Tests an entity against this specification.
    pub fn is_satisfied_by(&self, entity: &E) -> bool {
        self.filter.evaluate(entity)
    }

    /// The expression tree, for backends that translate it.
    pub fn filter(&self) -> &Filter {
        &self.filter
    }
}

impl<E: Entity> Not for Specification<E> {
    type Output = Self;

    fn not(self) -> Self {
        match self.filter {
            Filter::Not(inner) => Self::from_filter(*inner),
            filter => Self::from_filter(Filter::Not(Box::new(filter))),
        }
    }
}

impl<E: Entity> Default for Specification<E> {
    fn default() -> Self {
        Self::all()
    }
}

impl<E> fmt::Display for Specification<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.filter)
    }
}
