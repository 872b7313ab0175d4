//! Sort key resolution.
//!
//! Clients sort by public keys (`orderBy=Value desc,Id`). Each resource
//! registers a [`SortMappingTable`] that maps those keys, case-insensitively,
//! onto one or more entity attribute paths. Resolving an `orderBy` expression
//! yields the ordered [`SortInstruction`]s the storage backend applies as a
//! stable multi-key comparison.

use std::collections::HashMap;

use recollectable_persistence::types::{SortDirection, SortInstruction};

use super::QueryError;
use crate::resources::ResourceKind;

/// The attribute paths one public sort key expands to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMappingValue {
    paths: Vec<&'static str>,
    revert: bool,
}

impl PropertyMappingValue {
    /// Maps a key to `paths`, compared in order as tiebreaks.
    pub fn new(paths: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            paths: paths.into_iter().collect(),
            revert: false,
        }
    }

    /// Inverts the requested direction for every path of this key.
    pub fn reverted(mut self) -> Self {
        self.revert = true;
        self
    }

    /// The attribute paths, in comparison order.
    pub fn paths(&self) -> &[&'static str] {
        &self.paths
    }

    /// Whether the requested direction is inverted.
    pub fn revert(&self) -> bool {
        self.revert
    }
}

/// A resource's public sort keys and the key used when `orderBy` is blank.
#[derive(Debug, Clone)]
pub struct SortMappingTable {
    default_key: &'static str,
    entries: Vec<(&'static str, PropertyMappingValue)>,
}

impl SortMappingTable {
    /// Creates an empty table sorting by `default_key` when nothing is requested.
    pub fn new(default_key: &'static str) -> Self {
        Self {
            default_key,
            entries: Vec::new(),
        }
    }

    /// Adds a mapping for `key`.
    pub fn with(mut self, key: &'static str, value: PropertyMappingValue) -> Self {
        self.entries.push((key, value));
        self
    }

    /// Adds a key that sorts by the single attribute path of the same name.
    pub fn with_direct(self, key: &'static str) -> Self {
        self.with(key, PropertyMappingValue::new([key]))
    }

    /// The key applied when `orderBy` is blank.
    pub fn default_key(&self) -> &'static str {
        self.default_key
    }

    /// The public keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Looks up a key, ignoring ASCII case.
    pub fn lookup(&self, key: &str) -> Option<&PropertyMappingValue> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
            .map(|(_, value)| value)
    }
}

/// Resolves `orderBy` expressions against per-resource mapping tables.
///
/// Tables are registered once while the catalog is built and only read
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct SortFieldResolver {
    tables: HashMap<ResourceKind, SortMappingTable>,
}

impl SortFieldResolver {
    /// Creates a resolver with no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the mapping table for `kind`.
    pub fn register_mapping(&mut self, kind: ResourceKind, table: SortMappingTable) {
        self.tables.insert(kind, table);
    }

    /// Returns the table registered for `kind`.
    pub fn table(&self, kind: ResourceKind) -> Result<&SortMappingTable, QueryError> {
        self.tables
            .get(&kind)
            .ok_or_else(|| QueryError::UnknownResource {
                resource_type: kind.to_string(),
            })
    }

    /// Resolves `order_by` into sort instructions.
    ///
    /// Terms are comma-separated and evaluated left to right. Each term is a
    /// key optionally followed by `asc` or `desc`. A blank expression resolves
    /// the table's default key.
    ///
    /// # Errors
    ///
    /// * `QueryError::UnknownSortKey` - If any term names an unmapped key
    /// * `QueryError::UnknownResource` - If no table is registered for `kind`
    pub fn resolve(
        &self,
        kind: ResourceKind,
        order_by: &str,
    ) -> Result<Vec<SortInstruction>, QueryError> {
        let table = self.table(kind)?;

        let requested = if order_by.trim().is_empty() {
            table.default_key()
        } else {
            order_by
        };

        let mut instructions = Vec::new();
        for term in requested.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let (key, direction) =
                split_direction(term).ok_or_else(|| unknown_key(kind, term))?;
            let mapping = table.lookup(key).ok_or_else(|| unknown_key(kind, term))?;

            let direction = if mapping.revert() {
                direction.reversed()
            } else {
                direction
            };
            instructions.extend(
                mapping
                    .paths()
                    .iter()
                    .map(|path| SortInstruction::new(*path, direction)),
            );
        }

        Ok(instructions)
    }

    /// Returns true if every term of `order_by` maps to a key of `kind`.
    pub fn validate(&self, kind: ResourceKind, order_by: &str) -> bool {
        self.resolve(kind, order_by).is_ok()
    }
}

/// Splits `"Value desc"` into the key and its direction.
///
/// Returns `None` when the suffix is neither `asc` nor `desc`.
fn split_direction(term: &str) -> Option<(&str, SortDirection)> {
    match term.split_once(char::is_whitespace) {
        None => Some((term, SortDirection::Ascending)),
        Some((key, suffix)) => SortDirection::parse(suffix.trim()).map(|dir| (key, dir)),
    }
}

fn unknown_key(kind: ResourceKind, term: &str) -> QueryError {
    QueryError::UnknownSortKey {
        resource_type: kind.to_string(),
        key: term.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn currency_table() -> SortMappingTable {
        SortMappingTable::new("Value")
            .with_direct("Id")
            .with(
                "Value",
                PropertyMappingValue::new(["Country.Name", "Type", "FaceValue", "ReleaseDate"]),
            )
            .with("Country", PropertyMappingValue::new(["Country.Name"]))
            .with_direct("ReleaseDate")
    }

    fn resolver() -> SortFieldResolver {
        let mut resolver = SortFieldResolver::new();
        resolver.register_mapping(ResourceKind::Coins, currency_table());
        resolver
    }

    fn paths(instructions: &[SortInstruction]) -> Vec<String> {
        instructions.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_value_fans_out_to_tiebreaks() {
        let sort = resolver().resolve(ResourceKind::Coins, "Value").unwrap();
        assert_eq!(
            paths(&sort),
            ["Country.Name asc", "Type asc", "FaceValue asc", "ReleaseDate asc"]
        );
    }

    #[test]
    fn test_keys_are_case_insensitive_and_trimmed() {
        let sort = resolver()
            .resolve(ResourceKind::Coins, "  country DESC , id")
            .unwrap();
        assert_eq!(paths(&sort), ["Country.Name desc", "Id asc"]);
    }

    #[test]
    fn test_blank_order_by_uses_default_key() {
        let blank = resolver().resolve(ResourceKind::Coins, "   ").unwrap();
        let value = resolver().resolve(ResourceKind::Coins, "Value").unwrap();
        assert_eq!(blank, value);
    }

    #[test]
    fn test_unknown_key_fails() {
        let err = resolver()
            .resolve(ResourceKind::Coins, "Id, invalid")
            .unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownSortKey {
                resource_type: "coins".to_string(),
                key: "invalid".to_string(),
            }
        );
        assert!(!resolver().validate(ResourceKind::Coins, "invalid"));
        assert!(resolver().validate(ResourceKind::Coins, "ReleaseDate desc"));
    }

    #[test]
    fn test_unknown_direction_fails() {
        assert!(!resolver().validate(ResourceKind::Coins, "Value sideways"));
    }

    #[test]
    fn test_reverted_mapping_flips_direction() {
        let mut resolver = SortFieldResolver::new();
        resolver.register_mapping(
            ResourceKind::Users,
            SortMappingTable::new("Age")
                .with("Age", PropertyMappingValue::new(["DateOfBirth"]).reverted()),
        );

        let asc = resolver.resolve(ResourceKind::Users, "Age").unwrap();
        let desc = resolver.resolve(ResourceKind::Users, "Age desc").unwrap();
        assert_eq!(paths(&asc), ["DateOfBirth desc"]);
        assert_eq!(paths(&desc), ["DateOfBirth asc"]);
    }

    #[test]
    fn test_unregistered_resource() {
        let err = resolver().resolve(ResourceKind::Users, "Id").unwrap_err();
        assert!(matches!(err, QueryError::UnknownResource { .. }));
    }
}
