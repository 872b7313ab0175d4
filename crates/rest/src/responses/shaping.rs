//! Resource shaping for the `fields` parameter.
//!
//! Clients may ask for a subset of a resource's fields
//! (`?fields=Id, Type`). The requested names are matched case-insensitively
//! against the transfer object's declared schema, and the projected record
//! keeps the client's order using the schema's spelling.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::query::QueryError;
use crate::resources::ResourceKind;

/// A transfer object's serialized fields, in declaration order.
///
/// The names must match the object's serialized keys exactly.
pub trait FieldSchema {
    /// Serialized field names.
    const FIELDS: &'static [&'static str];
}

/// The validated, canonical form of a `fields` parameter.
///
/// An empty selection means "every field".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection {
    fields: Vec<&'static str>,
}

impl FieldSelection {
    /// A selection that keeps every field.
    pub fn all() -> Self {
        Self::default()
    }

    /// Returns true if no whitelist is active.
    pub fn is_all(&self) -> bool {
        self.fields.is_empty()
    }

    /// The selected field names, in request order.
    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }
}

/// An ordered, possibly partial, serialized transfer object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProjectedRecord(Map<String, Value>);

impl ProjectedRecord {
    /// Field names in output order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the value of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Appends a field after the projected ones.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) {
        self.0.insert(field.into(), value);
    }

    /// Returns the underlying JSON object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Validates `fields` parameters and projects transfer objects.
#[derive(Debug, Clone, Default)]
pub struct FieldProjector {
    schemas: HashMap<ResourceKind, &'static [&'static str]>,
}

impl FieldProjector {
    /// Creates a projector with no schemas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the schema of `D` for `kind`.
    pub fn register<D: FieldSchema>(&mut self, kind: ResourceKind) {
        self.schemas.insert(kind, D::FIELDS);
    }

    /// Returns true if every name in `fields` belongs to the schema of `kind`.
    ///
    /// A blank parameter is always valid.
    pub fn validate(&self, kind: ResourceKind, fields: &str) -> bool {
        self.select(kind, fields).is_ok()
    }

    /// Parses `fields` into a [`FieldSelection`] for `kind`.
    ///
    /// Names are trimmed and matched without regard to case. Repeated names
    /// keep their first position.
    ///
    /// # Errors
    ///
    /// * `QueryError::UnknownFieldName` - If a name is not in the schema
    /// * `QueryError::UnknownResource` - If no schema is registered for `kind`
    pub fn select(&self, kind: ResourceKind, fields: &str) -> Result<FieldSelection, QueryError> {
        let schema = self
            .schemas
            .get(&kind)
            .ok_or_else(|| QueryError::UnknownResource {
                resource_type: kind.to_string(),
            })?;

        let mut selected: Vec<&'static str> = Vec::new();
        for name in fields.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            let canonical = schema
                .iter()
                .copied()
                .find(|field| field.eq_ignore_ascii_case(name))
                .ok_or_else(|| QueryError::UnknownFieldName {
                    resource_type: kind.to_string(),
                    field: name.to_string(),
                })?;
            if !selected.contains(&canonical) {
                selected.push(canonical);
            }
        }

        Ok(FieldSelection { fields: selected })
    }

    /// Serializes `dto` and keeps only the selected fields.
    ///
    /// An empty selection returns the full object unmodified.
    pub fn project<D: Serialize>(
        &self,
        dto: &D,
        selection: &FieldSelection,
    ) -> Result<ProjectedRecord, serde_json::Error> {
        let mut full = match serde_json::to_value(dto)? {
            Value::Object(map) => map,
            other => {
                return Err(serde::ser::Error::custom(format!(
                    "cannot shape a non-object value: {}",
                    other
                )));
            }
        };

        if selection.is_all() {
            return Ok(ProjectedRecord(full));
        }

        let shaped = selection
            .fields()
            .iter()
            .map(|field| {
                let value = full.remove(*field).unwrap_or(Value::Null);
                (field.to_string(), value)
            })
            .collect();
        Ok(ProjectedRecord(shaped))
    }
}
