//! Field type mapping.
//!
//! `TypeMap` is an explicit kind → token table passed into emission, so
//! multiple independent target mappings can coexist. The default table
//! targets TypeScript. Relation fields do not consult the table: they map to
//! a keyed reference into the target entity's declaration, so the key type
//! follows the target's own declaration without this module tracking it.

use crate::error::CodegenError;
use std::collections::HashMap;
use typescribe_schema::{Cardinality, Entity, Field, FieldKind, Schema, ScalarKind};

/// Scalar kind to target-language token table.
#[derive(Debug, Clone)]
pub struct TypeMap {
    tokens: HashMap<ScalarKind, String>,
}

impl Default for TypeMap {
    fn default() -> Self {
        let mut map = Self::empty();
        map.insert(ScalarKind::Text, "string");
        map.insert(ScalarKind::Char, "string");
        map.insert(ScalarKind::Date, "string");
        map.insert(ScalarKind::DateTime, "string");
        map.insert(ScalarKind::Time, "string");
        map.insert(ScalarKind::Duration, "string");
        map.insert(ScalarKind::Uuid, "string");
        map.insert(ScalarKind::Serial, "number");
        map.insert(ScalarKind::BigSerial, "number");
        map.insert(ScalarKind::Integer, "number");
        map.insert(ScalarKind::SmallInteger, "number");
        map.insert(ScalarKind::Float, "number");
        map.insert(ScalarKind::Decimal, "number");
        map.insert(ScalarKind::Boolean, "boolean");
        map
    }
}

impl TypeMap {
    /// Creates a type map with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tokens: HashMap::new(),
        }
    }

    /// Sets the token for a scalar kind.
    pub fn insert(&mut self, kind: ScalarKind, token: impl Into<String>) {
        self.tokens.insert(kind, token.into());
    }

    /// Looks up the token for a scalar kind.
    #[must_use]
    pub fn get(&self, kind: ScalarKind) -> Option<&str> {
        self.tokens.get(&kind).map(String::as_str)
    }

    /// Maps a field to its full type expression.
    ///
    /// Scalar fields look up the table token; single relations map to
    /// `Target["pkField"]`, many relations to `Target["pkField"][]`. A
    /// nullable field appends `| null`, an optional field `| undefined`,
    /// in that order.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownFieldKind` for a kind absent from the
    /// table, `CodegenError::UnknownTarget` for a dangling relation, or
    /// `CodegenError::MissingPrimaryKey` if the target has no usable key.
    pub fn map_field(
        &self,
        schema: &Schema,
        entity: &Entity,
        field: &Field,
    ) -> Result<String, CodegenError> {
        let base = match &field.kind {
            FieldKind::Scalar(kind) => self
                .get(*kind)
                .ok_or_else(|| CodegenError::UnknownFieldKind {
                    entity: entity.name.clone(),
                    field: field.name.clone(),
                    kind: kind.as_str().to_string(),
                })?
                .to_string(),
            FieldKind::Relation {
                target,
                cardinality,
            } => {
                let target_entity =
                    schema
                        .get_entity(target)
                        .ok_or_else(|| CodegenError::UnknownTarget {
                            target: target.clone(),
                            field: format!("{}.{}", entity.name, field.name),
                        })?;
                let key = target_entity.primary_key_field().ok_or_else(|| {
                    CodegenError::MissingPrimaryKey {
                        entity: target_entity.name.clone(),
                    }
                })?;
                let reference = format!("{}[\"{}\"]", target_entity.name, key.name);
                match cardinality {
                    Cardinality::Single => reference,
                    Cardinality::Many => format!("{reference}[]"),
                }
            }
        };

        let mut expression = base;
        if field.nullable {
            expression.push_str(" | null");
        }
        if field.optional {
            expression.push_str(" | undefined");
        }
        Ok(expression)
    }
}
