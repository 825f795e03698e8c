//! Schema validation utilities.
//!
//! This module provides the cross-entity checks the parser cannot perform
//! locally: relation targets must exist, primary keys must name scalar
//! fields, and every entity referenced through a relation must have a
//! primary key for the keyed reference form.

use crate::error::SchemaError;
use crate::model::{FieldKind, Schema};

/// Validates a parsed schema for correctness.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the issue.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    validate_primary_keys(schema)?;
    validate_relations(schema)?;
    Ok(())
}

/// Validates primary key designations.
fn validate_primary_keys(schema: &Schema) -> Result<(), SchemaError> {
    for entity in &schema.entities {
        let Some(pk_name) = entity.primary_key.as_deref() else {
            continue;
        };

        let Some(pk_field) = entity.field(pk_name) else {
            return Err(SchemaError::UnknownPrimaryKey {
                entity: entity.name.clone(),
                field: pk_name.to_string(),
            });
        };

        if pk_field.is_relation() {
            return Err(SchemaError::RelationalPrimaryKey {
                entity: entity.name.clone(),
                field: pk_name.to_string(),
            });
        }
    }
    Ok(())
}

/// Validates relation fields against the declared entity set.
fn validate_relations(schema: &Schema) -> Result<(), SchemaError> {
    for entity in &schema.entities {
        for field in &entity.fields {
            let FieldKind::Relation { target, .. } = &field.kind else {
                continue;
            };

            let Some(target_entity) = schema.get_entity(target) else {
                return Err(SchemaError::UnknownTarget {
                    target: target.clone(),
                    entity: entity.name.clone(),
                    field: field.name.clone(),
                });
            };

            if target_entity.primary_key_field().is_none() {
                return Err(SchemaError::MissingPrimaryKey {
                    entity: target_entity.name.clone(),
                    referenced_by: format!("{}.{}", entity.name, field.name),
                });
            }
        }
    }
    Ok(())
}
