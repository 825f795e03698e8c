//! Error types for schema parsing and validation.

use thiserror::Error;

/// Error type for schema parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Invalid attribute value.
    #[error("invalid value '{value}' for attribute '{attribute}' on element '{element}'")]
    InvalidAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
        /// Invalid value.
        value: String,
    },

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (entity, field).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Field declared as both scalar and relation.
    #[error("field '{field}' of entity '{entity}' declares both 'kind' and 'relation'")]
    ConflictingField {
        /// Entity name.
        entity: String,
        /// Field name.
        field: String,
    },

    /// Invalid schema structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Relation target does not name a declared entity.
    #[error("unknown relation target '{target}' in field '{entity}.{field}'")]
    UnknownTarget {
        /// Target entity name.
        target: String,
        /// Entity declaring the relation.
        entity: String,
        /// Field name.
        field: String,
    },

    /// Primary key does not name a declared field.
    #[error("primary key '{field}' of entity '{entity}' does not name a declared field")]
    UnknownPrimaryKey {
        /// Entity name.
        entity: String,
        /// Primary key field name.
        field: String,
    },

    /// Primary key names a relation field.
    #[error("primary key '{field}' of entity '{entity}' must be a scalar field")]
    RelationalPrimaryKey {
        /// Entity name.
        entity: String,
        /// Primary key field name.
        field: String,
    },

    /// Referenced entity has no primary key.
    #[error("entity '{entity}' referenced by '{referenced_by}' has no primary key")]
    MissingPrimaryKey {
        /// Entity missing a primary key.
        entity: String,
        /// Qualified name of the referencing field.
        referenced_by: String,
    },
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attr(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }
}
