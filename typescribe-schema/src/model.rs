//! Schema model definitions.
//!
//! This module contains the data structures describing an entity schema:
//! entities, fields, scalar kinds and relation cardinalities. These are the
//! immutable inputs to dependency layering and declaration emission.

use std::collections::HashMap;

/// Complete entity schema definition.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Package name (namespace label for the generated set).
    pub package: String,
    /// Schema format version.
    pub version: u32,
    /// Entity definitions, in declaration order.
    pub entities: Vec<Entity>,
    /// Entity lookup map (built during parsing).
    entity_map: HashMap<String, usize>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new(package: String, version: u32) -> Self {
        Self {
            package,
            version,
            entities: Vec::new(),
            entity_map: HashMap::new(),
        }
    }

    /// Adds an entity definition to the schema.
    pub fn add_entity(&mut self, entity: Entity) {
        let name = entity.name.clone();
        let index = self.entities.len();
        self.entities.push(entity);
        self.entity_map.insert(name, index);
    }

    /// Looks up an entity by name.
    #[must_use]
    pub fn get_entity(&self, name: &str) -> Option<&Entity> {
        self.entity_map.get(name).map(|&idx| &self.entities[idx])
    }

    /// Returns the declaration index of an entity.
    #[must_use]
    pub fn entity_index(&self, name: &str) -> Option<usize> {
        self.entity_map.get(name).copied()
    }

    /// Returns true if an entity with the given name exists.
    #[must_use]
    pub fn has_entity(&self, name: &str) -> bool {
        self.entity_map.contains_key(name)
    }

    /// Returns the number of entities in the schema.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the schema contains no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// One schema-defined record type, translated into one declaration file.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Entity name (unique within the schema, used as the exported
    /// identifier).
    pub name: String,
    /// Field definitions, in declaration order.
    pub fields: Vec<Field>,
    /// Name of the designated primary key field, if any.
    pub primary_key: Option<String>,
}

impl Entity {
    /// Creates a new entity with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            primary_key: None,
        }
    }

    /// Adds a field definition to the entity.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns true if a field with the given name exists.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Returns the designated primary key field, if any.
    #[must_use]
    pub fn primary_key_field(&self) -> Option<&Field> {
        self.primary_key.as_deref().and_then(|pk| self.field(pk))
    }
}

/// One field of an entity.
#[derive(Debug, Clone)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Field kind (scalar or relation).
    pub kind: FieldKind,
    /// Whether the value may be null.
    pub nullable: bool,
    /// Whether the value may be omitted entirely.
    pub optional: bool,
}

impl Field {
    /// Creates a scalar field.
    #[must_use]
    pub fn scalar(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Scalar(kind),
            nullable: false,
            optional: false,
        }
    }

    /// Creates a relation field.
    #[must_use]
    pub fn relation(
        name: impl Into<String>,
        target: impl Into<String>,
        cardinality: Cardinality,
    ) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Relation {
                target: target.into(),
                cardinality,
            },
            nullable: false,
            optional: false,
        }
    }

    /// Returns true if this is a relation field.
    #[must_use]
    pub const fn is_relation(&self) -> bool {
        matches!(self.kind, FieldKind::Relation { .. })
    }

    /// Returns the relation target name, if this is a relation field.
    #[must_use]
    pub fn relation_target(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Relation { target, .. } => Some(target),
            FieldKind::Scalar(_) => None,
        }
    }
}

/// Field kind variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Primitive value field.
    Scalar(ScalarKind),
    /// Reference to another entity.
    Relation {
        /// Target entity name.
        target: String,
        /// Relation cardinality.
        cardinality: Cardinality,
    },
}

/// Primitive field kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Unbounded text.
    Text,
    /// Bounded character data.
    Char,
    /// Auto-incrementing integer key.
    Serial,
    /// Auto-incrementing 64-bit integer key.
    BigSerial,
    /// Integer.
    Integer,
    /// Small (16-bit range) integer.
    SmallInteger,
    /// Floating point number.
    Float,
    /// Fixed-precision decimal.
    Decimal,
    /// Boolean.
    Boolean,
    /// Calendar date.
    Date,
    /// Date and time.
    DateTime,
    /// Time of day.
    Time,
    /// Time span.
    Duration,
    /// UUID.
    Uuid,
}

impl ScalarKind {
    /// Parses a scalar kind from its attribute spelling.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "char" => Some(Self::Char),
            "serial" => Some(Self::Serial),
            "big-serial" => Some(Self::BigSerial),
            "integer" => Some(Self::Integer),
            "small-integer" => Some(Self::SmallInteger),
            "float" => Some(Self::Float),
            "decimal" => Some(Self::Decimal),
            "boolean" => Some(Self::Boolean),
            "date" => Some(Self::Date),
            "date-time" => Some(Self::DateTime),
            "time" => Some(Self::Time),
            "duration" => Some(Self::Duration),
            "uuid" => Some(Self::Uuid),
            _ => None,
        }
    }

    /// Returns the attribute spelling of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Char => "char",
            Self::Serial => "serial",
            Self::BigSerial => "big-serial",
            Self::Integer => "integer",
            Self::SmallInteger => "small-integer",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "date-time",
            Self::Time => "time",
            Self::Duration => "duration",
            Self::Uuid => "uuid",
        }
    }
}

/// Relation cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cardinality {
    /// Reference to exactly one target instance.
    #[default]
    Single,
    /// Reference to a collection of target instances.
    Many,
}

impl Cardinality {
    /// Parses a cardinality from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Self::Single),
            "many" => Some(Self::Many),
            _ => None,
        }
    }

    /// Returns the attribute spelling of the cardinality.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Many => "many",
        }
    }
}
