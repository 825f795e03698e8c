//! # TypeScribe Schema
//!
//! Entity schema model, XML parsing and validation.
//!
//! This crate provides:
//! - Data structures for schema entities, fields and relations
//! - XML schema document parsing
//! - Cross-entity schema validation

pub mod error;
pub mod model;
pub mod parser;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use model::{Cardinality, Entity, Field, FieldKind, Schema, ScalarKind};
pub use parser::parse_schema;
pub use validation::validate_schema;
