//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use typescribe::prelude::*;
//! ```

// Schema types
pub use typescribe_schema::{
    Cardinality, Entity, Field, FieldKind, ParseError, Schema, SchemaError, ScalarKind,
    parse_schema, validate_schema,
};

// Codegen types
pub use typescribe_codegen::{
    CodegenError, DECLARATION_EXTENSION, DeclarationEmitter, DependencyLayers, GeneratedFile,
    Generator, Layer, LayerEntry, TypeMap, build_layers, generate_from_file, generate_from_xml,
    module_name,
};
