//! # TypeScribe
//!
//! TypeScript declaration file generator for entity schemas.
//!
//! TypeScribe turns a declarative entity schema into one `.d.ts` file per
//! entity, with cross-entity references resolved into imports and the
//! emission order layered so that every imported declaration is produced
//! before (or alongside) its importers.
//!
//! ## Quick Start
//!
//! ```no_run
//! use typescribe::prelude::*;
//! use std::path::Path;
//!
//! let xml = r#"<typeSchema package="blog">
//!     <entity name="Author" primaryKey="id">
//!         <field name="id" kind="serial"/>
//!     </entity>
//!     <entity name="Book" primaryKey="id">
//!         <field name="id" kind="serial"/>
//!         <field name="author" relation="Author"/>
//!     </entity>
//! </typeSchema>"#;
//!
//! let written = typescribe::generate_from_xml(xml, Path::new("types"))?;
//! for path in &written {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), typescribe::codegen::CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema model, XML parsing and validation
//! - [`codegen`] - Dependency layering, type mapping and file emission

pub mod prelude;

/// Schema model, parsing and validation.
pub mod schema {
    pub use typescribe_schema::*;
}

/// Declaration generation from schemas.
pub mod codegen {
    pub use typescribe_codegen::*;
}

// Re-export commonly used items at the crate root
pub use typescribe_codegen::{
    CodegenError, DECLARATION_EXTENSION, GeneratedFile, Generator, TypeMap, build_layers,
    generate_from_file, generate_from_xml, module_name,
};

pub use typescribe_schema::{
    Cardinality, Entity, Field, FieldKind, ParseError, Schema, SchemaError, ScalarKind,
    parse_schema, validate_schema,
};

#[cfg(test)]
mod tests {
    use std::path::Path;

    #[test]
    fn test_generate_from_xml_end_to_end() {
        let xml = r#"<typeSchema package="blog">
            <entity name="Author" primaryKey="id">
                <field name="id" kind="serial"/>
            </entity>
            <entity name="Book" primaryKey="id">
                <field name="id" kind="serial"/>
                <field name="author" relation="Author"/>
            </entity>
        </typeSchema>"#;
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let written = crate::generate_from_xml(xml, dir.path()).expect("Failed to generate");
        assert_eq!(written.len(), 2);
        assert!(written[0].ends_with("author.d.ts"));
        assert!(written[1].ends_with("book.d.ts"));
    }

    #[test]
    fn test_generate_from_xml_rejects_invalid_schema() {
        let xml = r#"<typeSchema package="blog">
            <entity name="Book" primaryKey="id">
                <field name="id" kind="serial"/>
                <field name="author" relation="Ghost"/>
            </entity>
        </typeSchema>"#;
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let result = crate::generate_from_xml(xml, dir.path());
        assert!(matches!(result, Err(crate::CodegenError::Schema(_))));
    }

    #[test]
    fn test_generate_from_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = crate::generate_from_file(Path::new("does-not-exist.xml"), dir.path());
        assert!(matches!(result, Err(crate::CodegenError::Io(_))));
    }
}
