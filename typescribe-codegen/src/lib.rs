//! # TypeScribe Codegen
//!
//! TypeScript declaration generation from entity schemas.
//!
//! This crate provides:
//! - Dependency layering of entities with cycle detection
//! - Field type mapping to TypeScript tokens
//! - Entity name normalization for module paths
//! - Declaration file emission and the generation driver

pub mod emit;
pub mod error;
pub mod generator;
pub mod graph;
pub mod mapper;
pub mod naming;

pub use emit::DeclarationEmitter;
pub use error::CodegenError;
pub use generator::{DECLARATION_EXTENSION, GeneratedFile, Generator};
pub use graph::{DependencyLayers, Layer, LayerEntry, build_layers};
pub use mapper::TypeMap;
pub use naming::module_name;

use std::path::{Path, PathBuf};

/// Generates declaration files from an XML schema string.
///
/// # Arguments
/// * `xml` - XML schema document content
/// * `out_dir` - Output directory (must exist)
///
/// # Returns
/// The ordered list of written file paths.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, layering, emission or
/// writing fails.
pub fn generate_from_xml(xml: &str, out_dir: &Path) -> Result<Vec<PathBuf>, CodegenError> {
    let schema = typescribe_schema::parse_schema(xml)?;
    typescribe_schema::validate_schema(&schema)?;
    let generator = Generator::new(&schema);
    generator.generate_to_dir(out_dir)
}

/// Generates declaration files from an XML schema file.
///
/// # Arguments
/// * `path` - Path to the XML schema document
/// * `out_dir` - Output directory (must exist)
///
/// # Returns
/// The ordered list of written file paths.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation or generation
/// fails.
pub fn generate_from_file(path: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml, out_dir)
}
