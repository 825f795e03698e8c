//! Generation driver.
//!
//! The generator builds the dependency layers once, then walks them in
//! ascending order emitting one declaration per entity. Graph failures
//! abort before anything is produced; a file-sink failure mid-run leaves
//! earlier files in place. Callers wanting all-or-nothing output should
//! generate into a staging directory and move it atomically.

use crate::emit::DeclarationEmitter;
use crate::error::CodegenError;
use crate::graph::build_layers;
use crate::mapper::TypeMap;
use crate::naming::module_name;
use std::path::{Path, PathBuf};
use typescribe_schema::Schema;

/// File extension of emitted declaration files.
pub const DECLARATION_EXTENSION: &str = "d.ts";

/// One emitted declaration file.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// File name, `<module-name>.d.ts`.
    pub file_name: String,
    /// Full file text.
    pub contents: String,
}

/// Declaration generator for an entity schema.
pub struct Generator<'a> {
    schema: &'a Schema,
    types: TypeMap,
}

impl<'a> Generator<'a> {
    /// Creates a generator with the default TypeScript type map.
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            types: TypeMap::default(),
        }
    }

    /// Replaces the type map.
    #[must_use]
    pub fn with_types(mut self, types: TypeMap) -> Self {
        self.types = types;
        self
    }

    /// Generates all declaration files in emission order, in memory.
    ///
    /// # Returns
    /// One `GeneratedFile` per entity, ordered layer by layer.
    ///
    /// # Errors
    /// Returns `CodegenError` if layering or emission fails; a layering
    /// failure produces no output at all.
    pub fn generate(&self) -> Result<Vec<GeneratedFile>, CodegenError> {
        let layers = build_layers(self.schema)?;
        tracing::info!(
            "generating {} declarations in {} layers",
            self.schema.len(),
            layers.len()
        );

        let emitter = DeclarationEmitter::new(self.schema, &self.types);
        let mut files = Vec::with_capacity(self.schema.len());

        for layer in layers.layers() {
            for entry in &layer.entries {
                let entity = &self.schema.entities[entry.entity];
                let contents = emitter.emit(entry)?;
                let file_name = format!(
                    "{}.{}",
                    module_name(&entity.name)?,
                    DECLARATION_EXTENSION
                );
                tracing::debug!("emitted declaration '{}'", file_name);
                files.push(GeneratedFile {
                    file_name,
                    contents,
                });
            }
        }

        Ok(files)
    }

    /// Generates all declaration files into a directory.
    ///
    /// Files are emitted and written one at a time, layer by layer; a
    /// failure partway leaves the files already written on disk.
    ///
    /// # Arguments
    /// * `dir` - Output directory (must exist)
    ///
    /// # Returns
    /// The ordered list of written file paths.
    ///
    /// # Errors
    /// Returns `CodegenError::Write` naming the file that could not be
    /// written, or any layering/emission error.
    pub fn generate_to_dir(&self, dir: &Path) -> Result<Vec<PathBuf>, CodegenError> {
        let layers = build_layers(self.schema)?;
        tracing::info!(
            "generating {} declarations into '{}'",
            self.schema.len(),
            dir.display()
        );

        let emitter = DeclarationEmitter::new(self.schema, &self.types);
        let mut written = Vec::with_capacity(self.schema.len());

        for layer in layers.layers() {
            for entry in &layer.entries {
                let entity = &self.schema.entities[entry.entity];
                let contents = emitter.emit(entry)?;
                let file_name = format!(
                    "{}.{}",
                    module_name(&entity.name)?,
                    DECLARATION_EXTENSION
                );
                let path = dir.join(&file_name);
                std::fs::write(&path, &contents).map_err(|source| {
                    tracing::error!("failed to write '{}': {}", file_name, source);
                    CodegenError::Write {
                        file: file_name.clone(),
                        source,
                    }
                })?;
                tracing::debug!("wrote '{}'", path.display());
                written.push(path);
            }
        }

        Ok(written)
    }
}
