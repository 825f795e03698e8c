//! Declaration file emission.
//!
//! One placed entity becomes one declaration file: an import line per
//! dependency, then a single exported type block with one line per field.
//! The exported identifier is the entity's declared name; only the module
//! path in the import goes through the normalizer.

use crate::error::CodegenError;
use crate::graph::LayerEntry;
use crate::mapper::TypeMap;
use crate::naming::module_name;
use typescribe_schema::Schema;

/// Emitter for entity declaration files.
pub struct DeclarationEmitter<'a> {
    schema: &'a Schema,
    types: &'a TypeMap,
}

impl<'a> DeclarationEmitter<'a> {
    /// Creates a new declaration emitter.
    #[must_use]
    pub fn new(schema: &'a Schema, types: &'a TypeMap) -> Self {
        Self { schema, types }
    }

    /// Emits the declaration file text for one placed entity.
    ///
    /// # Arguments
    /// * `entry` - The entity and its resolved dependency list
    ///
    /// # Returns
    /// The full text of the declaration file.
    ///
    /// # Errors
    /// Returns `CodegenError` if a field cannot be mapped or a dependency
    /// name cannot be normalized.
    pub fn emit(&self, entry: &LayerEntry) -> Result<String, CodegenError> {
        let entity = &self.schema.entities[entry.entity];
        let mut output = String::new();

        for &dep in &entry.dependencies {
            let dep_entity = &self.schema.entities[dep];
            let module = module_name(&dep_entity.name)?;
            output.push_str(&format!(
                "import {{ {} }} from './{}'\n",
                dep_entity.name, module
            ));
        }
        if !entry.dependencies.is_empty() {
            output.push('\n');
        }

        output.push_str(&format!("export type {} = {{\n", entity.name));
        for field in &entity.fields {
            let expression = self.types.map_field(self.schema, entity, field)?;
            output.push_str(&format!("{}: {}\n", field.name, expression));
        }
        output.push_str("}\n");

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_layers;
    use typescribe_schema::parse_schema;

    const BLOG_SCHEMA: &str = r#"<typeSchema package="blog">
        <entity name="Author" primaryKey="id">
            <field name="id" kind="serial"/>
            <field name="name" kind="text" nullable="true"/>
        </entity>
        <entity name="Book" primaryKey="id">
            <field name="id" kind="serial"/>
            <field name="title" kind="text"/>
            <field name="author" relation="Author"/>
        </entity>
    </typeSchema>"#;

    #[test]
    fn test_emit_without_imports() {
        let schema = parse_schema(BLOG_SCHEMA).expect("Failed to parse");
        let layers = build_layers(&schema).expect("Failed to build layers");
        let types = TypeMap::default();
        let emitter = DeclarationEmitter::new(&schema, &types);

        let text = emitter
            .emit(&layers.layers()[0].entries[0])
            .expect("Failed to emit");
        assert_eq!(
            text,
            "export type Author = {\nid: number\nname: string | null\n}\n"
        );
    }

    #[test]
    fn test_emit_with_import() {
        let schema = parse_schema(BLOG_SCHEMA).expect("Failed to parse");
        let layers = build_layers(&schema).expect("Failed to build layers");
        let types = TypeMap::default();
        let emitter = DeclarationEmitter::new(&schema, &types);

        let text = emitter
            .emit(&layers.layers()[1].entries[0])
            .expect("Failed to emit");
        assert_eq!(
            text,
            "import { Author } from './author'\n\n\
             export type Book = {\n\
             id: number\n\
             title: string\n\
             author: Author[\"id\"]\n\
             }\n"
        );
    }

    #[test]
    fn test_emit_import_path_normalized() {
        let xml = r#"<typeSchema package="t">
            <entity name="UserProfile" primaryKey="id">
                <field name="id" kind="serial"/>
            </entity>
            <entity name="Session" primaryKey="id">
                <field name="id" kind="serial"/>
                <field name="profile" relation="UserProfile"/>
            </entity>
        </typeSchema>"#;
        let schema = parse_schema(xml).expect("Failed to parse");
        let layers = build_layers(&schema).expect("Failed to build layers");
        let types = TypeMap::default();
        let emitter = DeclarationEmitter::new(&schema, &types);

        let text = emitter
            .emit(&layers.layers()[1].entries[0])
            .expect("Failed to emit");
        assert!(text.starts_with("import { UserProfile } from './user-profile'\n"));
    }

    #[test]
    fn test_emit_field_order_preserved() {
        let schema = parse_schema(BLOG_SCHEMA).expect("Failed to parse");
        let layers = build_layers(&schema).expect("Failed to build layers");
        let types = TypeMap::default();
        let emitter = DeclarationEmitter::new(&schema, &types);

        let text = emitter
            .emit(&layers.layers()[1].entries[0])
            .expect("Failed to emit");
        let id_pos = text.find("id: number").expect("id line");
        let title_pos = text.find("title: string").expect("title line");
        let author_pos = text.find("author: Author").expect("author line");
        assert!(id_pos < title_pos && title_pos < author_pos);
    }
}
