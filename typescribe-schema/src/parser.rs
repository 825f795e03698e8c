//! Entity schema XML parser.
//!
//! This module parses `<typeSchema>` documents into the internal schema
//! representation. The document format is a flat list of entities:
//!
//! ```xml
//! <typeSchema package="blog" version="1">
//!     <entity name="Author" primaryKey="id">
//!         <field name="id" kind="serial"/>
//!         <field name="name" kind="text" nullable="true"/>
//!     </entity>
//! </typeSchema>
//! ```

use crate::error::ParseError;
use crate::model::{Cardinality, Entity, Field, FieldKind, Schema, ScalarKind};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parses an entity schema from an XML string.
///
/// # Arguments
/// * `xml` - XML schema document content
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or contains invalid schema
/// elements.
pub fn parse_schema(xml: &str) -> Result<Schema, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut schema: Option<Schema> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match name {
                    "typeSchema" => {
                        schema = Some(parse_type_schema(e)?);
                    }
                    "entity" if schema.is_some() => {
                        let entity = parse_entity(&mut reader, e)?;
                        add_entity(schema.as_mut().unwrap(), entity)?;
                    }
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name == "entity" && schema.is_some() {
                    let entity = parse_entity_attrs(e)?;
                    add_entity(schema.as_mut().unwrap(), entity)?;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    schema.ok_or_else(|| ParseError::InvalidStructure {
        message: "no typeSchema element found".to_string(),
    })
}

/// Adds an entity to the schema, rejecting duplicate names.
fn add_entity(schema: &mut Schema, entity: Entity) -> Result<(), ParseError> {
    if schema.has_entity(&entity.name) {
        return Err(ParseError::duplicate("entity", entity.name));
    }
    schema.add_entity(entity);
    Ok(())
}

/// Parses the typeSchema element attributes.
fn parse_type_schema(e: &BytesStart<'_>) -> Result<Schema, ParseError> {
    let mut package: Option<String> = None;
    let mut version: u32 = 1;

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        match key {
            "package" => package = Some(value.to_string()),
            "version" => {
                version = value
                    .parse()
                    .map_err(|_| ParseError::invalid_attr("typeSchema", "version", value))?;
            }
            _ => {}
        }
    }

    let package = package.ok_or_else(|| ParseError::missing_attr("typeSchema", "package"))?;
    Ok(Schema::new(package, version))
}

/// Parses an entity element and its field children.
fn parse_entity(reader: &mut Reader<&[u8]>, e: &BytesStart<'_>) -> Result<Entity, ParseError> {
    let mut entity = parse_entity_attrs(e)?;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                if tag_name == "field" {
                    let field = parse_field(e, &entity.name)?;
                    if entity.has_field(&field.name) {
                        return Err(ParseError::duplicate(
                            "field",
                            format!("{}.{}", entity.name, field.name),
                        ));
                    }
                    entity.add_field(field);
                }
            }
            Ok(Event::End(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                if tag_name == "entity" {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(entity)
}

/// Parses the entity element attributes.
fn parse_entity_attrs(e: &BytesStart<'_>) -> Result<Entity, ParseError> {
    let mut name: Option<String> = None;
    let mut primary_key: Option<String> = None;

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        match key {
            "name" => name = Some(value.to_string()),
            "primaryKey" => primary_key = Some(value.to_string()),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("entity", "name"))?;
    let mut entity = Entity::new(name);
    entity.primary_key = primary_key;
    Ok(entity)
}

/// Parses a field element.
fn parse_field(e: &BytesStart<'_>, entity_name: &str) -> Result<Field, ParseError> {
    let mut name: Option<String> = None;
    let mut kind: Option<ScalarKind> = None;
    let mut relation: Option<String> = None;
    let mut cardinality: Option<Cardinality> = None;
    let mut nullable = false;
    let mut optional = false;

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        match key {
            "name" => name = Some(value.to_string()),
            "kind" => {
                kind = Some(
                    ScalarKind::parse(value)
                        .ok_or_else(|| ParseError::invalid_attr("field", "kind", value))?,
                );
            }
            "relation" => relation = Some(value.to_string()),
            "cardinality" => {
                cardinality = Some(
                    Cardinality::parse(value)
                        .ok_or_else(|| ParseError::invalid_attr("field", "cardinality", value))?,
                );
            }
            "nullable" => nullable = parse_bool("field", "nullable", value)?,
            "optional" => optional = parse_bool("field", "optional", value)?,
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("field", "name"))?;

    let field_kind = match (kind, relation) {
        (Some(kind), None) => FieldKind::Scalar(kind),
        (None, Some(target)) => FieldKind::Relation {
            target,
            cardinality: cardinality.unwrap_or_default(),
        },
        (Some(_), Some(_)) => {
            return Err(ParseError::ConflictingField {
                entity: entity_name.to_string(),
                field: name,
            });
        }
        (None, None) => return Err(ParseError::missing_attr("field", "kind")),
    };

    Ok(Field {
        name,
        kind: field_kind,
        nullable,
        optional,
    })
}

/// Parses a boolean attribute value.
fn parse_bool(element: &str, attribute: &str, value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::invalid_attr(element, attribute, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOG_SCHEMA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<typeSchema package="blog" version="1">
    <entity name="Author" primaryKey="id">
        <field name="id" kind="serial"/>
        <field name="name" kind="text" nullable="true"/>
    </entity>
    <entity name="Book" primaryKey="id">
        <field name="id" kind="serial"/>
        <field name="author" relation="Author" cardinality="single"/>
        <field name="tags" relation="Tag" cardinality="many" optional="true"/>
    </entity>
    <entity name="Tag" primaryKey="id">
        <field name="id" kind="serial"/>
    </entity>
</typeSchema>"#;

    #[test]
    fn test_parse_valid_schema() {
        let schema = parse_schema(BLOG_SCHEMA).expect("Failed to parse");

        assert_eq!(schema.package, "blog");
        assert_eq!(schema.version, 1);
        assert_eq!(schema.len(), 3);

        let author = schema.get_entity("Author").expect("Author entity");
        assert_eq!(author.primary_key.as_deref(), Some("id"));
        assert_eq!(author.fields.len(), 2);
        assert_eq!(author.fields[0].kind, FieldKind::Scalar(ScalarKind::Serial));
        assert!(author.fields[1].nullable);
        assert!(!author.fields[1].optional);

        let book = schema.get_entity("Book").expect("Book entity");
        assert_eq!(
            book.fields[1].kind,
            FieldKind::Relation {
                target: "Author".to_string(),
                cardinality: Cardinality::Single,
            }
        );
        assert_eq!(
            book.fields[2].kind,
            FieldKind::Relation {
                target: "Tag".to_string(),
                cardinality: Cardinality::Many,
            }
        );
        assert!(book.fields[2].optional);
    }

    #[test]
    fn test_parse_entity_order_preserved() {
        let schema = parse_schema(BLOG_SCHEMA).expect("Failed to parse");
        let names: Vec<&str> = schema.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Author", "Book", "Tag"]);
    }

    #[test]
    fn test_parse_empty_entity_element() {
        let xml = r#"<typeSchema package="t"><entity name="Marker"/></typeSchema>"#;
        let schema = parse_schema(xml).expect("Failed to parse");
        let marker = schema.get_entity("Marker").expect("Marker entity");
        assert!(marker.fields.is_empty());
        assert!(marker.primary_key.is_none());
    }

    #[test]
    fn test_parse_missing_root() {
        let result = parse_schema("<entity name=\"A\"/>");
        assert!(matches!(result, Err(ParseError::InvalidStructure { .. })));
    }

    #[test]
    fn test_parse_missing_package() {
        let result = parse_schema("<typeSchema version=\"1\"></typeSchema>");
        assert!(matches!(
            result,
            Err(ParseError::MissingAttribute { ref element, ref attribute })
                if element == "typeSchema" && attribute == "package"
        ));
    }

    #[test]
    fn test_parse_unknown_kind() {
        let xml = r#"<typeSchema package="t">
            <entity name="A"><field name="x" kind="blob"/></entity>
        </typeSchema>"#;
        let result = parse_schema(xml);
        assert!(matches!(
            result,
            Err(ParseError::InvalidAttribute { ref attribute, ref value, .. })
                if attribute == "kind" && value == "blob"
        ));
    }

    #[test]
    fn test_parse_invalid_bool() {
        let xml = r#"<typeSchema package="t">
            <entity name="A"><field name="x" kind="text" nullable="yes"/></entity>
        </typeSchema>"#;
        let result = parse_schema(xml);
        assert!(matches!(
            result,
            Err(ParseError::InvalidAttribute { ref attribute, .. }) if attribute == "nullable"
        ));
    }

    #[test]
    fn test_parse_duplicate_entity() {
        let xml = r#"<typeSchema package="t">
            <entity name="A"><field name="x" kind="text"/></entity>
            <entity name="A"><field name="y" kind="text"/></entity>
        </typeSchema>"#;
        let result = parse_schema(xml);
        assert!(matches!(
            result,
            Err(ParseError::DuplicateDefinition { ref kind, ref name })
                if kind == "entity" && name == "A"
        ));
    }

    #[test]
    fn test_parse_duplicate_field() {
        let xml = r#"<typeSchema package="t">
            <entity name="A">
                <field name="x" kind="text"/>
                <field name="x" kind="integer"/>
            </entity>
        </typeSchema>"#;
        let result = parse_schema(xml);
        assert!(matches!(
            result,
            Err(ParseError::DuplicateDefinition { ref kind, ref name })
                if kind == "field" && name == "A.x"
        ));
    }

    #[test]
    fn test_parse_conflicting_field() {
        let xml = r#"<typeSchema package="t">
            <entity name="A"><field name="x" kind="text" relation="B"/></entity>
        </typeSchema>"#;
        let result = parse_schema(xml);
        assert!(matches!(
            result,
            Err(ParseError::ConflictingField { ref entity, ref field })
                if entity == "A" && field == "x"
        ));
    }

    #[test]
    fn test_parse_field_without_kind_or_relation() {
        let xml = r#"<typeSchema package="t">
            <entity name="A"><field name="x"/></entity>
        </typeSchema>"#;
        let result = parse_schema(xml);
        assert!(matches!(
            result,
            Err(ParseError::MissingAttribute { ref attribute, .. }) if attribute == "kind"
        ));
    }
}
