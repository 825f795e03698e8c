//! Example generating TypeScript declarations from an inline schema.
//!
//! Run with: `cargo run --example generate`

use typescribe::prelude::*;

const SCHEMA: &str = r#"<typeSchema package="library" version="1">
    <entity name="Author" primaryKey="id">
        <field name="id" kind="serial"/>
        <field name="name" kind="text"/>
        <field name="bio" kind="text" nullable="true"/>
    </entity>
    <entity name="Publisher" primaryKey="id">
        <field name="id" kind="serial"/>
        <field name="name" kind="text"/>
    </entity>
    <entity name="Book" primaryKey="id">
        <field name="id" kind="serial"/>
        <field name="title" kind="text"/>
        <field name="published" kind="date" optional="true"/>
        <field name="author" relation="Author" cardinality="single"/>
        <field name="publisher" relation="Publisher" cardinality="single" nullable="true"/>
    </entity>
</typeSchema>"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let out_dir = std::path::Path::new("generated-types");
    std::fs::create_dir_all(out_dir)?;

    let schema = parse_schema(SCHEMA)?;
    validate_schema(&schema)?;

    let written = Generator::new(&schema).generate_to_dir(out_dir)?;

    println!("Generated {} declaration files:", written.len());
    for path in &written {
        println!("  {}", path.display());
    }

    Ok(())
}
