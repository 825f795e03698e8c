//! Error types for declaration generation.

use thiserror::Error;
use typescribe_schema::{ParseError, SchemaError};

/// Error type for declaration generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Entities form a dependency cycle.
    #[error("cyclic entity dependency: {}", display_cycle(.members))]
    CyclicDependency {
        /// Cycle members, in traversal order.
        members: Vec<String>,
    },

    /// Scalar kind absent from the active type map.
    #[error("no type mapping for kind '{kind}' in field '{entity}.{field}'")]
    UnknownFieldKind {
        /// Entity name.
        entity: String,
        /// Field name.
        field: String,
        /// Unmapped kind.
        kind: String,
    },

    /// Entity name contains a character the normalizer cannot represent.
    #[error("unsupported character '{character}' in name '{name}'")]
    UnsupportedCharacter {
        /// Offending name.
        name: String,
        /// Offending character.
        character: char,
    },

    /// Unknown relation target.
    #[error("unknown relation target '{target}' in field '{field}'")]
    UnknownTarget {
        /// Target entity name.
        target: String,
        /// Qualified field name.
        field: String,
    },

    /// Referenced entity has no primary key to key the reference by.
    #[error("entity '{entity}' has no primary key")]
    MissingPrimaryKey {
        /// Entity name.
        entity: String,
    },

    /// Declaration file write error.
    #[error("failed to write declaration '{file}': {source}")]
    Write {
        /// File identifier that failed.
        file: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodegenError {
    /// Creates a cyclic dependency error from the cycle member names.
    #[must_use]
    pub fn cyclic(members: Vec<String>) -> Self {
        Self::CyclicDependency { members }
    }
}

/// Renders a cycle member list, repeating the first member to close the loop.
fn display_cycle(members: &[String]) -> String {
    let mut path = members.join(" -> ");
    if let Some(first) = members.first() {
        path.push_str(" -> ");
        path.push_str(first);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_display_closes_loop() {
        let err = CodegenError::cyclic(vec!["A".to_string(), "B".to_string()]);
        assert_eq!(err.to_string(), "cyclic entity dependency: A -> B -> A");
    }

    #[test]
    fn test_cycle_display_self_reference() {
        let err = CodegenError::cyclic(vec!["A".to_string()]);
        assert_eq!(err.to_string(), "cyclic entity dependency: A -> A");
    }
}
