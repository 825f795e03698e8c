//! Entity name normalization.
//!
//! Module paths and filenames both derive from `module_name`, so the rule
//! here defines the import contract between generated files: a declaration
//! is always imported from `./` + `module_name(entityName)`.

use crate::error::CodegenError;

/// Converts an entity name into its module token.
///
/// The first character is lowercased unconditionally. Every subsequent
/// uppercase letter or digit is emitted as a separator plus its lowercase
/// form, so consecutive capitals each start their own segment:
/// `"UserProfile"` becomes `"user-profile"` and `"ID"` becomes `"i-d"`.
///
/// # Errors
/// Returns `CodegenError::UnsupportedCharacter` for any character outside
/// ASCII letters and digits.
pub fn module_name(name: &str) -> Result<String, CodegenError> {
    let mut token = String::with_capacity(name.len() + 4);

    for (i, c) in name.chars().enumerate() {
        if !c.is_ascii_alphanumeric() {
            return Err(CodegenError::UnsupportedCharacter {
                name: name.to_string(),
                character: c,
            });
        }
        if i == 0 {
            token.push(c.to_ascii_lowercase());
        } else if c.is_ascii_uppercase() || c.is_ascii_digit() {
            token.push('-');
            token.push(c.to_ascii_lowercase());
        } else {
            token.push(c);
        }
    }

    Ok(token)
}
