//! Validation and conversion entry points.

use serde_json::Value;

use crate::{Convention, ConvertError, tokenize};

/// Convert `input` to the given convention.
///
/// Fails with [`ConvertError::EmptyInput`] when `input` is blank after trimming.
///
/// # Examples
/// ```
/// use recase_core::{Convention, ConvertError, convert};
/// assert_eq!(convert("user_id", Convention::Camel).unwrap(), "userId");
/// assert_eq!(convert("   ", Convention::Dot), Err(ConvertError::EmptyInput));
/// ```
pub fn convert(input: &str, convention: Convention) -> Result<String, ConvertError> {
    if input.trim().is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    Ok(convention.join(&tokenize(input, convention)))
}

/// Convert a dynamically typed value.
///
/// Anything other than a JSON string fails with [`ConvertError::NotAString`]
/// before emptiness is checked.
pub fn convert_value(input: &Value, convention: Convention) -> Result<String, ConvertError> {
    match input {
        Value::String(s) => convert(s, convention),
        _ => Err(ConvertError::NotAString),
    }
}

/// `"First Name"` → `"firstName"`.
pub fn to_camel_case(input: &str) -> Result<String, ConvertError> {
    convert(input, Convention::Camel)
}

/// `"SCREEN_NAME"` → `"screen.name"`.
pub fn to_dot_case(input: &str) -> Result<String, ConvertError> {
    convert(input, Convention::Dot)
}

/// `"myVariableName"` → `"my-variable-name"`.
///
/// Hyphens already in the input are kept as they are.
pub fn to_kebab_case(input: &str) -> Result<String, ConvertError> {
    convert(input, Convention::Kebab)
}
