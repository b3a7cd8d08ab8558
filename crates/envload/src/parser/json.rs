//! JSON object parser.
//!
//! The document root must be an object. Each top-level key becomes one
//! variable; values are stringified with [`to_env_string`].

use serde_json::Value;
use thiserror::Error;

use crate::key::is_valid_key;
use crate::parser::pyjson::to_env_string;
use crate::parser::{ParseWarning, ParsedEnv};

/// Errors that reject a JSON document as a whole.
///
/// SAFETY: variants carry positions and type names only, never document text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonParseError {
    #[error("invalid JSON at line {line}, column {column}")]
    Syntax { line: usize, column: usize },

    #[error("JSON root must be an object, found {found}")]
    NotAnObject { found: &'static str },
}

/// Parse `text` as a JSON object of variables.
pub fn parse_json(text: &str) -> Result<(ParsedEnv, Vec<ParseWarning>), JsonParseError> {
    let root: Value = serde_json::from_str(text).map_err(|e| JsonParseError::Syntax {
        line: e.line(),
        column: e.column(),
    })?;

    let map = match root {
        Value::Object(map) => map,
        other => {
            return Err(JsonParseError::NotAnObject {
                found: type_name(&other),
            });
        }
    };

    let mut parsed = ParsedEnv::new();
    let mut warnings = Vec::new();
    for (key, value) in &map {
        if is_valid_key(key) {
            parsed.insert(key.clone(), to_env_string(value));
        } else {
            warnings.push(ParseWarning::InvalidKey {
                line: None,
                key: key.clone(),
            });
        }
    }
    Ok((parsed, warnings))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
