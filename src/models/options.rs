use serde::Serialize;
use serde_json::Value;

use crate::error::ParseError;

/// Caller options for a parse.
///
/// `offset` forces message decoding to start at a byte position recorded from an
/// earlier [`ParseResult::byte_length`](crate::models::ParseResult). It only takes
/// effect when it lies past the computed start of the message region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseOptions {
    pub offset: Option<usize>,
}

impl ParseOptions {
    pub fn with_offset(offset: usize) -> Self {
        Self { offset: Some(offset) }
    }

    /// Builds options from a loosely typed JSON object such as `{"offset": 1024}`
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidArgument`] if the value is not an object, or if
    /// `offset` is present and is not a non-negative integer.
    pub fn from_value(value: &Value) -> Result<Self, ParseError> {
        let object = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(object) => object,
            other => {
                return Err(ParseError::InvalidArgument(format!(
                    "expected options object, got {}",
                    json_type_name(other)
                )));
            }
        };

        let offset = match object.get("offset") {
            None | Some(Value::Null) => None,
            Some(raw) => Some(offset_from_value(raw)?),
        };

        Ok(Self { offset })
    }
}

/// Parses a textual offset, as given on the command line
///
/// # Errors
///
/// Returns [`ParseError::InvalidArgument`] unless `raw` is a non-negative integer.
pub fn parse_offset(raw: &str) -> Result<usize, ParseError> {
    raw.trim().parse::<usize>().map_err(|_| {
        ParseError::InvalidArgument(format!("offset must be a non-negative integer, got {raw:?}"))
    })
}

fn offset_from_value(raw: &Value) -> Result<usize, ParseError> {
    let invalid = || {
        ParseError::InvalidArgument(format!("offset must be a non-negative integer, got {raw}"))
    };

    let Value::Number(number) = raw else {
        return Err(invalid());
    };

    if let Some(offset) = number.as_u64() {
        return usize::try_from(offset).map_err(|_| invalid());
    }

    // Integral floats such as 3.0 are still integers
    match number.as_f64() {
        Some(float) if float.is_finite() && float >= 0.0 && float.fract() == 0.0 => {
            if float <= usize::MAX as f64 { Ok(float as usize) } else { Err(invalid()) }
        }
        _ => Err(invalid()),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
