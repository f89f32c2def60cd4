//! Decoding of raw JSON request bodies into forms.
//!
//! Values are coerced per field the way the API accepts them (numeric
//! strings for numbers, integral floats for integers) and anything of the
//! wrong JSON type is reported under the field's own name.

use serde_json::{Map, Number, Value};
use thiserror::Error;
use validator::Validate;

use crate::forms::{FieldErrors, NON_FIELD_ERRORS, does_not_exist_message};

pub const NULL_MESSAGE: &str = "This field may not be null.";
pub const INVALID_STRING_MESSAGE: &str = "Not a valid string.";
pub const INVALID_INTEGER_MESSAGE: &str = "A valid integer is required.";
pub const INVALID_NUMBER_MESSAGE: &str = "A valid number is required.";

/// Request body as received. Parsed only once the target resource is known
/// to exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody(Vec<u8>);

impl FormBody {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for FormBody {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for FormBody {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl From<Value> for FormBody {
    fn from(value: Value) -> Self {
        Self(value.to_string().into_bytes())
    }
}

/// Why a body could not be turned into a form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The body is not JSON at all.
    #[error("{0}")]
    Malformed(String),
    /// The body is JSON but some fields are unusable.
    #[error(transparent)]
    Fields(#[from] FieldErrors),
}

/// Field-by-field access to a JSON object body.
///
/// Every accessor removes the field, coerces it and records a message under
/// the field name when the value has the wrong type. Absent fields read as
/// `None` and are left to the form's `required` rules.
pub struct FieldReader {
    fields: Map<String, Value>,
    errors: FieldErrors,
}

impl FieldReader {
    pub fn parse(body: &FormBody) -> Result<Self, FormError> {
        let bytes = body.as_bytes();
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::from_fields(Map::new()));
        }

        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| FormError::Malformed(format!("JSON parse error - {e}")))?;

        match value {
            Value::Object(fields) => Ok(Self::from_fields(fields)),
            other => Err(FieldErrors::single(
                NON_FIELD_ERRORS,
                format!(
                    "Invalid data. Expected a dictionary, but got {}.",
                    type_name(&other)
                ),
            )
            .into()),
        }
    }

    fn from_fields(fields: Map<String, Value>) -> Self {
        Self {
            fields,
            errors: FieldErrors::default(),
        }
    }

    fn take(&mut self, field: &str) -> Option<Value> {
        match self.fields.remove(field)? {
            Value::Null => {
                self.errors.add(field, NULL_MESSAGE);
                None
            }
            value => Some(value),
        }
    }

    /// Strings as-is; numbers in their JSON spelling.
    pub fn string(&mut self, field: &str) -> Option<String> {
        match self.take(field)? {
            Value::String(value) => Some(value),
            Value::Number(value) => Some(value.to_string()),
            _ => {
                self.errors.add(field, INVALID_STRING_MESSAGE);
                None
            }
        }
    }

    /// Integral numbers or strings such as `"5"` and `"5.0"`.
    ///
    /// Values beyond `i32` saturate so range rules still report them.
    pub fn integer(&mut self, field: &str) -> Option<i32> {
        let parsed = match self.take(field)? {
            Value::Number(value) => integral(&value),
            Value::String(value) => parse_integer(&value),
            _ => None,
        };

        match parsed {
            Some(value) => Some(saturate(value)),
            None => {
                self.errors.add(field, INVALID_INTEGER_MESSAGE);
                None
            }
        }
    }

    /// Finite numbers or numeric strings such as `"12.50"`.
    pub fn number(&mut self, field: &str) -> Option<f64> {
        let parsed = match self.take(field)? {
            Value::Number(value) => value.as_f64(),
            Value::String(value) => value.trim().parse::<f64>().ok(),
            _ => None,
        };

        match parsed.filter(|value| value.is_finite()) {
            Some(value) => Some(value),
            None => {
                self.errors.add(field, INVALID_NUMBER_MESSAGE);
                None
            }
        }
    }

    /// Primary key of a referenced row, as an integer or a digit string.
    pub fn primary_key(&mut self, field: &str) -> Option<i32> {
        let value = self.take(field)?;
        let parsed = match &value {
            Value::Number(number) => integral(number),
            Value::String(text) => text.trim().parse::<i64>().ok(),
            _ => None,
        };

        match parsed {
            Some(id) => match i32::try_from(id) {
                Ok(id) => Some(id),
                Err(_) => {
                    self.errors.add(field, does_not_exist_message(id));
                    None
                }
            },
            None => {
                self.errors.add(
                    field,
                    format!(
                        "Incorrect type. Expected pk value, received {}.",
                        type_name(&value)
                    ),
                );
                None
            }
        }
    }

    /// Return `form` when every field decoded. Otherwise report the decoding
    /// errors together with the form's own rules for the remaining fields.
    pub fn finish<F: Validate>(self, form: F) -> Result<F, FormError> {
        if self.errors.is_empty() {
            return Ok(form);
        }

        let mut errors = self.errors;
        if let Err(invalid) = form.validate() {
            errors.merge_absent(invalid.into());
        }
        Err(errors.into())
    }
}

fn integral(value: &Number) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|v| v.is_finite() && v.fract() == 0.0)
            .map(|v| v as i64)
    })
}

fn parse_integer(value: &str) -> Option<i64> {
    let value = value.trim();
    let digits = match value.split_once('.') {
        Some((whole, fraction)) if fraction.chars().all(|c| c == '0') => whole,
        _ => value,
    };
    digits.parse().ok()
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Type names as they appear in client-facing messages.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(number) if number.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
