use crate::error::{CalcError, Result};
use crate::operand;
use serde_json::{Map, Value};

/// Validated `{x, y}` body with both operands already coerced to integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationRequest {
    pub x: i64,
    pub y: i64,
}

impl OperationRequest {
    /// Parse and validate a raw request body.
    ///
    /// The body is read as JSON whatever the request's `Content-Type`. Extra keys are ignored.
    ///
    /// # Errors
    ///
    /// - [`CalcError::MalformedBody`] if the body is not a JSON object
    /// - [`CalcError::MissingField`] if `x` or `y` is absent
    /// - [`CalcError::TypeCoercion`] if a value has no integer reading
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let fields: Map<String, Value> =
            serde_json::from_slice(body).map_err(|e| CalcError::MalformedBody(e.to_string()))?;
        Self::from_fields(&fields)
    }

    /// Validate an already-parsed JSON object.
    ///
    /// # Errors
    ///
    /// Same as [`OperationRequest::from_body`], minus `MalformedBody`.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self> {
        let x = field(fields, "x")?;
        let y = field(fields, "y")?;
        Ok(Self {
            x: operand::coerce("x", x)?,
            y: operand::coerce("y", y)?,
        })
    }
}

fn field<'a>(fields: &'a Map<String, Value>, name: &'static str) -> Result<&'a Value> {
    fields.get(name).ok_or(CalcError::MissingField(name))
}
